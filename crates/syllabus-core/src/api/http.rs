//! reqwest implementation of [`MaterialsApi`].
//!
//! reqwest works on both targets:
//! - Native: hyper with rustls for HTTPS
//! - WASM: the browser's fetch() API
//!
//! Non-success responses are mapped to [`ApiError::Status`] carrying the
//! FastAPI-style `{"detail": ...}` text when the body has one.

use super::{DownloadedFile, MaterialsApi};
use crate::access::User;
use crate::config::{self, ApiConfig, MATERIALS_SEGMENT};
use crate::draft::{MaterialUpdate, UploadRequest};
use crate::error::ApiError;
use crate::filter::MaterialFilter;
use crate::material::{Material, MaterialPage};
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Request, RequestBuilder, Response};
use tracing::debug;

/// HTTP client bound to one API base URL and (optionally) one bearer token.
#[derive(Debug, Clone)]
pub struct HttpMaterialsApi {
    client: Client,
    config: ApiConfig,
}

impl HttpMaterialsApi {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        let builder = Client::builder()
            .user_agent(config::USER_AGENT)
            .timeout(std::time::Duration::from_secs(config::HTTP_TIMEOUT_SECS));

        #[cfg(target_arch = "wasm32")]
        let builder = Client::builder();

        let client = builder
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.config.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn material_url(&self, id: &str) -> url::Url {
        self.config.endpoint(&[MATERIALS_SEGMENT, id])
    }

    pub(crate) fn list_request(&self, filter: &MaterialFilter) -> Result<Request, ApiError> {
        let url = self.config.endpoint(&[MATERIALS_SEGMENT, ""]);
        let pairs = filter.query_pairs();
        let builder = if pairs.is_empty() {
            self.client.get(url)
        } else {
            self.client.get(url).query(&pairs)
        };
        Ok(self.authorize(builder).build()?)
    }

    pub(crate) fn get_request(&self, id: &str) -> Result<Request, ApiError> {
        Ok(self.authorize(self.client.get(self.material_url(id))).build()?)
    }

    pub(crate) fn download_request(&self, id: &str) -> Result<Request, ApiError> {
        let url = self.config.endpoint(&[MATERIALS_SEGMENT, id, "download"]);
        Ok(self.authorize(self.client.get(url)).build()?)
    }

    pub(crate) fn update_request(
        &self,
        id: &str,
        update: &MaterialUpdate,
    ) -> Result<Request, ApiError> {
        let builder = self.client.put(self.material_url(id)).json(update);
        Ok(self.authorize(builder).build()?)
    }

    pub(crate) fn delete_request(&self, id: &str) -> Result<Request, ApiError> {
        Ok(self
            .authorize(self.client.delete(self.material_url(id)))
            .build()?)
    }

    fn upload_form(request: &UploadRequest) -> Result<Form, ApiError> {
        let mut part = Part::bytes(request.file.bytes.clone()).file_name(request.file.name.clone());
        if let Some(content_type) = &request.file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| ApiError::Request(format!("Invalid file type {content_type}: {e}")))?;
        }

        let mut form = Form::new().part("file", part);
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        Ok(form)
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        debug!("{} {}", request.method(), request.url());
        let response = self.client.execute(request).await?;
        check_status(response).await
    }
}

/// Passes success responses through and turns the rest into [`ApiError::Status`].
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        detail: extract_detail(&body),
    })
}

/// Pulls the human-readable detail out of an error body.
///
/// FastAPI uses a string for handler errors and an array of
/// `{"loc": [...], "msg": "..."}` objects for request validation errors.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn header_string(response: &Response, name: reqwest::header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[async_trait::async_trait(?Send)]
impl MaterialsApi for HttpMaterialsApi {
    async fn list(&self, filter: &MaterialFilter) -> Result<MaterialPage, ApiError> {
        let response = self.send(self.list_request(filter)?).await?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Material, ApiError> {
        let response = self.send(self.get_request(id)?).await?;
        Ok(response.json().await?)
    }

    async fn download(&self, id: &str) -> Result<DownloadedFile, ApiError> {
        let response = self.send(self.download_request(id)?).await?;

        let content_disposition = header_string(&response, CONTENT_DISPOSITION);
        let content_type = header_string(&response, CONTENT_TYPE);
        let bytes = response.bytes().await?;

        Ok(DownloadedFile {
            bytes: bytes.to_vec(),
            content_disposition,
            content_type,
        })
    }

    async fn upload(&self, request: &UploadRequest) -> Result<Material, ApiError> {
        let url = self.config.endpoint(&[MATERIALS_SEGMENT, "upload"]);
        let form = Self::upload_form(request)?;
        let built = self.authorize(self.client.post(url).multipart(form)).build()?;

        let response = self.send(built).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, update: &MaterialUpdate) -> Result<Material, ApiError> {
        let response = self.send(self.update_request(id, update)?).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.delete_request(id)?).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        let url = self.config.endpoint(&config::CURRENT_USER_PATH);
        let built = self.authorize(self.client.get(url)).build()?;
        let response = self.send(built).await?;
        Ok(response.json().await?)
    }
}
