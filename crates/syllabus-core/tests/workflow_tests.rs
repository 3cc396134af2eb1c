//! End-to-end tests for the view workflows against the in-memory API.
//!
//! These exercise the same functions the listing, upload, and edit views
//! call, checking both the outcome and exactly which requests were issued.

use std::cell::RefCell;
use syllabus_core::api::{ApiCall, CallKind, InMemoryMaterialsApi, MaterialsApi};
use syllabus_core::workflow::{
    delete_and_refresh, delete_material, delete_prompt, delete_prompt_irreversible,
    download_material, fetch_materials, load_for_edit, save_edit, upload_material, Confirmer,
    DeleteOutcome, EditOutcome, FileSaver, RefreshedListing,
};
use syllabus_core::{
    ApiError, Category, DownloadError, DraftError, Material, MaterialDraft, MaterialFilter,
    SelectedFile, SubmitError,
};

// ============================================================================
// Fixtures
// ============================================================================

fn material(id: &str, title: &str, category: Category, week: Option<u32>) -> Material {
    Material {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(format!("{title} notes")),
        category,
        week,
        topic: None,
        tags: vec![],
        file_type: "application/pdf".to_string(),
        created_at: "2025-02-01T10:00:00".to_string(),
        updated_at: None,
    }
}

fn seeded_api() -> InMemoryMaterialsApi {
    InMemoryMaterialsApi::new()
        .with_material(material("m1", "Sorting", Category::Theory, Some(1)), b"sort".to_vec())
        .with_material(material("m2", "Graphs Lab", Category::Lab, Some(2)), b"graph".to_vec())
        .with_material(material("m3", "Trees", Category::Theory, None), b"tree".to_vec())
}

fn pdf(name: &str) -> SelectedFile {
    SelectedFile::new(name, Some("application/pdf".into()), b"%PDF-1.7".to_vec())
}

fn server_error(detail: &str) -> ApiError {
    ApiError::Status {
        status: 500,
        detail: Some(detail.to_string()),
    }
}

/// Confirmer with a fixed answer that remembers what it was asked.
struct Answer {
    yes: bool,
    asked: RefCell<Vec<String>>,
}

impl Answer {
    fn yes() -> Self {
        Self {
            yes: true,
            asked: RefCell::new(Vec::new()),
        }
    }

    fn no() -> Self {
        Self {
            yes: false,
            asked: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Confirmer for Answer {
    async fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.yes
    }
}

/// Saver that keeps what it was given, or fails on demand.
#[derive(Default)]
struct Saved {
    files: RefCell<Vec<(String, String, Vec<u8>)>>,
    fail: bool,
}

#[async_trait::async_trait(?Send)]
impl FileSaver for Saved {
    async fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
        if self.fail {
            return Err("disk full".to_string());
        }
        self.files
            .borrow_mut()
            .push((filename.to_string(), mime.to_string(), bytes.to_vec()));
        Ok(())
    }
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_listing_is_newest_first_and_filterable() {
    let api = seeded_api();

    let all = fetch_materials(&api, &MaterialFilter::default()).await;
    let ids: Vec<_> = all.materials.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m3", "m2", "m1"]);
    assert_eq!(all.total, 3);

    let mut filter = MaterialFilter::default();
    filter.set_category("theory");
    filter.set_search("sort".into());
    let narrowed = fetch_materials(&api, &filter).await;
    assert_eq!(narrowed.materials.len(), 1);
    assert_eq!(narrowed.materials[0].id, "m1");
}

#[tokio::test]
async fn test_listing_degrades_to_empty_on_error() {
    let api = seeded_api();
    api.fail_on(CallKind::List, ApiError::Request("offline".into()));

    let page = fetch_materials(&api, &MaterialFilter::default()).await;
    assert!(page.is_empty());
}

// ============================================================================
// Download
// ============================================================================

#[tokio::test]
async fn test_download_uses_header_filename() {
    let api = seeded_api();
    let saver = Saved::default();
    let target = material("m2", "Graphs Lab", Category::Lab, Some(2));

    let filename = download_material(&api, &saver, &target).await.unwrap();
    assert_eq!(filename, "Graphs Lab.pdf");

    let files = saver.files.borrow();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].1, "application/pdf");
    assert_eq!(files[0].2, b"graph".to_vec());
}

#[tokio::test]
async fn test_download_failure_is_reported_not_saved() {
    let api = seeded_api();
    api.fail_on(CallKind::Download, ApiError::not_found("File not found on server"));
    let saver = Saved::default();

    let result = download_material(&api, &saver, &material("m1", "Sorting", Category::Theory, None)).await;
    assert!(matches!(result, Err(DownloadError::Fetch(_))));
    assert!(saver.files.borrow().is_empty());
}

#[tokio::test]
async fn test_download_save_failure() {
    let api = seeded_api();
    let saver = Saved {
        fail: true,
        ..Saved::default()
    };
    let result = download_material(&api, &saver, &material("m1", "Sorting", Category::Theory, None)).await;
    assert_eq!(result, Err(DownloadError::Save("disk full".into())));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_cancelled_delete_issues_no_call() {
    let api = seeded_api();
    let answer = Answer::no();
    let target = material("m1", "Sorting", Category::Theory, Some(1));

    let result = delete_and_refresh(&api, &answer, &target, &MaterialFilter::default())
        .await
        .unwrap();

    assert_eq!(result, None);
    assert!(api.calls().is_empty());
    assert_eq!(api.materials().len(), 3);
    assert_eq!(*answer.asked.borrow(), vec![delete_prompt("Sorting")]);
}

#[tokio::test]
async fn test_confirmation_names_the_material() {
    assert_eq!(
        delete_prompt("Week 3 slides"),
        "Are you sure you want to delete \"Week 3 slides\"?"
    );
    assert!(delete_prompt_irreversible("Week 3 slides").ends_with("cannot be undone."));
}

#[tokio::test]
async fn test_confirmed_delete_refetches_current_filter() {
    let api = seeded_api();
    let mut filter = MaterialFilter::default();
    filter.set_category("theory");

    let target = material("m1", "Sorting", Category::Theory, Some(1));
    let refreshed = delete_and_refresh(&api, &Answer::yes(), &target, &filter)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(refreshed.filter, filter);
    assert_eq!(refreshed.page.materials.len(), 1);
    assert_eq!(refreshed.page.materials[0].id, "m3");
    assert_eq!(
        api.calls(),
        vec![ApiCall::Delete("m1".into()), ApiCall::List(filter)]
    );
}

#[tokio::test]
async fn test_delete_emptying_last_page_steps_back() {
    // 21 materials: the oldest one sits alone on page 2
    let api = (0..21).fold(InMemoryMaterialsApi::new(), |api, i| {
        let id = format!("m{i}");
        api.with_material(material(&id, &id, Category::Theory, None), Vec::new())
    });
    let mut filter = MaterialFilter::default();
    filter.go_to_page(2);

    let target = material("m0", "m0", Category::Theory, None);
    let RefreshedListing { filter: landed, page } =
        delete_and_refresh(&api, &Answer::yes(), &target, &filter)
            .await
            .unwrap()
            .unwrap();

    assert_eq!(landed.page, 1);
    assert_eq!(page.page, 1);
    assert_eq!(page.materials.len(), 20);
    assert_eq!(
        api.calls(),
        vec![
            ApiCall::Delete("m0".into()),
            ApiCall::List(filter),
            ApiCall::List(landed),
        ]
    );
}

#[tokio::test]
async fn test_delete_on_first_page_never_steps_back() {
    let api = InMemoryMaterialsApi::new()
        .with_material(material("m1", "Sorting", Category::Theory, Some(1)), Vec::new());
    let target = material("m1", "Sorting", Category::Theory, Some(1));

    let refreshed = delete_and_refresh(&api, &Answer::yes(), &target, &MaterialFilter::default())
        .await
        .unwrap()
        .unwrap();

    assert!(refreshed.page.is_empty());
    assert_eq!(refreshed.filter.page, 1);
    assert_eq!(api.call_kinds(), vec![CallKind::Delete, CallKind::List]);
}

#[tokio::test]
async fn test_failed_delete_does_not_refresh() {
    let api = seeded_api();
    api.fail_on(CallKind::Delete, server_error("database locked"));
    let target = material("m1", "Sorting", Category::Theory, Some(1));

    let err = delete_and_refresh(&api, &Answer::yes(), &target, &MaterialFilter::default())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "database locked");
    assert_eq!(api.call_kinds(), vec![CallKind::Delete]);
    assert_eq!(api.materials().len(), 3);
}

#[tokio::test]
async fn test_edit_view_delete() {
    let api = seeded_api();
    let outcome = delete_material(&api, &Answer::yes(), "m2", &delete_prompt_irreversible("Graphs Lab"))
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(api.materials().iter().all(|m| m.id != "m2"));
}

// ============================================================================
// Upload
// ============================================================================

#[tokio::test]
async fn test_upload_without_file_issues_no_call() {
    let api = seeded_api();
    let draft = MaterialDraft {
        title: "Week 4".into(),
        ..MaterialDraft::default()
    };

    let err = upload_material(&api, &draft, None).await.unwrap_err();
    assert_eq!(err, SubmitError::Invalid(DraftError::MissingFile));
    assert_eq!(err.user_message(), "Please select a file");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_upload_sends_only_filled_fields() {
    let api = InMemoryMaterialsApi::new();
    let draft = MaterialDraft {
        title: "Recursion".into(),
        category: Category::Lab,
        tags: "recursion, base case".into(),
        ..MaterialDraft::default()
    };

    let created = upload_material(&api, &draft, Some(&pdf("rec.pdf"))).await.unwrap();
    assert_eq!(created.tags, vec!["recursion", "base case"]);
    assert_eq!(created.week, None);

    let calls = api.calls();
    let ApiCall::Upload(request) = &calls[0] else {
        panic!("expected an upload, got {:?}", calls);
    };
    let names: Vec<_> = request.text_fields().into_iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["title", "description", "category", "tags"]);
}

#[tokio::test]
async fn test_upload_failure_prefers_server_detail() {
    let api = InMemoryMaterialsApi::new();
    api.fail_on(
        CallKind::Upload,
        ApiError::Status {
            status: 413,
            detail: Some("File size exceeds maximum allowed size of 100.0MB".into()),
        },
    );
    let draft = MaterialDraft {
        title: "Huge".into(),
        ..MaterialDraft::default()
    };

    let err = upload_material(&api, &draft, Some(&pdf("huge.pdf"))).await.unwrap_err();
    assert_eq!(
        err.user_message(),
        "File size exceeds maximum allowed size of 100.0MB"
    );

    api.fail_on(CallKind::Upload, ApiError::Request("offline".into()));
    let err = upload_material(&api, &draft, Some(&pdf("huge.pdf"))).await.unwrap_err();
    assert_eq!(err.user_message(), "Upload failed");
}

// ============================================================================
// Edit
// ============================================================================

#[tokio::test]
async fn test_load_for_edit_prefills_draft() {
    let api = InMemoryMaterialsApi::new().with_material(
        Material {
            tags: vec!["a".into(), "b".into()],
            ..material("m9", "Hashing", Category::Theory, Some(6))
        },
        vec![],
    );

    let (loaded, draft) = load_for_edit(&api, "m9").await.unwrap();
    assert_eq!(loaded.id, "m9");
    assert_eq!(draft.tags, "a, b");
    assert_eq!(draft.week, "6");

    let err = load_for_edit(&api, "missing").await.unwrap_err();
    assert_eq!(err.user_message(), "Material not found");
}

#[tokio::test]
async fn test_metadata_only_update() {
    let api = seeded_api();
    let draft = MaterialDraft {
        title: "Sorting (revised)".into(),
        week: String::new(),
        tags: String::new(),
        ..MaterialDraft::default()
    };

    let outcome = save_edit(&api, "m1", &draft, None).await.unwrap();
    let EditOutcome::Updated(updated) = outcome else {
        panic!("expected an in-place update");
    };
    assert_eq!(updated.id, "m1");
    assert_eq!(updated.week, None);
    assert!(updated.tags.is_empty());
    assert_eq!(api.call_kinds(), vec![CallKind::Update]);
}

#[tokio::test]
async fn test_replacement_file_always_deletes_then_uploads() {
    let api = seeded_api();
    let mut draft = MaterialDraft::from_material(&material("m1", "Sorting", Category::Theory, Some(1)));
    draft.title = "Sorting v2".into();
    draft.week = "2".into();

    let outcome = save_edit(&api, "m1", &draft, Some(&pdf("sorting-v2.pdf")))
        .await
        .unwrap();

    assert_eq!(api.call_kinds(), vec![CallKind::Delete, CallKind::Upload]);
    let EditOutcome::Replaced(created) = outcome else {
        panic!("expected a replacement");
    };
    assert_ne!(created.id, "m1");
    assert_eq!(created.title, "Sorting v2");
    assert_eq!(created.week, Some(2));
    assert!(api.materials().iter().all(|m| m.id != "m1"));
}

#[tokio::test]
async fn test_invalid_replacement_draft_keeps_original() {
    let api = seeded_api();
    let draft = MaterialDraft {
        title: "Sorting".into(),
        week: "-1".into(),
        ..MaterialDraft::default()
    };

    let err = save_edit(&api, "m1", &draft, Some(&pdf("x.pdf"))).await.unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(DraftError::InvalidWeek(_))));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_failed_delete_during_replacement_is_plain_failure() {
    let api = seeded_api();
    api.fail_on(CallKind::Delete, server_error("Not enough permissions. Admin access required."));
    let draft = MaterialDraft {
        title: "Sorting".into(),
        ..MaterialDraft::default()
    };

    let err = save_edit(&api, "m1", &draft, Some(&pdf("x.pdf"))).await.unwrap_err();
    assert!(!err.is_data_loss());
    assert_eq!(
        err.user_message(),
        "Not enough permissions. Admin access required."
    );
    assert_eq!(api.call_kinds(), vec![CallKind::Delete]);
}

#[tokio::test]
async fn test_failed_upload_after_delete_reports_data_loss() {
    let api = seeded_api();
    api.fail_on(CallKind::Upload, server_error("Error saving file: disk full"));
    let draft = MaterialDraft {
        title: "Sorting".into(),
        ..MaterialDraft::default()
    };

    let err = save_edit(&api, "m1", &draft, Some(&pdf("x.pdf"))).await.unwrap_err();
    assert!(err.is_data_loss());
    assert!(err.user_message().contains("Error saving file: disk full"));
    assert!(api.materials().iter().all(|m| m.id != "m1"));
}

#[tokio::test]
async fn test_current_user_requires_session() {
    let api = InMemoryMaterialsApi::new();
    let err = api.current_user().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}
