//! Upload form with drag-and-drop file selection.

mod dropzone;
mod upload_view;

pub use dropzone::DropZone;
pub use upload_view::UploadView;
