//! Drag-and-drop state for the upload zone.
//!
//! ```text
//!            enter / over
//!  Inactive ─────────────▶ Active
//!     ▲                      │
//!     └──── leave / drop ────┘
//! ```
//!
//! A drop also adopts the first dropped file, if any. The UI is responsible
//! for suppressing the browser's default handling of every drag event.

/// Drag events the upload zone reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSignal {
    Enter,
    Over,
    Leave,
    Drop,
}

/// Whether a drag is currently hovering over the upload zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Inactive,
    Active,
}

impl DragState {
    pub fn next(self, signal: DragSignal) -> DragState {
        match signal {
            DragSignal::Enter | DragSignal::Over => DragState::Active,
            DragSignal::Leave | DragSignal::Drop => DragState::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Active)
    }

    /// Handles a drop: deactivates the zone and returns the first file.
    pub fn drop_files<T>(&mut self, files: impl IntoIterator<Item = T>) -> Option<T> {
        *self = self.next(DragSignal::Drop);
        files.into_iter().next()
    }
}
