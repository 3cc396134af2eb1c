//! Display helpers shared by the views.

pub mod formatting;

pub use formatting::{format_date, format_material_count};
