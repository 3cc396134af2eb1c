//! Edit form for an existing material.

mod edit_view;

pub use edit_view::EditView;
