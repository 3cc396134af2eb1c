//! Dashboard listing: filters, material cards, and pagination.

mod empty_state;
mod filter_bar;
mod listing_view;
mod material_card;
mod pagination;

pub use empty_state::EmptyState;
pub use filter_bar::FilterBar;
pub use listing_view::ListingView;
pub use material_card::MaterialCard;
pub use pagination::Pagination;
