//! UI Components
//!
//! Reusable Leptos components for the candidate listing.

mod process_header;
mod item_list;
mod search_filter_controls;
mod category_filter;
mod sort_select;
mod layout_toggle;
mod item_grid;
mod item_card;
mod skeleton_grid;
mod pagination_controls;

pub use process_header::ProcessHeader;
pub use item_list::{ItemList, ListState, PageView};
pub use search_filter_controls::SearchFilterControls;
pub use category_filter::{CategoryFilter, toggle_category};
pub use sort_select::SortSelect;
pub use layout_toggle::LayoutToggle;
pub use item_grid::{ItemGrid, EmptyState};
pub use item_card::{ItemCard, search_url};
pub use skeleton_grid::SkeletonGrid;
pub use pagination_controls::PaginationControls;
