//! Voto Listing
//!
//! Target-independent logic behind the candidate listing: the filter/sort
//! pipeline, the pagination slicer, the bookmark store and the debouncer.
//! Browser adapters (localStorage, timers) live in the UI crate and plug in
//! through `KeyValueStore` and `TimerScheduler`.

pub mod bookmarks;
pub mod date;
pub mod debounce;
pub mod error;
pub mod item;
pub mod layout;
pub mod pagination;
pub mod pipeline;
pub mod sort;

pub use bookmarks::{BookmarkSet, BookmarkStore, KeyValueStore, MemoryStore, BOOKMARKS_KEY};
pub use debounce::{Debouncer, TimerHandle, TimerScheduler, TimerTask};
pub use error::{StorageError, StorageResult};
pub use item::{category_options, Candidate, CategoryOption, ItemId, Listable};
pub use layout::{LayoutKind, LayoutParams};
pub use pagination::{
    page_links, paginate, PageLink, PageRequest, PageWindow, Pagination, PAGE_SIZE_OPTIONS,
};
pub use pipeline::{apply, ListQuery};
pub use sort::{SortDirection, SortField, SortOption};
