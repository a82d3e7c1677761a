//! Holders module - paging, caching and table rows for token holders and
//! NFT holdings.

mod holders_model;
mod holders_service;
mod holders_traits;
mod page_cache;
mod pagination;


pub use holders_model::{HolderRow, HoldersTablePage};
pub use holders_service::{build_holder_rows, HoldersCacheConfig, HoldersService};
pub use holders_traits::HoldersServiceTrait;
pub use page_cache::PageCache;
pub use pagination::{next_page_offset, HoldersQueryKey, NftHoldingsQueryKey, PageRequest, Paged};
