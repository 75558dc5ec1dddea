pub mod files;
pub mod paging;
