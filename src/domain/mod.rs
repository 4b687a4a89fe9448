pub mod feed;
pub mod search;
pub mod shared;
