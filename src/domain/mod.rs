pub mod feed;
pub mod entry;
pub mod toot;

pub use feed::FeedConfig;
pub use entry::{Entry, FeedItem};
pub use toot::{build_status, Toot};
