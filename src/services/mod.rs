pub mod feed_processor;
pub mod publisher;

pub use feed_processor::{FeedProcessor, FeedReport, ProcessorSettings};
pub use publisher::{MastodonPublisher, StatusPublisher};
