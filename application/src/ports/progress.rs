//! Progress notification port
//!
//! Defines the interface for reporting progress while paginating a
//! collection.

/// Callback for progress updates during a paginated fetch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called before the first page of `collection` is requested
    fn on_fetch_start(&self, collection: &str);

    /// Called after each page that contributed items
    fn on_page_loaded(&self, collection: &str, page: u32, total_items: usize);

    /// Called once pagination stops; `degraded` is set when it stopped on an error
    fn on_fetch_complete(&self, collection: &str, total_items: usize, degraded: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_fetch_start(&self, _collection: &str) {}
    fn on_page_loaded(&self, _collection: &str, _page: u32, _total_items: usize) {}
    fn on_fetch_complete(&self, _collection: &str, _total_items: usize, _degraded: bool) {}
}
