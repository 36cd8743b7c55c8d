//! Scroll-triggered loader
//!
//! Async driver around [`PageCache`]: turns scroll positions into page
//! fetches. Network failures are logged and swallowed; the cache stays
//! retryable on the next scroll event.

use super::cache::{PageCache, PendingLoad};
use crate::http::DirectoryApi;
use shared::Employee;

/// Scroll geometry of the table container at the moment of a scroll event.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Scroll offset from the top of the content
    pub scroll_top: f64,
    /// Visible height of the container
    pub client_height: f64,
    /// Total height of the scrollable content
    pub scroll_height: f64,
}

impl Viewport {
    /// True when the view is within a third of a viewport of the bottom,
    /// the point where the next page should start loading.
    pub fn near_bottom(&self) -> bool {
        let critical = self.scroll_height - self.client_height / 3.0;
        self.scroll_top + self.client_height >= critical
    }
}

/// Drives a [`PageCache`] from scroll events.
#[derive(Debug, Default)]
pub struct ScrollLoader {
    cache: PageCache,
}

impl ScrollLoader {
    pub fn new() -> Self {
        Self {
            cache: PageCache::new(),
        }
    }

    pub fn records(&self) -> &[Employee] {
        self.cache.records()
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    /// Fetch the first page. Called once when the table mounts.
    pub async fn load_initial(&mut self, api: &impl DirectoryApi) -> usize {
        match self.cache.begin() {
            Some(pending) => self.run_fetch(pending, api).await,
            None => 0,
        }
    }

    /// Handle a scroll event: fetch the next page when the viewport is
    /// near the bottom and no request is already in flight.
    ///
    /// Returns the number of records appended (0 when the event was a
    /// no-op, the page was empty, or the fetch failed).
    pub async fn on_scroll(&mut self, viewport: Viewport, api: &impl DirectoryApi) -> usize {
        if !viewport.near_bottom() {
            return 0;
        }
        let Some(pending) = self.cache.begin() else {
            // Already loading or exhausted
            return 0;
        };
        self.run_fetch(pending, api).await
    }

    async fn run_fetch(&mut self, pending: PendingLoad, api: &impl DirectoryApi) -> usize {
        match api.fetch_page(pending.page).await {
            Ok(page) => self.cache.complete(pending, page),
            Err(e) => {
                // Left retryable; the next scroll trigger asks again
                tracing::warn!(page = pending.page, error = %e, "page load failed");
                self.cache.fail(pending);
                0
            }
        }
    }

    /// Reconcile a saved record into the cached rows.
    pub fn apply_update(&mut self, employee: Employee) {
        self.cache.apply_update(employee);
    }

    /// Drop all cached rows and start over (navigation away and back).
    pub fn reset(&mut self) {
        self.cache.reset();
    }
}
