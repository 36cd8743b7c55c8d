//! Page cache state machine
//!
//! Append-only accumulation of fetched pages with an explicit load state.
//! Transitions:
//!
//! ```text
//! Idle --begin--> Loading --complete(records)--> Idle   (cursor advanced)
//!                 Loading --complete(empty)----> Exhausted
//!                 Loading --fail--------------> Idle    (cursor unchanged)
//! ```
//!
//! `begin` is the only way to enter Loading, and it refuses while a load is
//! in flight or the collection is exhausted, which gives the at-most-one
//! in-flight request per cursor guarantee. Every transition out of Loading
//! requires the [`PendingLoad`] token from the matching `begin`; a token
//! from before a `reset` carries a stale generation and is dropped, so a
//! response that arrives for an abandoned session cannot corrupt the new
//! one.

use shared::Employee;

/// Load state of the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No request in flight; more data may exist
    Idle,
    /// Exactly one request in flight
    Loading,
    /// The server returned an empty page; final for this session
    Exhausted,
}

/// Token for an in-flight load, returned by [`PageCache::begin`]
#[derive(Debug, Clone, Copy)]
pub struct PendingLoad {
    pub page: u32,
    generation: u64,
}

/// Accumulated employee pages plus the next-page cursor
#[derive(Debug)]
pub struct PageCache {
    records: Vec<Employee>,
    cursor: u32,
    state: LoadState,
    generation: u64,
}

impl PageCache {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            cursor: 0,
            state: LoadState::Idle,
            generation: 0,
        }
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == LoadState::Exhausted
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Start a load for the current cursor.
    ///
    /// Returns `None` while a load is already in flight or after
    /// exhaustion; callers treat that as "nothing to do".
    pub fn begin(&mut self) -> Option<PendingLoad> {
        if self.state != LoadState::Idle {
            return None;
        }
        self.state = LoadState::Loading;
        Some(PendingLoad {
            page: self.cursor,
            generation: self.generation,
        })
    }

    /// Apply a successful response for `pending`.
    ///
    /// A stale token (from before a [`reset`](Self::reset)) is ignored.
    /// Returns the number of records appended.
    pub fn complete(&mut self, pending: PendingLoad, page: Vec<Employee>) -> usize {
        if !self.accepts(&pending) {
            return 0;
        }
        if page.is_empty() {
            self.state = LoadState::Exhausted;
            return 0;
        }
        let appended = page.len();
        self.records.extend(page);
        self.cursor += 1;
        self.state = LoadState::Idle;
        appended
    }

    /// Record a failed load for `pending`: back to Idle at the same cursor
    /// so the next trigger retries the page.
    pub fn fail(&mut self, pending: PendingLoad) {
        if !self.accepts(&pending) {
            return;
        }
        self.state = LoadState::Idle;
    }

    /// Discard everything and start a new session. Responses still in
    /// flight for the old session will be dropped on arrival.
    pub fn reset(&mut self) {
        self.records.clear();
        self.cursor = 0;
        self.state = LoadState::Idle;
        self.generation += 1;
    }

    /// Replace the cached entry with the same id, if present. Used to
    /// reconcile the canonical record returned by a save.
    pub fn apply_update(&mut self, employee: Employee) {
        if let Some(entry) = self.records.iter_mut().find(|e| e.id == employee.id) {
            *entry = employee;
        }
    }

    fn accepts(&self, pending: &PendingLoad) -> bool {
        pending.generation == self.generation && self.state == LoadState::Loading
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new()
    }
}
