//! Best-effort persistence of queries and their rankings.

use std::sync::Mutex;

use crate::error::LogWriteError;
use crate::ranker::RankedQuery;

/// Sink for query analytics.
///
/// Write failures are reported to the caller, but the orchestrator always
/// swallows them: result delivery never waits on log durability.
pub trait QueryLog: Send + Sync {
    /// Record one query and its predicted ranking.
    fn record(&self, entry: &RankedQuery) -> Result<(), LogWriteError>;
}

/// Discards every entry, for callers that opt out of analytics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopQueryLog;

impl QueryLog for NoopQueryLog {
    fn record(&self, _entry: &RankedQuery) -> Result<(), LogWriteError> {
        Ok(())
    }
}

/// Collects entries in memory; the reference implementation and test double.
#[derive(Debug, Default)]
pub struct InMemoryQueryLog {
    entries: Mutex<Vec<RankedQuery>>,
}

impl InMemoryQueryLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<RankedQuery> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QueryLog for InMemoryQueryLog {
    fn record(&self, entry: &RankedQuery) -> Result<(), LogWriteError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| LogWriteError("query log mutex poisoned".to_string()))?;
        entries.push(entry.clone());
        Ok(())
    }
}
