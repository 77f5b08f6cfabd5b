// Provider trait for the remote literacy dataset
use crate::domain::record::LiteracyRecord;
use async_trait::async_trait;

/// Fetch-and-parse seam for the tabular dataset.
///
/// One attempt per call: failures surface as a single error value, and an
/// in-flight fetch is never aborted by a newer one.
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    async fn fetch_records(&self) -> anyhow::Result<Vec<LiteracyRecord>>;
}
