use crate::errors::VerityResult;
use crate::models::StatementRecord;

/// Row-oriented source of labeled statements.
pub trait IDatasetSource: Send + Sync {
    /// Read every record fully into memory. A single scoped acquisition:
    /// no partial-read state is retained on failure.
    fn load(&self) -> VerityResult<Vec<StatementRecord>>;

    /// Human-readable source name for logging.
    fn name(&self) -> &str;
}
