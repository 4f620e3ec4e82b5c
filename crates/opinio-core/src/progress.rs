//! Injectable progress reporting for batch pipeline stages.
//!
//! Batch jobs report through a [`ProgressSink`] instead of writing to the
//! console directly, so the same pipeline can run chatty in the CLI and
//! silent under test.

use tracing::{info, warn};

/// Observer for corpus-build and training stages.
pub trait ProgressSink {
    /// A named stage (usually one source file) is starting.
    fn on_stage_start(&self, stage: &str);

    /// A named stage finished, having produced `rows` canonical rows.
    fn on_stage_end(&self, stage: &str, rows: usize);

    /// A single row failed non-fatally and was patched over.
    fn on_row_error(&self, index: usize, text: &str, error: &str);
}

/// Default sink: structured tracing events.
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn on_stage_start(&self, stage: &str) {
        info!(stage, "stage started");
    }

    fn on_stage_end(&self, stage: &str, rows: usize) {
        info!(stage, rows, "stage finished");
    }

    fn on_row_error(&self, index: usize, text: &str, error: &str) {
        warn!(index, text, error, "row failed, substituting empty text");
    }
}

/// Sink that swallows every event.
pub struct SilentSink;

impl ProgressSink for SilentSink {
    fn on_stage_start(&self, _stage: &str) {}
    fn on_stage_end(&self, _stage: &str, _rows: usize) {}
    fn on_row_error(&self, _index: usize, _text: &str, _error: &str) {}
}
