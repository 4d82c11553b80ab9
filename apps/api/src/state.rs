use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: every request runs its own independent pipeline.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document parser. Default: DocumentExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
