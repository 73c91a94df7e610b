use std::sync::Arc;

use crate::comparison::aggregator::CompareOptions;
use crate::comparison::aligner::EntryAligner;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Engine knobs derived from config (threshold, skill casing).
    pub options: CompareOptions,
    /// Pluggable entry alignment policy. Default: id with similarity
    /// fallback. Swap via ALIGN_STRATEGY env.
    pub aligner: Arc<dyn EntryAligner>,
}
