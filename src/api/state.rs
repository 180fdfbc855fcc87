use std::sync::Arc;

use crate::dataset::Dataset;
use crate::services::providers::MetadataProvider;

/// Shared application state
///
/// The dataset is loaded once at startup and never mutated, so handlers
/// share it behind plain `Arc`s with no locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub metadata: Arc<dyn MetadataProvider>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, metadata: Arc<dyn MetadataProvider>) -> Self {
        Self { dataset, metadata }
    }
}
