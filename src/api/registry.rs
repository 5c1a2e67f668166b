use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{AdapterError, AdapterResult};

use super::{AdapterOptions, ChronoDateAdapter, DateAdapter};

/// Host-side registration point for date adapters, keyed by adapter id.
///
/// Registration order is preserved. At most one adapter is active; the host
/// resolves time-axis calls through [`AdapterRegistry::active`].
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: IndexMap<String, Arc<dyn DateAdapter>>,
    active: Option<String>,
}

impl AdapterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with [`ChronoDateAdapter`] registered and active.
    #[must_use]
    pub fn with_default() -> Self {
        Self::with_default_options(AdapterOptions::default())
    }

    #[must_use]
    pub fn with_default_options(options: AdapterOptions) -> Self {
        let mut registry = Self::new();
        registry.override_with(Arc::new(ChronoDateAdapter::new(options)));
        registry
    }

    pub fn register(&mut self, adapter: Arc<dyn DateAdapter>) -> AdapterResult<()> {
        let adapter_id = adapter.id().to_owned();
        if adapter_id.is_empty() {
            return Err(AdapterError::InvalidAdapterId);
        }
        if self.adapters.contains_key(&adapter_id) {
            return Err(AdapterError::DuplicateAdapter { id: adapter_id });
        }
        debug!(adapter_id = %adapter_id, "registered date adapter");
        self.adapters.insert(adapter_id, adapter);
        Ok(())
    }

    /// Registers `adapter`, replacing any adapter with the same id, and makes
    /// it the active one. Adapters with an empty id are ignored.
    pub fn override_with(&mut self, adapter: Arc<dyn DateAdapter>) {
        let adapter_id = adapter.id().to_owned();
        if adapter_id.is_empty() {
            debug!("ignoring date adapter override with empty id");
            return;
        }
        debug!(adapter_id = %adapter_id, "overriding active date adapter");
        self.adapters.insert(adapter_id.clone(), adapter);
        self.active = Some(adapter_id);
    }

    pub fn set_active(&mut self, adapter_id: &str) -> AdapterResult<()> {
        if !self.adapters.contains_key(adapter_id) {
            return Err(AdapterError::UnknownAdapter {
                id: adapter_id.to_owned(),
            });
        }
        self.active = Some(adapter_id.to_owned());
        Ok(())
    }

    /// Unregisters an adapter by id. Returns `true` when removed.
    pub fn unregister(&mut self, adapter_id: &str) -> bool {
        let removed = self.adapters.shift_remove(adapter_id).is_some();
        if removed && self.active.as_deref() == Some(adapter_id) {
            self.active = None;
        }
        removed
    }

    #[must_use]
    pub fn get(&self, adapter_id: &str) -> Option<Arc<dyn DateAdapter>> {
        self.adapters.get(adapter_id).cloned()
    }

    #[must_use]
    pub fn active(&self) -> Option<Arc<dyn DateAdapter>> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.adapters.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    #[must_use]
    pub fn contains(&self, adapter_id: &str) -> bool {
        self.adapters.contains_key(adapter_id)
    }
}
