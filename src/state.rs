//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::providers::{JudgeApi, TextProvider};
use crate::store::{DocumentStore, IdentityProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Document store holding user profiles, reservations, and notes
    pub store: Arc<dyn DocumentStore>,

    /// Managed identity provider (accounts, sessions, token lookup)
    pub identity: Arc<dyn IdentityProvider>,

    /// Remote code-execution judge
    pub judge: Arc<dyn JudgeApi>,

    /// Generative text providers in fallback-priority order
    pub text_providers: Vec<Arc<dyn TextProvider>>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        judge: Arc<dyn JudgeApi>,
        text_providers: Vec<Arc<dyn TextProvider>>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                identity,
                judge,
                text_providers,
                config,
            }),
        }
    }

    /// Get a reference to the document store
    pub fn store(&self) -> &dyn DocumentStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the identity provider
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.inner.identity.as_ref()
    }

    /// Get a reference to the judge client
    pub fn judge(&self) -> &dyn JudgeApi {
        self.inner.judge.as_ref()
    }

    /// Get the ordered generative-provider chain
    pub fn text_providers(&self) -> &[Arc<dyn TextProvider>] {
        &self.inner.text_providers
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
