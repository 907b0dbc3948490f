use std::sync::Arc;

use crate::domain::{
    common::retry::RetryPolicy,
    flower::{cache::LookupCache, ports::LLMClient, registry::Registry},
};

/// Shared state behind every lookup: the read-only registry, the result
/// cache and the model client used on registry misses.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) registry: Arc<Registry>,
    pub(crate) cache: Arc<LookupCache>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) retry_policy: RetryPolicy,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(
        registry: Registry,
        cache: LookupCache,
        llm_client: LLM,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            cache: Arc::new(cache),
            llm_client: Arc::new(llm_client),
            retry_policy,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }
}
