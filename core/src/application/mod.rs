use crate::{
    domain::{
        common::{BloomCheckConfig, entities::app_errors::CoreError, services::Service},
        flower::{cache::LookupCache, registry::Registry},
    },
    infrastructure::llm::OpenAiLLMClient,
};

pub type BloomCheckService = Service<OpenAiLLMClient>;

pub fn create_service(config: BloomCheckConfig) -> Result<BloomCheckService, CoreError> {
    let llm_client = OpenAiLLMClient::new(&config.llm)?;
    let registry = Registry::curated();

    tracing::info!(
        flowers = registry.len(),
        cache_capacity = config.cache.capacity,
        model = %config.llm.openai_model,
        "creating flower safety service"
    );

    Ok(Service::new(
        registry,
        LookupCache::new(config.cache.capacity),
        llm_client,
        config.retry.into(),
    ))
}
