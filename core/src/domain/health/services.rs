use crate::domain::{
    common::services::Service,
    flower::ports::LLMClient,
    health::{entities::HealthStatus, ports::HealthCheckService},
};

impl<LLM> HealthCheckService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            message: "Flower Safety API running".to_string(),
            registry_size: self.registry.len(),
            cached_entries: self.cache.len().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{entities::app_errors::CoreError, retry::RetryPolicy},
        flower::{
            cache::LookupCache, entities::LookupResult, registry::Registry,
            value_objects::ChatMessage,
        },
    };

    struct OfflineLLM;

    impl LLMClient for OfflineLLM {
        async fn chat(&self, _messages: Vec<ChatMessage>) -> Result<String, CoreError> {
            Err(CoreError::ConfigurationError("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_health_reports_registry_and_cache_sizes() {
        let service = Service::new(
            Registry::curated(),
            LookupCache::new(10),
            OfflineLLM,
            RetryPolicy::default(),
        );
        let roses = LookupResult::from_entry(service.registry().get("roses").unwrap());
        service.cache().put("roses".to_string(), roses).await;

        let status = service.health().await;
        assert_eq!(status.status, "ok");
        assert_eq!(status.registry_size, Registry::curated().len());
        assert_eq!(status.cached_entries, 1);
    }
}
