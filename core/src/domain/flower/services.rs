use tracing::{debug, error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    flower::{
        entities::LookupResult,
        matcher::{MatchKind, Matcher},
        normalizer::normalize,
        ports::{FlowerSafetyService, LLMClient},
        prompt::{build_messages, is_verified_reply},
        value_objects::LookupFlowerInput,
    },
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    /// Registry first, model second. Never fails: model errors become an
    /// error-sourced result.
    async fn resolve(&self, key: &str, raw_name: &str) -> LookupResult {
        if let Some(found) = Matcher::default().find(key, &self.registry) {
            match found.kind {
                MatchKind::Exact => debug!(key, "registry exact match"),
                MatchKind::Fuzzy { score } => {
                    debug!(key, matched = %found.entry.name, score, "registry fuzzy match")
                }
            }
            return LookupResult::from_entry(found.entry);
        }

        self.fallback_lookup(key, raw_name).await
    }

    /// Asks the model about a flower the registry does not know, grounding
    /// the question with a registry excerpt. The question quotes the name as
    /// the user typed it; the result is reported under the normalized `flower`.
    #[instrument(skip(self))]
    pub async fn fallback_lookup(&self, flower: &str, raw_name: &str) -> LookupResult {
        let messages = build_messages(raw_name.trim(), &self.registry);

        let reply = self
            .retry_policy
            .run(|attempt| {
                debug!(attempt, "asking model");
                self.llm_client.chat(messages.clone())
            })
            .await;

        match reply {
            Ok(reply) => {
                let verified = is_verified_reply(&reply);
                LookupResult::from_llm(flower, reply, verified)
            }
            Err(e) => {
                error!("model fallback failed for {}: {}", flower, e);
                LookupResult::from_error(flower, &e)
            }
        }
    }
}

impl<LLM> FlowerSafetyService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self), fields(flower = %input.flower))]
    async fn lookup_flower(&self, input: LookupFlowerInput) -> Result<LookupResult, CoreError> {
        let key = normalize(&input.flower)?;

        let result = self
            .cache
            .get_or_compute(&key, || self.resolve(&key, &input.flower))
            .await;

        info!(
            key,
            source = ?result.source,
            verified = result.verified,
            "flower lookup finished"
        );

        Ok(result)
    }
}
