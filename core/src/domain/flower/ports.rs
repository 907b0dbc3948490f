use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    flower::{
        entities::LookupResult,
        value_objects::{ChatMessage, LookupFlowerInput},
    },
};

/// Chat-completion model used when the registry has no answer.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one conversation and returns the trimmed reply text.
    fn chat(
        &self,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the pet-safety lookup pipeline
pub trait FlowerSafetyService: Send + Sync {
    /// Only invalid input is an error; every other outcome, including
    /// upstream failures, is reported as a [`LookupResult`].
    fn lookup_flower(
        &self,
        input: LookupFlowerInput,
    ) -> impl Future<Output = Result<LookupResult, CoreError>> + Send;
}
