use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use verity_core::errors::GenerationError;
use verity_core::traits::{ILanguageModel, Prompt};

/// Returns a fixed completion and records every prompt it was given.
#[derive(Debug)]
pub struct ScriptedModel {
    response: String,
    calls: AtomicUsize,
    prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedModel {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl ILanguageModel for ScriptedModel {
    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.clone());
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Fails every call with an upstream error of the given status.
#[derive(Debug)]
pub struct FailingModel {
    status: u16,
    calls: AtomicUsize,
}

impl FailingModel {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ILanguageModel for FailingModel {
    async fn complete(&self, _prompt: &Prompt) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GenerationError::Upstream {
            status: self.status,
            body: "upstream unavailable".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Sleeps before answering, for timeout tests.
#[derive(Debug)]
pub struct SlowModel {
    delay: Duration,
    response: String,
}

impl SlowModel {
    pub fn new(delay: Duration, response: impl Into<String>) -> Self {
        Self {
            delay,
            response: response.into(),
        }
    }
}

impl ILanguageModel for SlowModel {
    async fn complete(&self, _prompt: &Prompt) -> Result<String, GenerationError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "slow"
    }
}
