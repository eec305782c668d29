use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::error::CompletionError;
use super::CompletionClient;

enum ScriptedReply {
    Text(String),
    Failure(String),
}

/// Scripted completion client for tests.
///
/// Replies are consumed front-to-back; every prompt is recorded. An empty
/// script fails the call, which exercises the degraded adjudication path.
#[derive(Default)]
pub struct MockCompletion {
    replies: Mutex<VecDeque<ScriptedReply>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn reply(self, text: &str) -> Self {
        self.replies
            .lock()
            .push_back(ScriptedReply::Text(text.to_string()));
        self
    }

    /// Queues a failing call.
    pub fn fail(self, reason: &str) -> Self {
        self.replies
            .lock()
            .push_back(ScriptedReply::Failure(reason.to_string()));
        self
    }

    /// Number of completion invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

impl CompletionClient for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(prompt.to_string());

        match self.replies.lock().pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(text),
            Some(ScriptedReply::Failure(reason)) => {
                Err(CompletionError::RequestFailed { reason })
            }
            None => Err(CompletionError::RequestFailed {
                reason: "no scripted reply".to_string(),
            }),
        }
    }
}
