use async_trait::async_trait;
use marketmood::{Error, Result, llm::TextGenerator};
use std::sync::Mutex;

/// Scripted text generator for testing: replies are consumed in order and
/// every received prompt is recorded.
pub struct MockGenerator {
    replies: Mutex<Vec<Result<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_replies(self, replies: &[&str]) -> Self {
        *self.replies.lock().unwrap() = replies
            .iter()
            .map(|reply| Ok(reply.to_string()))
            .collect();
        self
    }

    pub fn with_failure_after(self, replies: &[&str], error: &str) -> Self {
        let mut scripted: Vec<Result<String>> = replies
            .iter()
            .map(|reply| Ok(reply.to_string()))
            .collect();
        scripted.push(Err(Error::llm(error)));
        *self.replies.lock().unwrap() = scripted;
        self
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::llm("No more mock replies available"));
        }
        replies.remove(0)
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}
