//! Mock implementation of [`refbot::Bot`] that records every outgoing message.

use async_trait::async_trait;
use refbot::{Bot, Chat, Result};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}
