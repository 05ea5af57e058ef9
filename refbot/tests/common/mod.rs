pub mod mock_bot;
pub mod stub_source;

use chrono::Utc;
use refbot::{Chat, Message, MessageDirection, User};

pub fn create_test_message(content: &str) -> Message {
    Message {
        id: "42".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("student".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}
