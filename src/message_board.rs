//! The message log service. Plain append and list, no statistics.

use crate::database::Message;
use crate::prelude::*;
use crate::store::MessageStore;

#[derive(Clone)]
pub struct MessageBoard {
    store: Arc<dyn MessageStore>,
}

impl MessageBoard {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Appends a message. A blank author or text makes the call a no-op.
    #[instrument(skip_all, level = "debug")]
    pub async fn post(&self, author: &str, text: &str) -> Result {
        let author = author.trim();
        let text = text.trim();
        if author.is_empty() || text.is_empty() {
            debug!("ignoring an incomplete message");
            return Ok(());
        }
        self.store.add(Message::new(author, text)).await
    }

    /// All messages, oldest-first.
    #[instrument(skip_all, level = "debug")]
    pub async fn messages(&self) -> Result<Vec<Message>> {
        self.store.retrieve_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryMessageStore;

    fn board() -> MessageBoard {
        MessageBoard::new(Arc::new(MemoryMessageStore::default()))
    }

    #[tokio::test]
    async fn post_and_list_ok() -> crate::Result {
        let board = board();
        board.post("alice", "hello").await?;
        board.post("bob", "hi there").await?;
        let messages = board.messages().await?;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].author, "alice");
        assert_eq!(messages[1].text, "hi there");
        Ok(())
    }

    #[tokio::test]
    async fn blank_fields_are_ignored_ok() -> crate::Result {
        let board = board();
        board.post("", "hello").await?;
        board.post("alice", "  ").await?;
        assert!(board.messages().await?.is_empty());
        Ok(())
    }
}
