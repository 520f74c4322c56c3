//! In-memory backends, for tests and ephemeral runs.

use tokio::sync::RwLock;

use crate::database::Message;
use crate::prelude::*;
use crate::store::{MessageStore, NumberStore, SeriesSnapshot};

#[derive(Default)]
pub struct MemoryNumberStore {
    series: RwLock<Vec<f64>>,
}

#[async_trait]
impl NumberStore for MemoryNumberStore {
    async fn append(&self, value: f64) -> Result<SeriesSnapshot> {
        let mut series = self.series.write().await;
        let previous = series.last().copied();
        series.push(value);
        Ok(SeriesSnapshot {
            last: value,
            previous,
        })
    }

    async fn retrieve_all(&self) -> Result<Vec<f64>> {
        Ok(self.series.read().await.clone())
    }
}

#[derive(Default)]
pub struct MemoryMessageStore {
    messages: RwLock<Vec<Message>>,
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn add(&self, message: Message) -> Result {
        self.messages.write().await.push(message);
        Ok(())
    }

    async fn retrieve_all(&self) -> Result<Vec<Message>> {
        Ok(self.messages.read().await.clone())
    }
}
