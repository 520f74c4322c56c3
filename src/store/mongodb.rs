use mongodb::Database;
use tokio::sync::Mutex;

use crate::database::{Message, NumberRecord};
use crate::prelude::*;
use crate::store::{MessageStore, NumberStore, SeriesSnapshot};

pub struct MongoNumberStore {
    db: Database,

    /// Serialises appends: the previous-value read and the insert
    /// must not interleave with another append.
    write_lock: Mutex<()>,
}

impl MongoNumberStore {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl NumberStore for MongoNumberStore {
    #[instrument(skip(self), level = "debug")]
    async fn append(&self, value: f64) -> Result<SeriesSnapshot> {
        let _guard = self.write_lock.lock().await;
        let latest = NumberRecord::retrieve_latest(&self.db).await?;
        let seq = latest.as_ref().map_or(1, |record| record.seq + 1);
        NumberRecord::new(seq, value).insert(&self.db).await?;
        Ok(SeriesSnapshot {
            last: value,
            previous: latest.map(|record| record.value),
        })
    }

    #[instrument(skip_all, level = "debug")]
    async fn retrieve_all(&self) -> Result<Vec<f64>> {
        let records = NumberRecord::retrieve_all(&self.db).await?;
        Ok(records.into_iter().map(|record| record.value).collect())
    }
}

pub struct MongoMessageStore {
    db: Database,
}

impl MongoMessageStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageStore for MongoMessageStore {
    #[instrument(skip_all, level = "debug")]
    async fn add(&self, message: Message) -> Result {
        message.insert(&self.db).await
    }

    #[instrument(skip_all, level = "debug")]
    async fn retrieve_all(&self) -> Result<Vec<Message>> {
        Message::retrieve_all(&self.db).await
    }
}
