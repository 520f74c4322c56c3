use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::{bson, Database, IndexModel};
use serde::{Deserialize, Serialize};

use crate::database::mongodb::options::insert_options;
use crate::database::mongodb::traits::{Indexes, TypedDocument};
use crate::prelude::*;

/// One message-board entry.
#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Clone)]
pub struct Message {
    #[serde(rename = "a")]
    pub author: String,

    #[serde(rename = "m")]
    pub text: String,

    #[serde(rename = "ts")]
    #[serde_as(as = "bson::DateTime")]
    pub created_at: DateTime,
}

impl TypedDocument for Message {
    const NAME: &'static str = "messages";
}

#[async_trait]
impl Indexes for Message {
    type I = [IndexModel; 1];

    fn indexes() -> Self::I {
        [IndexModel::builder().keys(doc! { "ts": 1 }).build()]
    }
}

impl Message {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

impl Message {
    #[instrument(skip_all, fields(author = self.author.as_str()), err)]
    pub async fn insert(&self, to: &Database) -> Result {
        Self::collection(to)
            .insert_one(self, insert_options())
            .await
            .context("failed to insert the message")?;
        Ok(())
    }

    /// Retrieves all messages, oldest-first.
    #[instrument(skip_all, level = "debug")]
    pub async fn retrieve_all(from: &Database) -> Result<Vec<Self>> {
        Self::collection(from)
            .find(None, FindOptions::builder().sort(doc! { "ts": 1 }).build())
            .await
            .context("failed to query the messages")?
            .try_collect()
            .await
            .context("failed to read the messages")
    }
}
