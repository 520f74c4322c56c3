use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneOptions, FindOptions, IndexOptions};
use mongodb::{bson, Database, IndexModel};
use serde::{Deserialize, Serialize};
use serde_with::TryFromInto;

use crate::database::mongodb::options::insert_options;
use crate::database::mongodb::traits::{Indexes, TypedDocument};
use crate::prelude::*;
use crate::tracing::format_elapsed;

/// One submitted number. Records are immutable once stored,
/// and `seq` is the only ordering key.
#[serde_with::serde_as]
#[derive(Serialize, Deserialize)]
pub struct NumberRecord {
    /// Insertion order, starting at 1.
    #[serde_as(as = "TryFromInto<i64>")]
    #[serde(rename = "seq")]
    pub seq: u64,

    #[serde(rename = "v")]
    pub value: f64,

    #[serde(rename = "ts")]
    #[serde_as(as = "bson::DateTime")]
    pub created_at: DateTime,
}

impl TypedDocument for NumberRecord {
    const NAME: &'static str = "numbers";
}

#[async_trait]
impl Indexes for NumberRecord {
    type I = [IndexModel; 1];

    fn indexes() -> Self::I {
        [IndexModel::builder()
            .keys(doc! { "seq": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build()]
    }
}

impl NumberRecord {
    pub fn new(seq: u64, value: f64) -> Self {
        Self {
            seq,
            value,
            created_at: Utc::now(),
        }
    }
}

impl NumberRecord {
    #[instrument(skip_all, fields(seq = self.seq), err)]
    pub async fn insert(&self, to: &Database) -> Result {
        let start_instant = Instant::now();
        Self::collection(to)
            .insert_one(self, insert_options())
            .await
            .with_context(|| format!("failed to insert number record #{}", self.seq))?;
        debug!(elapsed = format_elapsed(start_instant).as_str(), "inserted");
        Ok(())
    }

    /// Retrieves the newest record, if any.
    #[instrument(skip_all, level = "debug")]
    pub async fn retrieve_latest(from: &Database) -> Result<Option<Self>> {
        let options = FindOneOptions::builder().sort(doc! { "seq": -1 }).build();
        Self::collection(from)
            .find_one(None, options)
            .await
            .context("failed to retrieve the latest number record")
    }

    /// Retrieves the whole series, oldest-first.
    #[instrument(skip_all, level = "debug")]
    pub async fn retrieve_all(from: &Database) -> Result<Vec<Self>> {
        let start_instant = Instant::now();
        let records: Vec<Self> = Self::collection(from)
            .find(None, FindOptions::builder().sort(doc! { "seq": 1 }).build())
            .await
            .context("failed to query the number series")?
            .try_collect()
            .await
            .context("failed to read the number series")?;
        debug!(
            n_records = records.len(),
            elapsed = format_elapsed(start_instant).as_str(),
            "done",
        );
        Ok(records)
    }
}
