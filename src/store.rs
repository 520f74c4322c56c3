//! Storage seams for the two data services.
//!
//! The web layer and the services only ever see these traits,
//! so the backing medium is swappable.

use crate::database::Message;
use crate::prelude::*;

pub mod memory;
pub mod mongodb;

/// Durable, append-only storage of the number series.
#[async_trait]
pub trait NumberStore: Send + Sync {
    /// Appends `value` as the newest record.
    ///
    /// The append is durable before this returns; on failure
    /// the series is left exactly as it was.
    async fn append(&self, value: f64) -> Result<SeriesSnapshot>;

    /// Reads the whole series, oldest-first. A fresh read each call.
    async fn retrieve_all(&self) -> Result<Vec<f64>>;
}

/// Append-only storage of the message log.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn add(&self, message: Message) -> Result;

    /// Reads all messages, oldest-first.
    async fn retrieve_all(&self) -> Result<Vec<Message>>;
}

/// What [`NumberStore::append`] hands back: the just-inserted value
/// and the value that was the newest before the call.
///
/// `previous` is `None` when the series was empty, which keeps
/// a genuinely stored `0.0` distinguishable from "no prior entry".
#[must_use]
pub struct SeriesSnapshot {
    pub last: f64,
    pub previous: Option<f64>,
}
