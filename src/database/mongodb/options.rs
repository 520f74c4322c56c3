use mongodb::options::{InsertOneOptions, WriteConcern};

use crate::prelude::*;

/// Journaled write concern: an append is acknowledged only once it is durable.
#[inline]
pub fn insert_options() -> InsertOneOptions {
    let write_concern = WriteConcern::builder()
        .journal(true)
        .w_timeout(StdDuration::from_secs(5))
        .build();
    InsertOneOptions::builder().write_concern(write_concern).build()
}
