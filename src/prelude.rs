pub use std::sync::Arc;
pub use std::time::{Duration as StdDuration, Instant};

pub use anyhow::{anyhow, bail, Context};
pub use async_trait::async_trait;
pub use chrono::Utc;
pub use tracing::{debug, error, info, instrument, trace, warn};

pub type DateTime = chrono::DateTime<Utc>;
pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
