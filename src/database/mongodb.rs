use mongodb::Database;

use self::traits::Indexes;
use crate::prelude::*;

pub mod models;
pub mod options;
pub mod traits;

#[instrument(level = "debug")]
pub async fn open(uri: &str) -> Result<Database> {
    info!(uri, "connecting…");
    let client = mongodb::Client::with_uri_str(uri)
        .await
        .context("failed to parse the specified MongoDB URI")?;
    let database = client
        .default_database()
        .ok_or_else(|| anyhow!("MongoDB database name is not specified"))?;

    info!("ensuring indexes…");
    models::NumberRecord::ensure_indexes(&database).await?;
    models::Message::ensure_indexes(&database).await?;

    info!("connected");
    Ok(database)
}
