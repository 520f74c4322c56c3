use clap::Parser;

use crate::opts::Opts;
use crate::prelude::*;

mod aggregator;
mod database;
mod message_board;
mod opts;
mod prelude;
mod store;
mod tracing;
mod web;

pub use crate::prelude::Result;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    info!(version = clap::crate_version!(), "started");
    web::run(opts).await
}
