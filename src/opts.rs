//! CLI options.

use clap::{Args, Parser};

#[derive(Parser)]
#[clap(version, about)]
pub struct Opts {
    /// Sentry DSN
    #[clap(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Sentry traces sample rate
    #[clap(long, default_value = "0.0")]
    pub traces_sample_rate: f32,

    #[clap(flatten)]
    pub connections: ConnectionOpts,

    /// Web application bind host
    #[clap(long, default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[clap(short, long, default_value = "8080")]
    pub port: u16,

    /// Google Analytics measurement ID
    #[clap(long)]
    pub gtag: Option<String>,
}

#[derive(Args)]
pub struct ConnectionOpts {
    /// MongoDB URI, including the database name
    #[clap(short = 'd', long = "database", env = "DATABASE_URI")]
    pub database_uri: String,
}
