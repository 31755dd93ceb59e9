use std::net::SocketAddr;

use clap::Parser;
use clap::ValueHint;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// ClickHouse HTTP endpoint to scrape
    ///
    /// The ClickHouse HTTP interface the exporter queries for system table stats.
    #[arg(short, long, env="CLICKHOUSE_ENDPOINT", value_hint=ValueHint::Url, default_value="http://localhost:8123/")]
    pub endpoint: String,

    /// ClickHouse endpoint's port number
    ///
    /// The port number used in the default ClickHouse endpoint. Example: http://localhost:<PORT>/
    #[arg(short, long, env="CLICKHOUSE_PORT", value_hint=ValueHint::Other)]
    pub port: Option<u16>,

    /// Address to serve metrics on
    ///
    /// The address and port the exporter's own /metrics endpoint listens on.
    #[arg(short, long, env="LISTEN_ADDRESS", value_hint=ValueHint::Other, default_value="0.0.0.0:9116")]
    pub listen: SocketAddr,

    /// ClickHouse user name
    ///
    /// Optional user for basic auth against the ClickHouse HTTP interface.
    #[arg(short, long, env="CLICKHOUSE_USER", value_hint=ValueHint::Other)]
    pub user: Option<String>,

    /// ClickHouse password
    ///
    /// Optional password for basic auth against the ClickHouse HTTP interface.
    #[arg(long, env="CLICKHOUSE_PASSWORD", value_hint=ValueHint::Other, hide_env_values=true)]
    pub password: Option<String>,

    /// Set the logging level
    ///
    /// Set the logging level used when logging to stdout
    #[arg(long, env="LOG_LEVEL", value_hint=ValueHint::Other, default_value="INFO")]
    pub loglevel: log::LevelFilter,
}
