use clap::Parser;
use clickhouse_exporter::cli::Cli;
use clickhouse_exporter::clickhouse::{ClickhouseClient, Exporter};
use clickhouse_exporter::logging::app_config;
use clickhouse_exporter::server;
use regex::Regex;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // initialize the logger
    log4rs::init_config(app_config(cli.loglevel)).unwrap();
    log::info!("Starting the exporter!");

    let regex = Regex::new(":(\\d{2,5})/").unwrap();
    let endpoint = match cli.port {
        Some(port) => regex
            .replace(&cli.endpoint, format!(":{port}/", port = port))
            .to_string(),
        None => cli.endpoint,
    };
    log::info!("Scraping ClickHouse stats from endpoint: {}", endpoint);

    let client = ClickhouseClient::new(endpoint, cli.user, cli.password);
    let exporter = Exporter::new(client);
    server::run(cli.listen, exporter).await?;
    Ok(())
}
