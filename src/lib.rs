pub mod cli;
pub mod clickhouse;
pub mod error;
pub mod logging;
pub mod server;

pub use error::Error;
pub use error::Result;
