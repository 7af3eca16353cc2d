//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Book catalogue HTTP service
#[derive(Debug, Clone, Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to bind to
    #[arg(long, env = "BOOKSHELF_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "BOOKSHELF_PORT", default_value_t = 8081)]
    pub port: u16,

    /// JSON file holding the book collection
    #[arg(short, long, env = "BOOKSHELF_DATA_FILE", default_value = "books.json")]
    pub data_file: PathBuf,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "BOOKSHELF_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address '{addr}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["bookshelf"]).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.data_file, PathBuf::from("books.json"));
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8081");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "bookshelf",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--data-file",
            "/tmp/catalogue.json",
        ])
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(config.data_file, PathBuf::from("/tmp/catalogue.json"));
    }

    #[test]
    fn rejects_unparseable_host() {
        let config = Config::try_parse_from(["bookshelf", "--host", "not a host"]).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
