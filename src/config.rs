//! Command-line and environment configuration

use clap::Parser;
use std::{net::SocketAddr, path::PathBuf, time::Duration};

/// Armory catalog and cart server
#[derive(Debug, Clone, Parser)]
#[command(name = "armory_cart", version, about)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "ARMORY_HOST", default_value = "0.0.0.0")]
    pub host: std::net::IpAddr,

    /// Port to listen on
    #[arg(long, env = "ARMORY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Catalog JSON document; the built-in catalog is used when omitted
    #[arg(long, env = "ARMORY_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Directory holding index.html; discovered from the working directory when omitted
    #[arg(long, env = "ARMORY_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Idle time after which a session's cart is discarded
    #[arg(
        long,
        env = "ARMORY_SESSION_TTL_SECS",
        default_value_t = 3600,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub session_ttl_secs: u64,

    /// How often expired sessions are swept
    #[arg(
        long,
        env = "ARMORY_SWEEP_INTERVAL_SECS",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_secs: u64,

    /// Log level filter; RUST_LOG takes precedence when set
    #[arg(long, env = "ARMORY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "ARMORY_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8000() {
        let config = Config::try_parse_from(["armory_cart"]).unwrap();
        assert_eq!(config.socket_addr(), SocketAddr::from(([0, 0, 0, 0], 8000)));
        assert_eq!(config.session_ttl(), Duration::from_secs(3600));
        assert!(config.catalog.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "armory_cart",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--session-ttl-secs",
            "30",
            "--catalog",
            "weapons.json",
            "--log-json",
        ])
        .unwrap();

        assert_eq!(config.socket_addr(), SocketAddr::from(([127, 0, 0, 1], 9090)));
        assert_eq!(config.session_ttl(), Duration::from_secs(30));
        assert_eq!(config.catalog, Some(PathBuf::from("weapons.json")));
        assert!(config.log_json);
    }

    #[test]
    fn zero_ttl_is_rejected() {
        assert!(Config::try_parse_from(["armory_cart", "--session-ttl-secs", "0"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
