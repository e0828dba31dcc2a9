use crate::corpus::Catalog;
use crate::error::LoadError;
use crate::query::SearcherOptions;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Serving boundary configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Corpus text file, read once at startup
    pub corpus_path: PathBuf,
    /// JSON catalog; the built-in Shakespeare catalog when unset
    pub catalog_path: Option<PathBuf>,
    /// Directory served for every path that is not an API route
    pub static_dir: PathBuf,
    /// Check boundary exceptions against the corpus at startup
    pub validate_exceptions: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3001,
            corpus_path: PathBuf::from("completeworks.txt"),
            catalog_path: None,
            static_dir: PathBuf::from("static"),
            validate_exceptions: true,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn load_catalog(&self) -> Result<Catalog, LoadError> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::shakespeare()),
        }
    }

    pub fn searcher_options(&self) -> SearcherOptions {
        SearcherOptions {
            validate_exceptions: self.validate_exceptions,
            ..Default::default()
        }
    }
}
