//! HTTP Server Configuration
//!
//! Host, port, CORS and the directory HTML pages are served from.

use std::path::PathBuf;

use axum::http::{HeaderValue, Uri};
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3001)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (`scheme://host[:port]`). Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory holding index.html, animals.html, zookeepers.html and assets
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    3001
}

pub(crate) fn default_public_dir() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            public_dir: default_public_dir(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    pub fn with_public_dir(mut self, public_dir: impl Into<PathBuf>) -> Self {
        self.public_dir = public_dir.into();
        self
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed CORS origins, or the first entry that is not an origin
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, String> {
        self.cors_origins
            .iter()
            .map(|origin| parse_origin(origin).ok_or_else(|| origin.clone()))
            .collect()
    }
}

/// Parse a browser origin: http or https scheme, a host, an optional port
/// and nothing after it.
pub fn parse_origin(origin: &str) -> Option<HeaderValue> {
    let uri: Uri = origin.parse().ok()?;

    let web_scheme = matches!(uri.scheme_str(), Some("http") | Some("https"));
    let bare = uri.authority().is_some()
        && uri.path() == "/"
        && uri.query().is_none()
        && !origin.ends_with('/');
    if !(web_scheme && bare) {
        return None;
    }

    HeaderValue::from_str(origin).ok()
}
