//! Runtime configuration: built-in defaults, an optional YAML/JSON file,
//! then command line and environment overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::http::timeout::TimeoutConfig;
use crate::http::url_builder::UrlBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://users-api.users-api.svc.cluster.local:80";
pub const DEFAULT_TOKEN_PATH: &str = "/tmp/kubernetes_context_token";
pub const DEFAULT_CA_CERT_PATH: &str = "/tmp/kubernetes_context_cert";
pub const DEFAULT_CLUSTER_SERVER: &str = "https://kubernetes.default.svc";

/// Where the execution host drops the cluster credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPaths {
    pub token_path: PathBuf,
    pub ca_cert_path: PathBuf,
}

impl Default for CredentialPaths {
    fn default() -> Self {
        Self {
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
            ca_cert_path: PathBuf::from(DEFAULT_CA_CERT_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub base_url: String,
    pub credentials: CredentialPaths,
    pub cluster_server: String,
    pub timeout: TimeoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: CredentialPaths::default(),
            cluster_server: DEFAULT_CLUSTER_SERVER.to_string(),
            timeout: TimeoutConfig::default(),
        }
    }
}

/// One layer of optional settings. Config files deserialize into this, and
/// the CLI builds one from its flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub base_url: Option<String>,
    pub token_path: Option<PathBuf>,
    pub ca_cert_path: Option<PathBuf>,
    pub cluster_server: Option<String>,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_ms: Option<u64>,
}

/// Supported file formats for configuration
#[derive(Debug, Clone, PartialEq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Detect file format from extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }
}

impl ConfigLayer {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        Self::parse_content(&content, format)
    }

    pub fn parse_content(content: &str, format: FileFormat) -> ConfigResult<Self> {
        let layer = match format {
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
        };
        Ok(layer)
    }
}

impl Config {
    /// Apply a layer on top of the current values; unset fields are kept
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(base_url) = layer.base_url {
            self.base_url = base_url;
        }
        if let Some(token_path) = layer.token_path {
            self.credentials.token_path = token_path;
        }
        if let Some(ca_cert_path) = layer.ca_cert_path {
            self.credentials.ca_cert_path = ca_cert_path;
        }
        if let Some(cluster_server) = layer.cluster_server {
            self.cluster_server = cluster_server;
        }
        if let Some(secs) = layer.timeout_secs {
            self.timeout = self.timeout.with_total_secs(secs);
        }
        if let Some(connect_ms) = layer.connect_timeout_ms {
            self.timeout.connect_ms = connect_ms;
        }
    }

    pub fn with_layer(mut self, layer: ConfigLayer) -> Self {
        self.merge(layer);
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        UrlBuilder::parse_base(&self.base_url).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.timeout.validate()
    }
}
