//! Cluster credential bootstrap.
//!
//! The execution host writes a service-account token and the cluster CA
//! certificate to fixed paths before the action runs. Both must be present;
//! otherwise the action stops before any request is made.

use crate::config::CredentialPaths;
use crate::error::{BootstrapError, BootstrapResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Certificate, ClientBuilder};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONTEXT_NAME: &str = "in-cluster";

/// Token and trust roots loaded for the lifetime of one invocation
pub struct CredentialContext {
    paths: CredentialPaths,
    cluster_server: String,
    token: String,
    ca_certs: Vec<Certificate>,
}

/// What `userctl context` prints; the token is never shown in full
#[derive(Debug, Clone, Serialize)]
pub struct ContextSummary {
    pub context: &'static str,
    pub cluster_server: String,
    pub token_path: PathBuf,
    pub ca_cert_path: PathBuf,
    pub token: String,
    pub ca_certificates: usize,
}

impl CredentialContext {
    pub fn bootstrap(paths: &CredentialPaths, cluster_server: &str) -> BootstrapResult<Self> {
        for path in [&paths.token_path, &paths.ca_cert_path] {
            if !path.is_file() {
                return Err(BootstrapError::CredentialMissing {
                    token_path: paths.token_path.clone(),
                    ca_cert_path: paths.ca_cert_path.clone(),
                    missing: path.clone(),
                });
            }
        }

        let token = String::from_utf8(read(&paths.token_path)?)
            .map_err(|_| invalid(&paths.token_path, "token is not valid UTF-8"))?
            .trim()
            .to_string();
        if token.is_empty() {
            return Err(invalid(&paths.token_path, "token file is empty"));
        }

        let pem = read(&paths.ca_cert_path)?;
        let ca_certs = Certificate::from_pem_bundle(&pem)
            .map_err(|e| invalid(&paths.ca_cert_path, &e.to_string()))?;
        if ca_certs.is_empty() {
            return Err(invalid(&paths.ca_cert_path, "no PEM certificates found"));
        }

        debug!(
            context = CONTEXT_NAME,
            server = cluster_server,
            certificates = ca_certs.len(),
            "Loaded cluster credentials"
        );

        Ok(Self {
            paths: paths.clone(),
            cluster_server: cluster_server.to_string(),
            token,
            ca_certs,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn cluster_server(&self) -> &str {
        &self.cluster_server
    }

    pub fn redacted_token(&self) -> String {
        let visible: String = self.token.chars().take(4).collect();
        if self.token.chars().count() <= 8 {
            "****".to_string()
        } else {
            format!("{}****", visible)
        }
    }

    /// Trust the cluster CA and send the bearer token on every request
    pub fn apply_to_client_builder(&self, builder: ClientBuilder) -> BootstrapResult<ClientBuilder> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| invalid(&self.paths.token_path, "token contains invalid characters"))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);

        let builder = self
            .ca_certs
            .iter()
            .cloned()
            .fold(builder, |builder, cert| builder.add_root_certificate(cert));

        Ok(builder.default_headers(headers))
    }

    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            context: CONTEXT_NAME,
            cluster_server: self.cluster_server.clone(),
            token_path: self.paths.token_path.clone(),
            ca_cert_path: self.paths.ca_cert_path.clone(),
            token: self.redacted_token(),
            ca_certificates: self.ca_certs.len(),
        }
    }
}

impl fmt::Debug for CredentialContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialContext")
            .field("paths", &self.paths)
            .field("cluster_server", &self.cluster_server)
            .field("token", &self.redacted_token())
            .field("ca_certs", &self.ca_certs.len())
            .finish()
    }
}

fn read(path: &Path) -> BootstrapResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| BootstrapError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(path: &Path, reason: &str) -> BootstrapError {
    BootstrapError::CredentialInvalid {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CLUSTER_SERVER;
    use std::fs;
    use tempfile::TempDir;

    const CA_PEM: &str = include_str!("../tests/fixtures/ca.pem");

    fn write_credentials(dir: &TempDir, token: Option<&str>, cert: Option<&str>) -> CredentialPaths {
        let paths = CredentialPaths {
            token_path: dir.path().join("token"),
            ca_cert_path: dir.path().join("ca.crt"),
        };
        if let Some(token) = token {
            fs::write(&paths.token_path, token).unwrap();
        }
        if let Some(cert) = cert {
            fs::write(&paths.ca_cert_path, cert).unwrap();
        }
        paths
    }

    #[test]
    fn test_bootstrap_loads_token_and_ca() {
        let dir = TempDir::new().unwrap();
        let paths = write_credentials(&dir, Some("sa-token-0123456789\n"), Some(CA_PEM));

        let context = CredentialContext::bootstrap(&paths, DEFAULT_CLUSTER_SERVER).unwrap();
        assert_eq!(context.token(), "sa-token-0123456789");
        assert_eq!(context.cluster_server(), "https://kubernetes.default.svc");

        let summary = context.summary();
        assert_eq!(summary.context, "in-cluster");
        assert_eq!(summary.token, "sa-t****");
        assert_eq!(summary.ca_certificates, 1);
        assert!(!format!("{:?}", context).contains("0123456789"));
    }

    #[test]
    fn test_missing_token_is_reported() {
        let dir = TempDir::new().unwrap();
        let paths = write_credentials(&dir, None, Some(CA_PEM));

        match CredentialContext::bootstrap(&paths, DEFAULT_CLUSTER_SERVER) {
            Err(BootstrapError::CredentialMissing { missing, .. }) => {
                assert_eq!(missing, paths.token_path)
            }
            other => panic!("expected CredentialMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_cert_is_reported() {
        let dir = TempDir::new().unwrap();
        let paths = write_credentials(&dir, Some("token"), None);

        match CredentialContext::bootstrap(&paths, DEFAULT_CLUSTER_SERVER) {
            Err(BootstrapError::CredentialMissing { missing, .. }) => {
                assert_eq!(missing, paths.ca_cert_path)
            }
            other => panic!("expected CredentialMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_token_is_invalid() {
        let dir = TempDir::new().unwrap();
        let paths = write_credentials(&dir, Some("  \n"), Some(CA_PEM));

        assert!(matches!(
            CredentialContext::bootstrap(&paths, DEFAULT_CLUSTER_SERVER),
            Err(BootstrapError::CredentialInvalid { .. })
        ));
    }

    #[test]
    fn test_cert_without_pem_blocks_is_invalid() {
        let dir = TempDir::new().unwrap();
        let paths = write_credentials(&dir, Some("token"), Some("not a certificate"));

        assert!(matches!(
            CredentialContext::bootstrap(&paths, DEFAULT_CLUSTER_SERVER),
            Err(BootstrapError::CredentialInvalid { .. })
        ));
    }

    #[test]
    fn test_short_tokens_are_fully_redacted() {
        let dir = TempDir::new().unwrap();
        let paths = write_credentials(&dir, Some("abc"), Some(CA_PEM));
        let context = CredentialContext::bootstrap(&paths, DEFAULT_CLUSTER_SERVER).unwrap();
        assert_eq!(context.redacted_token(), "****");
    }
}
