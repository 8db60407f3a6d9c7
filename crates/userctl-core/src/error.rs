use std::path::PathBuf;

/// Failures talking to the directory service.
///
/// Everything except [`DirectoryError::NotFound`] is a transport failure from
/// the caller's point of view and is reported as `Failed to ...: <error>`.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status} for url ({url}){}", format_body(.body))]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("No user found with email {0}")]
    NotFound(String),

    #[error("User record for {0:?} carries no id")]
    MissingId(String),
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

fn format_body(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failures while establishing the credential context. These are fatal and
/// happen before any request is sent.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error(
        "Kubernetes context token or cert file not found at {token} or {cert} respectively (missing: {missing})",
        token = .token_path.display(),
        cert = .ca_cert_path.display(),
        missing = .missing.display()
    )]
    CredentialMissing {
        token_path: PathBuf,
        ca_cert_path: PathBuf,
        missing: PathBuf,
    },

    #[error("Invalid credential file {path}: {reason}", path = .path.display())]
    CredentialInvalid { path: PathBuf, reason: String },

    #[error("IO error reading {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type BootstrapResult<T> = Result<T, BootstrapError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Positional arguments that do not satisfy an action's parameter list.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Missing required argument '{param}' for action '{action}'")]
    MissingArgument {
        action: &'static str,
        param: &'static str,
    },

    #[error("Action '{action}' takes at most {expected} arguments, got {got}")]
    TooManyArguments {
        action: &'static str,
        expected: usize,
        got: usize,
    },
}
