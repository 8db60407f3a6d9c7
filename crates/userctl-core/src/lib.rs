pub mod actions;
pub mod config;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod http;
pub mod model;
pub mod registry;

// Re-export commonly used types
pub use actions::{Action, ActionKind, ActionRunner};
pub use config::{Config, ConfigLayer, CredentialPaths};
pub use credentials::{ContextSummary, CredentialContext};
pub use envelope::{Envelope, Payload, Status};
pub use error::{
    ArgumentError, BootstrapError, BootstrapResult, ConfigError, ConfigResult, DirectoryError,
    DirectoryResult,
};
pub use http::DirectoryClient;
pub use model::{Identifier, NewUser, User, UserUpdate};
pub use registry::{ActionSpec, ParamSpec, ACTIONS};
