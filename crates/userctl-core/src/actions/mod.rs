//! The five directory actions and the runner that hosts them.
//!
//! Every action is one linear sequence: at most a lookup and one request,
//! ending in a single [`Envelope`]. Nothing is retried or rolled back.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod resolve;
pub mod update;

use crate::config::Config;
use crate::credentials::CredentialContext;
use crate::envelope::Envelope;
use crate::error::{BootstrapResult, DirectoryError};
use crate::http::DirectoryClient;
use crate::model::{Identifier, NewUser, UserUpdate};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

pub use resolve::resolve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    GetAllUsers,
    GetUser,
    CreateUser,
    UpdateUser,
    DeleteUser,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetAllUsers => "get_all_users",
            Self::GetUser => "get_user",
            Self::CreateUser => "create_user",
            Self::UpdateUser => "update_user",
            Self::DeleteUser => "delete_user",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully bound action, ready to run
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    GetAllUsers,
    GetUser {
        identifier: Identifier,
    },
    CreateUser {
        user: NewUser,
    },
    UpdateUser {
        identifier: Identifier,
        update: UserUpdate,
    },
    DeleteUser {
        identifier: Identifier,
    },
}

impl Action {
    pub fn get_user(identifier: &str) -> Self {
        Self::GetUser {
            identifier: Identifier::parse(identifier),
        }
    }

    pub fn create_user(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::CreateUser {
            user: NewUser {
                name: name.into(),
                email: email.into(),
            },
        }
    }

    pub fn update_user(identifier: &str, new_name: Option<String>, new_email: Option<String>) -> Self {
        Self::UpdateUser {
            identifier: Identifier::parse(identifier),
            update: UserUpdate::new(new_name, new_email),
        }
    }

    pub fn delete_user(identifier: &str) -> Self {
        Self::DeleteUser {
            identifier: Identifier::parse(identifier),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::GetAllUsers => ActionKind::GetAllUsers,
            Self::GetUser { .. } => ActionKind::GetUser,
            Self::CreateUser { .. } => ActionKind::CreateUser,
            Self::UpdateUser { .. } => ActionKind::UpdateUser,
            Self::DeleteUser { .. } => ActionKind::DeleteUser,
        }
    }

    pub async fn execute(&self, client: &DirectoryClient) -> Envelope {
        info!(action = %self.kind(), "Running action");

        let envelope = match self {
            Self::GetAllUsers => list::get_all_users(client).await,
            Self::GetUser { identifier } => get::get_user(client, identifier).await,
            Self::CreateUser { user } => create::create_user(client, user).await,
            Self::UpdateUser { identifier, update } => {
                update::update_user(client, identifier, update).await
            }
            Self::DeleteUser { identifier } => delete::delete_user(client, identifier).await,
        };

        if envelope.is_success() {
            info!(action = %self.kind(), "{}", envelope.message());
        } else {
            warn!(action = %self.kind(), "{}", envelope.message());
        }
        envelope
    }
}

/// Credential context plus the client built from it.
///
/// [`ActionRunner::bootstrap`] is the only constructor, so no action can run
/// until both credential files have been read.
#[derive(Debug)]
pub struct ActionRunner {
    context: CredentialContext,
    client: DirectoryClient,
}

impl ActionRunner {
    pub fn bootstrap(config: &Config) -> BootstrapResult<Self> {
        let context = CredentialContext::bootstrap(&config.credentials, &config.cluster_server)?;
        let client = DirectoryClient::new(config, &context)?;
        Ok(Self { context, client })
    }

    pub fn context(&self) -> &CredentialContext {
        &self.context
    }

    pub fn client(&self) -> &DirectoryClient {
        &self.client
    }

    pub async fn run(&self, action: &Action) -> Envelope {
        action.execute(&self.client).await
    }
}

/// NotFound keeps its own message; anything else is prefixed with what failed
fn failure(error: DirectoryError, context: impl fmt::Display) -> Envelope {
    if error.is_not_found() {
        Envelope::error(error.to_string())
    } else {
        Envelope::error(format!("{}: {}", context, error))
    }
}
