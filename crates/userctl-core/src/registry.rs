//! Static table of the actions userctl exposes.
//!
//! The execution host calls actions by name with positional arguments; the
//! table is the single place that says which names exist and which
//! arguments each one takes.

use crate::actions::{Action, ActionKind};
use crate::error::ArgumentError;
use serde::Serialize;

/// Registry group the actions belong to
pub const GROUP: &str = "users";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
    pub kind: ActionKind,
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

const fn required(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        description,
        required: true,
    }
}

const fn optional(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        description,
        required: false,
    }
}

pub const ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        kind: ActionKind::GetAllUsers,
        name: "get_all_users",
        description: "Retrieve all users from the database",
        params: &[],
    },
    ActionSpec {
        kind: ActionKind::GetUser,
        name: "get_user",
        description: "Retrieve a specific user by ID or email",
        params: &[required("identifier", "ID or email of the user to retrieve")],
    },
    ActionSpec {
        kind: ActionKind::CreateUser,
        name: "create_user",
        description: "Create a new user",
        params: &[
            required("name", "Name of the user"),
            required("email", "Email of the user"),
        ],
    },
    ActionSpec {
        kind: ActionKind::UpdateUser,
        name: "update_user",
        description: "Update an existing user by ID or email",
        params: &[
            required("identifier", "ID or email of the user to update"),
            optional("new_name", "New name for the user"),
            optional("new_email", "New email for the user"),
        ],
    },
    ActionSpec {
        kind: ActionKind::DeleteUser,
        name: "delete_user",
        description: "Delete a user by ID or email",
        params: &[required("identifier", "ID or email of the user to delete")],
    },
];

pub fn lookup(name: &str) -> Option<&'static ActionSpec> {
    ACTIONS.iter().find(|spec| spec.name == name)
}

/// Look up `name` and bind positional `args` to it
pub fn bind(name: &str, args: &[String]) -> Result<Action, ArgumentError> {
    lookup(name)
        .ok_or_else(|| ArgumentError::UnknownAction(name.to_string()))?
        .bind(args)
}

impl ActionSpec {
    /// Bind positional arguments in declaration order.
    ///
    /// Only presence is checked: a required argument that is missing or
    /// empty is an error, an empty optional argument counts as omitted.
    pub fn bind(&self, args: &[String]) -> Result<Action, ArgumentError> {
        if args.len() > self.params.len() {
            return Err(ArgumentError::TooManyArguments {
                action: self.name,
                expected: self.params.len(),
                got: args.len(),
            });
        }

        let mut values = Vec::with_capacity(self.params.len());
        for (index, param) in self.params.iter().enumerate() {
            let value = args.get(index).filter(|v| !v.is_empty()).cloned();
            if param.required && value.is_none() {
                return Err(ArgumentError::MissingArgument {
                    action: self.name,
                    param: param.name,
                });
            }
            values.push(value);
        }

        let mut values = values.into_iter();
        let mut next = || values.next().flatten().unwrap_or_default();

        let action = match self.kind {
            ActionKind::GetAllUsers => Action::GetAllUsers,
            ActionKind::GetUser => Action::get_user(&next()),
            ActionKind::CreateUser => {
                let name = next();
                let email = next();
                Action::create_user(name, email)
            }
            ActionKind::UpdateUser => {
                let identifier = next();
                let new_name = Some(next());
                let new_email = Some(next());
                Action::update_user(&identifier, new_name, new_email)
            }
            ActionKind::DeleteUser => Action::delete_user(&next()),
        };
        Ok(action)
    }

    pub fn usage(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| {
                if p.required {
                    p.name.to_string()
                } else {
                    format!("[{}]", p.name)
                }
            })
            .collect();
        if params.is_empty() {
            self.name.to_string()
        } else {
            format!("{} {}", self.name, params.join(" "))
        }
    }
}
