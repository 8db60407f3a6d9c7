use super::{failure, resolve::resolve};
use crate::envelope::{Envelope, Payload};
use crate::error::DirectoryError;
use crate::http::DirectoryClient;
use crate::model::Identifier;

/// Email lookups return the matched record directly; there is no second
/// fetch by id.
pub async fn get_user(client: &DirectoryClient, identifier: &Identifier) -> Envelope {
    let result = match identifier {
        Identifier::Email(email) => client
            .find_by_email(email)
            .await
            .and_then(|found| found.ok_or_else(|| DirectoryError::NotFound(email.clone())))
            .map(|user| (user, format!("Successfully retrieved user with email {}", email))),
        Identifier::Id(_) => match resolve(client, identifier).await {
            Ok(id) => client
                .get_user(&id)
                .await
                .map(|user| (user, format!("Successfully retrieved user with ID {}", id))),
            Err(e) => Err(e),
        },
    };

    match result {
        Ok((user, message)) => Envelope::success(message, Payload::User(user)),
        Err(e) => failure(e, format!("Failed to retrieve user {}", identifier)),
    }
}
