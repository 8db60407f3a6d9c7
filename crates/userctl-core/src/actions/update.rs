use super::{failure, resolve::resolve};
use crate::envelope::{Envelope, Payload};
use crate::http::DirectoryClient;
use crate::model::{Identifier, UserUpdate};

/// Resolve, then `PUT` only the supplied fields. A failed resolution
/// returns before any mutating request is sent.
pub async fn update_user(
    client: &DirectoryClient,
    identifier: &Identifier,
    update: &UserUpdate,
) -> Envelope {
    let id = match resolve(client, identifier).await {
        Ok(id) => id,
        Err(e) => return failure(e, format!("Failed to update user {}", identifier)),
    };

    match client.update_user(&id, update).await {
        Ok(user) => Envelope::success(
            format!(
                "Successfully updated user {} ({})",
                identifier,
                update.updated_fields().join(", ")
            ),
            Payload::User(user),
        ),
        Err(e) => failure(e, format!("Failed to update user {}", identifier)),
    }
}
