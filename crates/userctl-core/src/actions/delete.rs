use super::{failure, resolve::resolve};
use crate::envelope::{Envelope, Payload};
use crate::http::DirectoryClient;
use crate::model::Identifier;

pub async fn delete_user(client: &DirectoryClient, identifier: &Identifier) -> Envelope {
    let id = match resolve(client, identifier).await {
        Ok(id) => id,
        Err(e) => return failure(e, format!("Failed to delete user {}", identifier)),
    };

    match client.delete_user(&id).await {
        Ok(body) => Envelope::success(
            format!("Successfully deleted user {}", identifier),
            Payload::Raw(body),
        ),
        Err(e) => failure(e, format!("Failed to delete user {}", identifier)),
    }
}
