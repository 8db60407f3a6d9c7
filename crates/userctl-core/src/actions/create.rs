use super::failure;
use crate::envelope::{Envelope, Payload};
use crate::http::DirectoryClient;
use crate::model::NewUser;

pub async fn create_user(client: &DirectoryClient, user: &NewUser) -> Envelope {
    match client.create_user(user).await {
        Ok(created) => Envelope::success(
            format!("Successfully created new user: {}", user.name),
            Payload::User(created),
        ),
        Err(e) => failure(e, "Failed to create user"),
    }
}
