use super::failure;
use crate::envelope::{Envelope, Payload};
use crate::http::DirectoryClient;

pub async fn get_all_users(client: &DirectoryClient) -> Envelope {
    match client.list_users().await {
        Ok(users) => Envelope::success(
            format!("Successfully retrieved {} users", users.len()),
            Payload::Users(users),
        ),
        Err(e) => failure(e, "Failed to retrieve users"),
    }
}
