use crate::error::{DirectoryError, DirectoryResult};
use crate::http::DirectoryClient;
use crate::model::Identifier;
use tracing::debug;

/// Turn an identifier into the id the service uses in `/users/{id}`.
///
/// Ids are used verbatim without a request. Emails cost exactly one
/// `GET /users?email=` lookup; an empty answer is [`DirectoryError::NotFound`].
///
/// The returned id is never empty: `/users/` is the collection, not a user.
pub async fn resolve(client: &DirectoryClient, identifier: &Identifier) -> DirectoryResult<String> {
    match identifier {
        Identifier::Id(id) if id.is_empty() => Err(DirectoryError::MissingId(id.clone())),
        Identifier::Id(id) => Ok(id.clone()),
        Identifier::Email(email) => {
            let user = client
                .find_by_email(email)
                .await?
                .ok_or_else(|| DirectoryError::NotFound(email.clone()))?;
            if user.id.is_empty() {
                return Err(DirectoryError::MissingId(email.clone()));
            }
            debug!(email = %email, id = %user.id, "Resolved email to user id");
            Ok(user.id)
        }
    }
}
