use super::timeout::TimeoutConfig;
use super::url_builder::UrlBuilder;
use crate::config::Config;
use crate::credentials::CredentialContext;
use crate::error::{BootstrapResult, ConfigError, DirectoryError, DirectoryResult};
use crate::model::{NewUser, User, UserUpdate};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::debug;
use url::Url;

const USERS: &str = "users";
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for the user directory service.
///
/// Built once per invocation from the credential context; every request
/// carries the bearer token and trusts the cluster CA.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: Url,
    timeout: TimeoutConfig,
}

impl DirectoryClient {
    pub fn new(config: &Config, context: &CredentialContext) -> BootstrapResult<Self> {
        config.validate()?;
        let base_url = UrlBuilder::parse_base(&config.base_url)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let builder = config.timeout.apply_to_client_builder(Client::builder());
        let builder = context
            .apply_to_client_builder(builder)?
            .user_agent(concat!("userctl/", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            client: builder.build()?,
            base_url,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /users`
    pub async fn list_users(&self) -> DirectoryResult<Vec<User>> {
        let request = self.request(Method::GET, &[USERS])?;
        self.send_json(request).await
    }

    /// `GET /users?email=<email>`, first match only
    pub async fn find_by_email(&self, email: &str) -> DirectoryResult<Option<User>> {
        let request = self.request(Method::GET, &[USERS])?.query(&[("email", email)]);
        let users: Vec<User> = self.send_json(request).await?;
        Ok(users.into_iter().next())
    }

    /// `GET /users/{id}`
    pub async fn get_user(&self, id: &str) -> DirectoryResult<User> {
        let request = self.request(Method::GET, &[USERS, id])?;
        self.send_json(request).await
    }

    /// `POST /users` with `{name, email}`
    pub async fn create_user(&self, user: &NewUser) -> DirectoryResult<User> {
        let request = self.request(Method::POST, &[USERS])?.json(user);
        self.send_json(request).await
    }

    /// `PUT /users/{id}` with only the supplied fields as query parameters
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> DirectoryResult<User> {
        let mut request = self.request(Method::PUT, &[USERS, id])?;
        let pairs = update.query_pairs();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        self.send_json(request).await
    }

    /// `DELETE /users/{id}`; the body is returned as-is
    pub async fn delete_user(&self, id: &str) -> DirectoryResult<JsonValue> {
        let request = self.request(Method::DELETE, &[USERS, id])?;
        self.send_raw(request).await
    }

    fn request(&self, method: Method, segments: &[&str]) -> DirectoryResult<RequestBuilder> {
        let url = UrlBuilder::join(&self.base_url, segments)?;
        debug!(%method, %url, "Directory request");
        Ok(self.client.request(method, url))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> DirectoryResult<T> {
        let response = self.execute(request).await?;
        let body = response.text().await.map_err(|e| self.timeout.classify(e))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Empty bodies become `null`; bodies that are not JSON become a string
    async fn send_raw(&self, request: RequestBuilder) -> DirectoryResult<JsonValue> {
        let response = self.execute(request).await?;
        let body = response.text().await.map_err(|e| self.timeout.classify(e))?;
        if body.trim().is_empty() {
            return Ok(JsonValue::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or_else(|_| JsonValue::String(body)))
    }

    async fn execute(&self, request: RequestBuilder) -> DirectoryResult<Response> {
        let response = request.send().await.map_err(|e| self.timeout.classify(e))?;
        let status = response.status();
        debug!(status = status.as_u16(), "Directory response");

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
            body.push_str("...");
        }
        Err(DirectoryError::Status {
            status,
            url,
            body: body.trim().to_string(),
        })
    }
}
