pub mod client;
pub mod timeout;
pub mod url_builder;

pub use client::DirectoryClient;
pub use timeout::TimeoutConfig;
pub use url_builder::UrlBuilder;
