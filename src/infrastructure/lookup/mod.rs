//! HTTP clients for the remote lookup services

pub mod giphy;
pub mod http;
pub mod steam;
pub mod urban;

pub use giphy::GiphySearch;
pub use http::HttpClient;
pub use steam::SteamCatalog;
pub use urban::UrbanDictionary;
