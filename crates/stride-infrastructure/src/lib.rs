//! Infrastructure for the Stride client: the HTTP coach API and
//! file/environment configuration.

pub mod config;
pub mod dto;
pub mod http;

pub use config::ClientConfig;
pub use http::HttpCoachApi;
