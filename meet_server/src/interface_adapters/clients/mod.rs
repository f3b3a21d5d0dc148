// Reqwest clients for the external OAuth and calendar providers.

pub mod google;

pub use google::{GoogleClient, GoogleClientError};
