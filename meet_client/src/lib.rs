pub mod domain;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{Meeting, UserProfile};
pub use interface_adapters::api_client::MeetApiClient;
pub use use_cases::store::{Action, AppState, AsyncPhase, Store};
