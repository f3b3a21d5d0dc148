// Interface adapters: the HTTP client for the scheduling API.

pub mod api_client;
