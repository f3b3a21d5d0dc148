// Interface adapters: HTTP handlers, DTOs, state and outbound clients.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
