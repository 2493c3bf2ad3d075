//! Web layer: axum routes and response DTOs.

mod dto;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
