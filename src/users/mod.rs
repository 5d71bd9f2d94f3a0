mod dto;
pub mod error;
pub mod handlers;
mod password;
pub mod repo;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
