use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub(crate) mod jwt;
mod password;
mod repo;
mod repo_types;
pub mod services;

pub use jwt::AuthUser;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
