use axum::{routing::get, Router};

use crate::AppState;

pub mod route;

pub fn routes() -> Router<AppState> {
	Router::new().route("/search", get(route::search_posts))
}
