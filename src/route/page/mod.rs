use axum::{routing::get, Router};

use crate::AppState;

pub mod route;

pub fn routes() -> Router<AppState> {
	Router::new().route("/page/:slug", get(route::get_page))
}
