use axum::{routing::get, Router};

use crate::AppState;

pub mod route;

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/", get(get_posts))
		.route("/post/:slug", get(get_post))
		.route("/created_by/:author_id", get(get_author_posts))
		.route("/category/:slug", get(get_category_posts))
		.route("/tag/:slug", get(get_tag_posts))
}
