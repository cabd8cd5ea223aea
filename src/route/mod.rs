use axum::Router;

use crate::AppState;

pub mod listing;
pub mod model;
pub mod page;
pub mod post;
pub mod search;

/// Every public route of the site.
///
/// Paths are registered without a trailing slash; the app trims trailing
/// slashes from incoming requests before routing.
pub fn routes() -> Router<AppState> {
	Router::new()
		.merge(post::routes())
		.merge(page::routes())
		.merge(search::routes())
}
