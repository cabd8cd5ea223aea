use axum::{
	extract::{rejection::QueryRejection, Query, State},
	response::{IntoResponse, Redirect, Response},
};
use validator::Validate;

use crate::{
	error::Error,
	render::Renderer,
	route::{
		listing::{self, Listing},
		model::{page_title, Paginate, SearchInput, SearchQuery, PER_PAGE},
	},
	store::{PostFilter, SharedStore},
};

/// How much of the search term ends up in the page title.
const TITLE_CHARS: usize = 30;

/// Search posts
/// Lists the first matching published posts. A blank search redirects home.
pub async fn search_posts(
	State(store): State<SharedStore>,
	State(renderer): State<Renderer>,
	query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Response, Error> {
	let Query(query) = query?;
	let term = query.search.trim();

	if term.is_empty() {
		return Ok(Redirect::to("/").into_response());
	}

	let paginate = Paginate::parse(query.page.as_deref())?;

	SearchInput {
		search: term.to_owned(),
	}
	.validate()?;

	tracing::debug!(term, "searching posts");

	let posts = Listing::new(PostFilter::Search(term.to_owned()))
		.limit(PER_PAGE)
		.fetch(store.as_ref(), &paginate)
		.await?;

	let title = term.chars().take(TITLE_CHARS).collect::<String>();

	let html = listing::render(
		store.as_ref(),
		&renderer,
		&posts,
		&page_title(&title, Some("Search")),
		term,
	)
	.await?;

	Ok(html.into_response())
}
