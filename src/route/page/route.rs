use axum::{extract::State, response::Html};

use crate::{
	error::Error,
	extract::Path,
	render::{template, Renderer},
	route::{listing, model::page_title},
	store::SharedStore,
};

/// Get single page
/// Returns a single published page by its slug.
pub async fn get_page(
	State(store): State<SharedStore>,
	State(renderer): State<Renderer>,
	Path(slug): Path<String>,
) -> Result<Html<String>, Error> {
	let page = store.get_page(&slug).await?.ok_or(Error::NotFound)?;

	let mut context =
		listing::base_context(store.as_ref(), &page_title(&page.title, Some("Page"))).await?;
	context.insert("page", &page);

	renderer.render(template::PAGE, &context)
}
