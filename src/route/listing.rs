use axum::response::Html;
use tera::Context;

use crate::{
	error::Error,
	model::Post,
	render::{template, Renderer},
	store::{PostFilter, Store},
};

use super::model::{num_pages, PageOf, Paginate, PER_PAGE};

/// A paginated view over the published posts, narrowed by one [`PostFilter`].
#[derive(Debug)]
pub struct Listing {
	filter: PostFilter,
	allow_empty: bool,
	limit: Option<i64>,
}

impl Listing {
	pub fn new(filter: PostFilter) -> Self {
		Self {
			filter,
			allow_empty: true,
			limit: None,
		}
	}

	/// Treat a listing with no posts at all as not found.
	pub fn disallow_empty(mut self) -> Self {
		self.allow_empty = false;
		self
	}

	/// Only consider the first `limit` matching posts, whatever page is requested.
	pub fn limit(mut self, limit: i64) -> Self {
		self.limit = Some(limit);
		self
	}

	/// Fetches the requested page.
	///
	/// Returns [`Error::NotFound`] for a page past the last one, or for an
	/// empty listing when empty listings are not allowed.
	pub async fn fetch(&self, store: &dyn Store, paginate: &Paginate) -> Result<PageOf<Post>, Error> {
		let mut total = store.count_posts(&self.filter).await?;

		if let Some(limit) = self.limit {
			total = total.min(limit);
		}

		if total == 0 && !self.allow_empty {
			return Err(Error::NotFound);
		}

		if paginate.page > num_pages(total) {
			return Err(Error::NotFound);
		}

		let offset = paginate.offset();
		let take = PER_PAGE.min(total - offset);

		let posts = if take > 0 {
			store.list_posts(&self.filter, take, offset).await?
		} else {
			Vec::new()
		};

		tracing::debug!(filter = ?self.filter, page = paginate.page, total, "fetched listing");

		Ok(PageOf::new(posts, paginate.page, total))
	}
}

/// The context shared by every page: its title and the site setup.
pub async fn base_context(store: &dyn Store, page_title: &str) -> Result<Context, Error> {
	let mut context = Context::new();

	context.insert("page_title", page_title);
	context.insert("site_setup", &store.get_site_setup().await?);

	Ok(context)
}

/// Renders a page of posts with the listing template.
pub async fn render(
	store: &dyn Store,
	renderer: &Renderer,
	page: &PageOf<Post>,
	page_title: &str,
	search_value: &str,
) -> Result<Html<String>, Error> {
	let mut context = base_context(store, page_title).await?;

	context.insert("page_obj", page);
	context.insert("search_value", search_value);

	renderer.render(template::INDEX, &context)
}
