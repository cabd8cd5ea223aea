#[cfg(test)]
pub mod memory;
mod postgres;

pub use postgres::PgStore;

use std::sync::Arc;

use crate::model::{Author, Page, Post, SiteSetup};

pub type Result<T> = std::result::Result<T, sqlx::Error>;

/// Shared handle to the content store, cheap to clone into handlers.
pub type SharedStore = Arc<dyn Store>;

/// An extra predicate applied on top of the published posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
	/// Every published post.
	Published,
	/// Posts created by the author with this id.
	Author(i64),
	/// Posts in the category with this slug.
	Category(String),
	/// Posts carrying the tag with this slug.
	Tag(String),
	/// Posts whose title, excerpt or content contain the term, ignoring case.
	Search(String),
}

/// Read access to published content.
///
/// Implementations must never return an unpublished post or page, and must
/// order post listings newest first.
#[axum::async_trait]
pub trait Store: Send + Sync {
	/// Counts the published posts matching `filter`.
	async fn count_posts(&self, filter: &PostFilter) -> Result<i64>;

	/// Returns at most `limit` published posts matching `filter`, skipping
	/// the first `offset`.
	async fn list_posts(&self, filter: &PostFilter, limit: i64, offset: i64) -> Result<Vec<Post>>;

	async fn get_post(&self, slug: &str) -> Result<Option<Post>>;

	async fn get_page(&self, slug: &str) -> Result<Option<Page>>;

	async fn get_author(&self, id: i64) -> Result<Option<Author>>;

	/// Returns the site setup record, if one has been created.
	async fn get_site_setup(&self) -> Result<Option<SiteSetup>>;
}
