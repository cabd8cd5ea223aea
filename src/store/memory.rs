use crate::model::{Author, Page, Post, SiteSetup};

use super::{PostFilter, Result, Store};

/// [`Store`] holding everything in memory, used to exercise the routes
/// without a database.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
	pub posts: Vec<Post>,
	pub pages: Vec<Page>,
	pub authors: Vec<Author>,
	pub site_setup: Option<SiteSetup>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(needle)
}

impl PostFilter {
	fn matches(&self, post: &Post) -> bool {
		match self {
			Self::Published => true,
			Self::Author(id) => post.created_by.as_ref().is_some_and(|a| a.id == *id),
			Self::Category(slug) => post.category.as_ref().is_some_and(|c| &c.slug == slug),
			Self::Tag(slug) => post.tags.iter().any(|t| &t.slug == slug),
			Self::Search(term) => {
				let term = term.to_lowercase();

				contains_ignore_case(&post.title, &term)
					|| contains_ignore_case(&post.excerpt, &term)
					|| contains_ignore_case(&post.content, &term)
			}
		}
	}
}

impl MemoryStore {
	fn published(&self, filter: &PostFilter) -> Vec<&Post> {
		let mut posts = self
			.posts
			.iter()
			.filter(|post| post.is_published && filter.matches(post))
			.collect::<Vec<_>>();

		posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
		posts
	}
}

#[axum::async_trait]
impl Store for MemoryStore {
	async fn count_posts(&self, filter: &PostFilter) -> Result<i64> {
		Ok(self.published(filter).len().try_into().unwrap_or(i64::MAX))
	}

	async fn list_posts(&self, filter: &PostFilter, limit: i64, offset: i64) -> Result<Vec<Post>> {
		let limit = usize::try_from(limit).unwrap_or(0);
		let offset = usize::try_from(offset).unwrap_or(0);

		Ok(self
			.published(filter)
			.into_iter()
			.skip(offset)
			.take(limit)
			.cloned()
			.collect())
	}

	async fn get_post(&self, slug: &str) -> Result<Option<Post>> {
		Ok(self
			.posts
			.iter()
			.find(|post| post.is_published && post.slug == slug)
			.cloned())
	}

	async fn get_page(&self, slug: &str) -> Result<Option<Page>> {
		Ok(self
			.pages
			.iter()
			.find(|page| page.is_published && page.slug == slug)
			.cloned())
	}

	async fn get_author(&self, id: i64) -> Result<Option<Author>> {
		Ok(self.authors.iter().find(|author| author.id == id).cloned())
	}

	async fn get_site_setup(&self) -> Result<Option<SiteSetup>> {
		Ok(self.site_setup.clone())
	}
}
