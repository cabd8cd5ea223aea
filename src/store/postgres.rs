use std::collections::HashMap;

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::model::{Author, Category, MenuLink, Page, Post, SiteSetup, Tag};

use super::{PostFilter, Result, Store};

const POST_SELECT: &str = r#"
	SELECT
		p.id, p.title, p.slug, p.excerpt, p.content, p.is_published, p.created_at,
		u.id AS author_id, u.username AS author_username,
		u.first_name AS author_first_name, u.last_name AS author_last_name,
		c.id AS category_id, c.name AS category_name, c.slug AS category_slug
	FROM post p
	LEFT JOIN "user" u ON u.id = p.created_by
	LEFT JOIN category c ON c.id = p.category_id
	WHERE p.is_published
"#;

const POST_COUNT: &str = r#"
	SELECT COUNT(*) FROM post p
	LEFT JOIN category c ON c.id = p.category_id
	WHERE p.is_published
"#;

/// A post joined with its author and category, before tags are attached.
#[derive(sqlx::FromRow)]
struct PostRow {
	id: i64,
	title: String,
	slug: String,
	excerpt: String,
	content: String,
	is_published: bool,
	created_at: chrono::DateTime<chrono::Utc>,
	author_id: Option<i64>,
	author_username: Option<String>,
	author_first_name: Option<String>,
	author_last_name: Option<String>,
	category_id: Option<i64>,
	category_name: Option<String>,
	category_slug: Option<String>,
}

impl PostRow {
	fn into_post(self, tags: Vec<Tag>) -> Post {
		let created_by = match (self.author_id, self.author_username) {
			(Some(id), Some(username)) => Some(Author {
				id,
				username,
				first_name: self.author_first_name.unwrap_or_default(),
				last_name: self.author_last_name.unwrap_or_default(),
			}),
			_ => None,
		};

		let category = match (self.category_id, self.category_name, self.category_slug) {
			(Some(id), Some(name), Some(slug)) => Some(Category { id, name, slug }),
			_ => None,
		};

		Post {
			id: self.id,
			title: self.title,
			slug: self.slug,
			excerpt: self.excerpt,
			content: self.content,
			is_published: self.is_published,
			created_at: self.created_at,
			created_by,
			category,
			tags,
		}
	}
}

#[derive(sqlx::FromRow)]
struct PostTagRow {
	post_id: i64,
	id: i64,
	name: String,
	slug: String,
}

#[derive(sqlx::FromRow)]
struct SiteSetupRow {
	id: i64,
	title: String,
	description: String,
	show_header: bool,
	show_search: bool,
	show_menu: bool,
	show_description: bool,
	show_pagination: bool,
	show_footer: bool,
}

/// Escapes `LIKE` wildcards so the term matches literally, then wraps it
/// for a substring match.
fn like_pattern(term: &str) -> String {
	let mut pattern = String::with_capacity(term.len() + 2);

	pattern.push('%');
	for c in term.chars() {
		if matches!(c, '\\' | '%' | '_') {
			pattern.push('\\');
		}
		pattern.push(c);
	}
	pattern.push('%');

	pattern
}

/// Appends the predicate for `filter` to a query already ending in a `WHERE` clause.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
	match filter {
		PostFilter::Published => {}
		PostFilter::Author(id) => {
			builder.push(" AND p.created_by = ").push_bind(*id);
		}
		PostFilter::Category(slug) => {
			builder.push(" AND c.slug = ").push_bind(slug.clone());
		}
		PostFilter::Tag(slug) => {
			builder
				.push(
					" AND EXISTS (SELECT 1 FROM post_tag pt JOIN tag t ON t.id = pt.tag_id \
					WHERE pt.post_id = p.id AND t.slug = ",
				)
				.push_bind(slug.clone())
				.push(")");
		}
		PostFilter::Search(term) => {
			let pattern = like_pattern(term);

			builder
				.push(" AND (p.title ILIKE ")
				.push_bind(pattern.clone())
				.push(" OR p.excerpt ILIKE ")
				.push_bind(pattern.clone())
				.push(" OR p.content ILIKE ")
				.push_bind(pattern)
				.push(")");
		}
	}
}

/// [`Store`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
	pool: PgPool,
}

impl PgStore {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}

	/// Loads the tags of every post in `rows` with a single query.
	async fn attach_tags(&self, rows: Vec<PostRow>) -> Result<Vec<Post>> {
		let ids = rows.iter().map(|row| row.id).collect::<Vec<_>>();

		let tag_rows = sqlx::query_as::<_, PostTagRow>(
			r#"
				SELECT pt.post_id, t.id, t.name, t.slug
				FROM post_tag pt
				JOIN tag t ON t.id = pt.tag_id
				WHERE pt.post_id = ANY($1)
				ORDER BY t.name
			"#,
		)
		.bind(ids)
		.fetch_all(&self.pool)
		.await?;

		let mut tags: HashMap<i64, Vec<Tag>> = HashMap::new();
		for row in tag_rows {
			tags.entry(row.post_id).or_default().push(Tag {
				id: row.id,
				name: row.name,
				slug: row.slug,
			});
		}

		Ok(rows
			.into_iter()
			.map(|row| {
				let post_tags = tags.remove(&row.id).unwrap_or_default();
				row.into_post(post_tags)
			})
			.collect())
	}
}

#[axum::async_trait]
impl Store for PgStore {
	async fn count_posts(&self, filter: &PostFilter) -> Result<i64> {
		let mut builder = QueryBuilder::<Postgres>::new(POST_COUNT);
		push_filter(&mut builder, filter);

		builder
			.build_query_scalar::<i64>()
			.fetch_one(&self.pool)
			.await
	}

	async fn list_posts(&self, filter: &PostFilter, limit: i64, offset: i64) -> Result<Vec<Post>> {
		let mut builder = QueryBuilder::<Postgres>::new(POST_SELECT);
		push_filter(&mut builder, filter);

		builder
			.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ")
			.push_bind(limit)
			.push(" OFFSET ")
			.push_bind(offset);

		let rows = builder
			.build_query_as::<PostRow>()
			.fetch_all(&self.pool)
			.await?;

		tracing::debug!(?filter, limit, offset, rows = rows.len(), "listed posts");

		self.attach_tags(rows).await
	}

	async fn get_post(&self, slug: &str) -> Result<Option<Post>> {
		let mut builder = QueryBuilder::<Postgres>::new(POST_SELECT);
		builder.push(" AND p.slug = ").push_bind(slug.to_owned());

		let Some(row) = builder
			.build_query_as::<PostRow>()
			.fetch_optional(&self.pool)
			.await?
		else {
			return Ok(None);
		};

		Ok(self.attach_tags(vec![row]).await?.pop())
	}

	async fn get_page(&self, slug: &str) -> Result<Option<Page>> {
		sqlx::query_as::<_, Page>(
			r#"
				SELECT id, title, slug, content, is_published FROM page
				WHERE slug = $1 AND is_published
			"#,
		)
		.bind(slug)
		.fetch_optional(&self.pool)
		.await
	}

	async fn get_author(&self, id: i64) -> Result<Option<Author>> {
		sqlx::query_as::<_, Author>(
			r#"SELECT id, username, first_name, last_name FROM "user" WHERE id = $1"#,
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await
	}

	async fn get_site_setup(&self) -> Result<Option<SiteSetup>> {
		let Some(setup) = sqlx::query_as::<_, SiteSetupRow>(
			r#"
				SELECT
					id, title, description, show_header, show_search, show_menu,
					show_description, show_pagination, show_footer
				FROM site_setup
				ORDER BY id
				LIMIT 1
			"#,
		)
		.fetch_optional(&self.pool)
		.await?
		else {
			return Ok(None);
		};

		let menu = sqlx::query_as::<_, MenuLink>(
			r#"
				SELECT text, url_or_path, new_tab FROM menu_link
				WHERE site_setup_id = $1
				ORDER BY id
			"#,
		)
		.bind(setup.id)
		.fetch_all(&self.pool)
		.await?;

		Ok(Some(SiteSetup {
			title: setup.title,
			description: setup.description,
			show_header: setup.show_header,
			show_search: setup.show_search,
			show_menu: setup.show_menu,
			show_description: setup.show_description,
			show_pagination: setup.show_pagination,
			show_footer: setup.show_footer,
			menu,
		}))
	}
}
