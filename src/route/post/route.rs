use axum::{extract::State, response::Html};

use crate::{
	error::Error,
	extract::Path,
	render::{template, Renderer},
	route::{
		listing::{self, Listing},
		model::{page_title, Paginate},
	},
	store::{PostFilter, SharedStore},
};

/// Home page
/// Lists every published post, newest first.
pub async fn get_posts(
	State(store): State<SharedStore>,
	State(renderer): State<Renderer>,
	paginate: Paginate,
) -> Result<Html<String>, Error> {
	let posts = Listing::new(PostFilter::Published)
		.fetch(store.as_ref(), &paginate)
		.await?;

	listing::render(
		store.as_ref(),
		&renderer,
		&posts,
		&page_title("Home", None),
		"",
	)
	.await
}

/// Get single post
/// Returns a single published post by its slug.
pub async fn get_post(
	State(store): State<SharedStore>,
	State(renderer): State<Renderer>,
	Path(slug): Path<String>,
) -> Result<Html<String>, Error> {
	let post = store.get_post(&slug).await?.ok_or(Error::NotFound)?;

	let mut context =
		listing::base_context(store.as_ref(), &page_title(&post.title, Some("Post")))
			.await?;
	context.insert("post", &post);

	renderer.render(template::POST, &context)
}

/// Get author posts
/// Lists the published posts created by an author, newest first.
pub async fn get_author_posts(
	State(store): State<SharedStore>,
	State(renderer): State<Renderer>,
	Path(author_id): Path<i64>,
	paginate: Paginate,
) -> Result<Html<String>, Error> {
	let author = store
		.get_author(author_id)
		.await?
		.ok_or(Error::NotFound)?;

	let posts = Listing::new(PostFilter::Author(author.id))
		.fetch(store.as_ref(), &paginate)
		.await?;

	listing::render(
		store.as_ref(),
		&renderer,
		&posts,
		&page_title(&format!("Posts by {}", author.display_name()), None),
		"",
	)
	.await
}

/// Get category posts
/// Lists the published posts in a category. A category without posts is not found.
pub async fn get_category_posts(
	State(store): State<SharedStore>,
	State(renderer): State<Renderer>,
	Path(slug): Path<String>,
	paginate: Paginate,
) -> Result<Html<String>, Error> {
	let posts = Listing::new(PostFilter::Category(slug.clone()))
		.disallow_empty()
		.fetch(store.as_ref(), &paginate)
		.await?;

	let name = posts
		.items
		.first()
		.and_then(|post| post.category.as_ref())
		.map_or(slug.as_str(), |category| category.name.as_str());

	listing::render(
		store.as_ref(),
		&renderer,
		&posts,
		&page_title(name, Some("Category")),
		"",
	)
	.await
}

/// Get tag posts
/// Lists the published posts carrying a tag. A tag without posts is not found.
pub async fn get_tag_posts(
	State(store): State<SharedStore>,
	State(renderer): State<Renderer>,
	Path(slug): Path<String>,
	paginate: Paginate,
) -> Result<Html<String>, Error> {
	let posts = Listing::new(PostFilter::Tag(slug.clone()))
		.disallow_empty()
		.fetch(store.as_ref(), &paginate)
		.await?;

	listing::render(
		store.as_ref(),
		&renderer,
		&posts,
		&page_title(&slug, Some("Tag")),
		"",
	)
	.await
}
