use axum::{
	extract::FromRequestParts,
	http::request,
};
use serde::{de, Deserialize};

use crate::{error::Error, route::model::Paginate};

#[derive(Deserialize)]
struct PageQuery {
	page: Option<String>,
}

/// Reads the `page` query parameter.
///
/// A page that cannot exist (not a number, or below one) is answered with a
/// not-found page, the same as one past the end of a listing.
///
/// ```rust
/// async fn route(paginate: Paginate) {
///   // ...
/// }
/// ```
#[axum::async_trait]
impl<S> FromRequestParts<S> for Paginate
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let axum::extract::Query(query) =
			axum::extract::Query::<PageQuery>::from_request_parts(parts, state)
				.await
				.map_err(|_| Error::NotFound)?;

		Paginate::parse(query.page.as_deref())
	}
}

/// Extractor that deserializes path parameters.
///
/// Unlike [`axum::extract::Path`], a segment that fails to parse is
/// reported as [`Error::Path`] and answered with a not-found page.
pub struct Path<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
	T: de::DeserializeOwned + Send,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let result = axum::extract::Path::<T>::from_request_parts(parts, state)
			.await?
			.0;

		Ok(Self(result))
	}
}
