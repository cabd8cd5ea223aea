use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Error;

/// The number of posts shown on a listing page.
pub const PER_PAGE: i64 = 9;

#[derive(Debug, Validate)]
pub struct Paginate {
	/// The page number to return (1-indexed).
	#[validate(range(min = 1))]
	pub page: i64,
}

impl Default for Paginate {
	fn default() -> Self {
		Self { page: 1 }
	}
}

impl Paginate {
	/// Parses the raw `page` parameter. A missing or empty value is the first
	/// page; anything that is not a number of at least one does not exist.
	pub fn parse(page: Option<&str>) -> Result<Self, Error> {
		let page = match page.map(str::trim) {
			None | Some("") => return Ok(Self::default()),
			Some(page) => page.parse().map_err(|_| Error::NotFound)?,
		};

		let paginate = Self { page };
		paginate.validate().map_err(|_| Error::NotFound)?;

		Ok(paginate)
	}

	pub fn offset(&self) -> i64 {
		(self.page - 1) * PER_PAGE
	}
}

/// One page of a listing, as handed to the templates.
#[derive(Debug, Serialize)]
pub struct PageOf<T> {
	pub items: Vec<T>,
	/// The current page number (1-indexed).
	pub number: i64,
	pub num_pages: i64,
	/// The number of items across all pages.
	pub total: i64,
	pub has_previous: bool,
	pub has_next: bool,
	pub previous_page: Option<i64>,
	pub next_page: Option<i64>,
}

/// The number of pages needed for `total` items. An empty listing
/// still has one (empty) page.
pub fn num_pages(total: i64) -> i64 {
	if total <= 0 {
		1
	} else {
		(total + PER_PAGE - 1) / PER_PAGE
	}
}

impl<T> PageOf<T> {
	pub fn new(items: Vec<T>, number: i64, total: i64) -> Self {
		let num_pages = num_pages(total);
		let has_previous = number > 1;
		let has_next = number < num_pages;

		Self {
			items,
			number,
			num_pages,
			total,
			has_previous,
			has_next,
			previous_page: has_previous.then(|| number - 1),
			next_page: has_next.then(|| number + 1),
		}
	}
}

/// Formats the title of a listing or detail page.
///
/// The site title is appended by the base template, hence the trailing separator.
pub fn page_title(subject: &str, kind: Option<&str>) -> String {
	match kind {
		Some(kind) => format!("{subject} - {kind} - "),
		None => format!("{subject} - "),
	}
}

/// The search query string as sent. Nothing in it is rejected up front, so
/// a blank search redirects regardless of the other parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
	#[serde(default)]
	pub search: String,
	pub page: Option<String>,
}

#[derive(Debug, Validate)]
pub struct SearchInput {
	/// Free text matched against post titles, excerpts and content, trimmed.
	#[validate(length(max = 256))]
	pub search: String,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_paginate_offset() {
		let mut paginate = Paginate { page: 1 };

		assert_eq!(paginate.offset(), 0);

		paginate.page = 2;

		assert_eq!(paginate.offset(), 9);

		paginate.page = 3;

		assert_eq!(paginate.offset(), 18);
	}

	#[test]
	fn test_paginate_parse() {
		assert_eq!(Paginate::parse(None).unwrap().page, 1);
		assert_eq!(Paginate::parse(Some("")).unwrap().page, 1);
		assert_eq!(Paginate::parse(Some("3")).unwrap().page, 3);
		assert_eq!(Paginate::parse(Some(" 2 ")).unwrap().page, 2);

		for page in ["0", "-1", "abc", "1.5", "9999999999999999999999"] {
			assert!(
				matches!(Paginate::parse(Some(page)), Err(Error::NotFound)),
				"page={page}"
			);
		}
	}

	#[test]
	fn test_search_input_length() {
		let input = SearchInput {
			search: "x".repeat(256),
		};

		assert!(input.validate().is_ok());

		let input = SearchInput {
			search: "x".repeat(257),
		};

		assert!(input.validate().is_err());
	}

	#[test]
	fn test_page_title() {
		assert_eq!(page_title("Home", None), "Home - ");
		assert_eq!(page_title("Rust", Some("Category")), "Rust - Category - ");
	}

	#[test]
	fn test_num_pages() {
		assert_eq!(num_pages(0), 1);
		assert_eq!(num_pages(1), 1);
		assert_eq!(num_pages(9), 1);
		assert_eq!(num_pages(10), 2);
		assert_eq!(num_pages(27), 3);
	}

	#[test]
	fn test_page_links() {
		let page = PageOf::new(vec![1, 2, 3], 2, 25);

		assert_eq!(page.num_pages, 3);
		assert_eq!(page.previous_page, Some(1));
		assert_eq!(page.next_page, Some(3));

		let last = PageOf::new(vec![1], 3, 25);

		assert!(!last.has_next);
		assert_eq!(last.next_page, None);
	}
}
