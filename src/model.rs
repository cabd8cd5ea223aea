use serde::Serialize;

/// A user that authored one or more posts.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Author {
	pub id: i64,
	pub username: String,
	pub first_name: String,
	pub last_name: String,
}

impl Author {
	/// The name shown to readers, falling back to the username
	/// when no first name has been set.
	pub fn display_name(&self) -> String {
		if self.first_name.is_empty() {
			return self.username.clone();
		}

		format!("{} {}", self.first_name, self.last_name)
			.trim_end()
			.to_owned()
	}
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
	pub id: i64,
	pub name: String,
	pub slug: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Tag {
	pub id: i64,
	pub name: String,
	pub slug: String,
}

/// A single blog post.
///
/// Only posts with `is_published` set are ever handed to the routes.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
	pub id: i64,
	pub title: String,
	/// Unique, URL-safe identifier used in `/post/<slug>/`.
	pub slug: String,
	pub excerpt: String,
	/// The post body as HTML.
	pub content: String,
	pub is_published: bool,
	pub created_at: chrono::DateTime<chrono::Utc>,
	pub created_by: Option<Author>,
	pub category: Option<Category>,
	pub tags: Vec<Tag>,
}

/// A standalone page, such as "About".
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Page {
	pub id: i64,
	pub title: String,
	pub slug: String,
	pub content: String,
	pub is_published: bool,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MenuLink {
	pub text: String,
	pub url_or_path: String,
	pub new_tab: bool,
}

/// Site-wide settings, stored as a single row.
#[derive(Debug, Clone, Serialize)]
pub struct SiteSetup {
	pub title: String,
	pub description: String,
	pub show_header: bool,
	pub show_search: bool,
	pub show_menu: bool,
	pub show_description: bool,
	pub show_pagination: bool,
	pub show_footer: bool,
	pub menu: Vec<MenuLink>,
}

#[cfg(test)]
mod test {
	use super::Author;

	fn author(first_name: &str, last_name: &str) -> Author {
		Author {
			id: 1,
			username: "jdoe".into(),
			first_name: first_name.into(),
			last_name: last_name.into(),
		}
	}

	#[test]
	fn test_display_name_uses_full_name() {
		assert_eq!(author("John", "Doe").display_name(), "John Doe");
	}

	#[test]
	fn test_display_name_falls_back_to_username() {
		assert_eq!(author("", "Doe").display_name(), "jdoe");
	}

	#[test]
	fn test_display_name_without_last_name() {
		assert_eq!(author("John", "").display_name(), "John");
	}
}
