use std::sync::Arc;

use axum::response::Html;
use tera::{Context, Tera};

use crate::error::Error;

pub mod template {
	pub const INDEX: &str = "index.html";
	pub const POST: &str = "post.html";
	pub const PAGE: &str = "page.html";
}

/// Templates compiled into the binary, keyed by the name they are rendered with.
const TEMPLATES: [(&str, &str); 5] = [
	("base.html", include_str!("../templates/base.html")),
	("partials/pagination.html", include_str!("../templates/partials/pagination.html")),
	(template::INDEX, include_str!("../templates/index.html")),
	(template::POST, include_str!("../templates/post.html")),
	(template::PAGE, include_str!("../templates/page.html")),
];

/// Renders HTML pages from the embedded Tera templates.
#[derive(Clone)]
pub struct Renderer {
	tera: Arc<Tera>,
}

impl Renderer {
	/// Parses every template up front, so syntax errors surface at start-up.
	pub fn new() -> Result<Self, tera::Error> {
		let mut tera = Tera::default();
		tera.add_raw_templates(TEMPLATES)?;

		Ok(Self {
			tera: Arc::new(tera),
		})
	}

	pub fn render(&self, template: &str, context: &Context) -> Result<Html<String>, Error> {
		Ok(Html(self.tera.render(template, context)?))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_templates_parse() {
		let renderer = Renderer::new().unwrap();

		for name in [template::INDEX, template::POST, template::PAGE] {
			assert!(renderer.tera.get_template_names().any(|n| n == name));
		}
	}

	#[test]
	fn test_render_escapes_title() {
		let renderer = Renderer::new().unwrap();
		let mut context = Context::new();

		context.insert("page_title", "<b>bold</b> - ");
		context.insert("page", &page("About", "<p>Hello</p>"));

		let Html(html) = renderer.render(template::PAGE, &context).unwrap();

		assert!(html.contains("&lt;b&gt;bold"));
		assert!(!html.contains("<b>bold</b>"));
		assert!(html.contains("<p>Hello</p>"));
	}

	fn page(title: &str, content: &str) -> crate::model::Page {
		crate::model::Page {
			id: 1,
			title: title.into(),
			slug: "about".into(),
			content: content.into(),
			is_published: true,
		}
	}
}
