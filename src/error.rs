use axum::{
	body::Body,
	extract::rejection,
	http::{Response, StatusCode},
	response::{Html, IntoResponse},
};

/// Error type for the application.
///
/// The Display trait is not sent to the client, so it can show
/// sensitive information.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("not found")]
	NotFound,
	#[error("path error: {0}")]
	Path(#[from] rejection::PathRejection),
	#[error("query error: {0}")]
	Query(#[from] rejection::QueryRejection),
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("template error: {0}")]
	Template(#[from] tera::Error),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl Error {
	pub fn status(&self) -> StatusCode {
		match self {
			// Path segments are typed (e.g. numeric author ids), so a mismatch
			// means no such resource.
			Self::NotFound | Self::Path(..) => StatusCode::NOT_FOUND,
			Self::Query(..) | Self::Validation(..) => StatusCode::BAD_REQUEST,
			Self::Template(..) | Self::Database(..) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

/// Minimal standalone page, rendered without the template engine so it
/// still works when templating is what failed.
fn error_page(status: StatusCode) -> Html<String> {
	let reason = status.canonical_reason().unwrap_or("Error");

	Html(format!(
		r#"<!DOCTYPE html>
<html>
	<head>
		<meta charset="utf-8" />
		<title>{code} - {reason}</title>
	</head>
	<body>
		<h1>{code}</h1>
		<p>{reason}</p>
		<p><a href="/">Back to the home page</a></p>
	</body>
</html>"#,
		code = status.as_u16(),
	))
}

impl IntoResponse for Error {
	fn into_response(self) -> Response<Body> {
		let status = self.status();

		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		} else {
			tracing::debug!(error = %self, "request rejected");
		}

		(status, error_page(status)).into_response()
	}
}
