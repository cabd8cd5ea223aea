#![warn(clippy::pedantic)]

mod config;
mod error;
mod extract;
mod model;
mod render;
mod route;
mod store;
mod trace;

use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower::{Layer, ServiceBuilder};
use tower_http::{
	compression::CompressionLayer,
	normalize_path::NormalizePathLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};

pub use error::Error;

use config::Config;
use render::Renderer;
use store::{PgStore, SharedStore};

pub type AppState = State;

/// The shared application state.
///
/// Handlers pull out the parts they need with `State<SharedStore>` or
/// `State<Renderer>`.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub store: SharedStore,
	pub renderer: Renderer,
}

async fn not_found() -> Error {
	Error::NotFound
}

/// Builds the full application: routes, trailing-slash normalization and
/// the HTTP middleware stack.
pub fn app(state: AppState) -> Router {
	let routes = route::routes().fallback(not_found).with_state(state);

	Router::new()
		.fallback_service(NormalizePathLayer::trim_trailing_slash().layer(routes))
		.layer(
			ServiceBuilder::new()
				.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
				.layer(TraceLayer::new_for_http())
				.layer(PropagateRequestIdLayer::x_request_id())
				.layer(CompressionLayer::new()),
		)
}

#[tokio::main]
async fn main() {
	dotenvy::dotenv().ok();

	let config = Config::from_env().expect("invalid configuration");

	trace::init_tracing_subscriber(config.log_level);

	let pool = PgPoolOptions::new()
		.max_connections(config.database_max_connections)
		.connect(&config.database_url)
		.await
		.expect("failed to connect to database");

	sqlx::migrate!()
		.run(&pool)
		.await
		.expect("failed to run migrations");

	let state = State {
		store: Arc::new(PgStore::new(pool)),
		renderer: Renderer::new().expect("failed to load templates"),
	};

	let listener = tokio::net::TcpListener::bind((config.host, config.port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on {}:{}", config.host, config.port);

	axum::serve(listener, app(state))
		.await
		.expect("server error");
}
