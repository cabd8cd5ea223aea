use std::{net::IpAddr, str::FromStr};

use tracing::Level;

/// An error in the process environment, reported before the server starts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("{name} has an invalid value {value:?}")]
	Invalid { name: &'static str, value: String },
}

/// Runtime configuration, read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub database_max_connections: u32,
	pub host: IpAddr,
	pub port: u16,
	pub log_level: Level,
}

impl Config {
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Builds the configuration from any variable source.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
		let database_url = lookup("DATABASE_URL").ok_or(Error::Missing("DATABASE_URL"))?;

		Ok(Self {
			database_url,
			database_max_connections: var(&lookup, "DATABASE_MAX_CONNECTIONS", "5")?,
			host: var(&lookup, "HOST", "127.0.0.1")?,
			port: var(&lookup, "PORT", "3000")?,
			log_level: var(&lookup, "LOG_LEVEL", "info")?,
		})
	}
}

/// Parses an optional variable, falling back to `default` when unset.
fn var<T: FromStr>(
	lookup: &impl Fn(&str) -> Option<String>,
	name: &'static str,
	default: &str,
) -> Result<T, Error> {
	let value = lookup(name).unwrap_or_else(|| default.to_owned());

	value.parse().map_err(|_| Error::Invalid { name, value })
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use super::*;

	fn config(vars: &[(&str, &str)]) -> Result<Config, Error> {
		let vars = vars
			.iter()
			.map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
			.collect::<HashMap<_, _>>();

		Config::from_lookup(|name| vars.get(name).cloned())
	}

	#[test]
	fn test_defaults() {
		let config = config(&[("DATABASE_URL", "postgres://localhost/blog")]).unwrap();

		assert_eq!(config.port, 3000);
		assert_eq!(config.host.to_string(), "127.0.0.1");
		assert_eq!(config.database_max_connections, 5);
		assert_eq!(config.log_level, Level::INFO);
	}

	#[test]
	fn test_missing_database_url() {
		assert!(matches!(
			config(&[]),
			Err(Error::Missing("DATABASE_URL"))
		));
	}

	#[test]
	fn test_invalid_port() {
		let result = config(&[
			("DATABASE_URL", "postgres://localhost/blog"),
			("PORT", "eighty"),
		]);

		assert!(matches!(result, Err(Error::Invalid { name: "PORT", .. })));
	}

	#[test]
	fn test_overrides() {
		let config = config(&[
			("DATABASE_URL", "postgres://localhost/blog"),
			("HOST", "0.0.0.0"),
			("PORT", "8080"),
			("LOG_LEVEL", "debug"),
		])
		.unwrap();

		assert_eq!(config.port, 8080);
		assert_eq!(config.host.to_string(), "0.0.0.0");
		assert_eq!(config.log_level, Level::DEBUG);
	}
}
