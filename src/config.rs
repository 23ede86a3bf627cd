//! Client configuration and environment selection.
use std::{fmt, str::FromStr};

use iref::UriBuf;
use serde::{Deserialize, Serialize};

use crate::client::Error;

/// Sberbank ID deployment the client talks to.
#[derive(
	Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	/// Test stand. Accepts the published test users.
	#[default]
	Sandbox,

	/// Pre-production API gateway.
	Dev,

	/// Production API gateway.
	Prod,
}

impl Environment {
	/// Base URL of every endpoint in this environment.
	pub const fn base_url(self) -> &'static str {
		match self {
			Self::Sandbox => "http://45.12.238.224:8181",
			Self::Dev => "https://dev.api.sberbank.ru",
			Self::Prod => "https://sec.api.sberbank.ru",
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Sandbox => "sandbox",
			Self::Dev => "dev",
			Self::Prod => "prod",
		}
	}

	/// Absolute URL of `endpoint` in this environment.
	pub fn endpoint_url(self, endpoint: Endpoint) -> Result<UriBuf, Error> {
		env_url(self, endpoint.path())
	}
}

impl fmt::Display for Environment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Environment {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"sandbox" => Ok(Self::Sandbox),
			"dev" => Ok(Self::Dev),
			"prod" => Ok(Self::Prod),
			_ => Err(Error::invalid_environment(s)),
		}
	}
}

/// Endpoints of the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// Authorization endpoint, returns the authorization code.
	Authorize,

	/// Token endpoint, exchanges the code for an access token.
	Token,

	/// Personal data of the authenticated user.
	UserInfo,
}

impl Endpoint {
	pub const fn path(self) -> &'static str {
		match self {
			Self::Authorize => "/CSAFront/oidc/sberbank_id/authorize.do",
			Self::Token => "/ru/prod/tokens/v2/oidc",
			Self::UserInfo => "/ru/prod/sberbankid/v2.1/userInfo",
		}
	}
}

/// Resolves `path` against the base URL of `environment`.
///
/// The result must be an absolute URL with a scheme and a non-empty host.
pub fn env_url(environment: Environment, path: &str) -> Result<UriBuf, Error> {
	let url = format!("{}{path}", environment.base_url());

	let uri = UriBuf::new(url.clone().into_bytes()).map_err(|_| Error::invalid_url(&url))?;

	match uri.authority() {
		Some(authority) if !authority.host().as_str().is_empty() => Ok(uri),
		_ => Err(Error::invalid_url(&url)),
	}
}

/// Client configuration.
///
/// Deserializable so integrators can load it with their own configuration
/// layer; `environment` defaults to [`Environment::Sandbox`] and `verbose` to
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
	/// Space separated scopes requested during authorization, e.g.
	/// `openid name snils`.
	pub scope: String,

	/// Redirect URI registered for the integration.
	pub redirect_uri: UriBuf,

	#[serde(default)]
	pub environment: Environment,

	/// Logs full requests and responses at `info` level.
	#[serde(default)]
	pub verbose: bool,
}

impl Config {
	pub fn new(scope: impl Into<String>, redirect_uri: UriBuf) -> Self {
		Self {
			scope: scope.into(),
			redirect_uri,
			environment: Environment::default(),
			verbose: false,
		}
	}

	pub fn with_environment(self, environment: Environment) -> Self {
		Self {
			environment,
			..self
		}
	}

	pub fn with_verbose(self, verbose: bool) -> Self {
		Self { verbose, ..self }
	}
}
