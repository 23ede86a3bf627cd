//! Authorization endpoint.
//!
//! The identity provider is driven like a browser would: the user
//! credentials are posted to the authorization endpoint and the
//! authorization code is read from the `Location` header of the response.
//! The transport must therefore not follow redirects.
use std::fmt;

use http::{Method, StatusCode, header};
use iref::{Uri, UriBuf};
use serde::Serialize;

use crate::{
	ClientId, CodeBuf, Nonce, State,
	client::{Error, SberbankIdClient},
	config::Endpoint,
	endpoints::{SendRequest, request_builder},
	transport::{ContentType, HttpClient, Json},
	util::{extend_uri_query, query_param},
};

/// Query parameters of the authorization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthorizationParams<'a> {
	pub response_type: &'a str,
	pub client_type: &'a str,
	pub scope: &'a str,
	pub client_id: &'a ClientId,
	pub state: &'a State,
	pub nonce: &'a Nonce,
	pub redirect_uri: &'a Uri,
}

impl<'a> AuthorizationParams<'a> {
	/// Authorization code flow for a private (confidential) client.
	pub fn new(
		scope: &'a str,
		client_id: &'a ClientId,
		state: &'a State,
		nonce: &'a Nonce,
		redirect_uri: &'a Uri,
	) -> Self {
		Self {
			response_type: "code",
			client_type: "PRIVATE",
			scope,
			client_id,
			state,
			nonce,
			redirect_uri,
		}
	}

	/// Appends these parameters to the query of `endpoint`.
	pub fn to_uri(&self, endpoint: &Uri) -> Result<UriBuf, Error> {
		let mut uri = endpoint.to_owned();
		extend_uri_query(&mut uri, self)?;
		Ok(uri)
	}
}

/// User credentials posted as the JSON body of the authorization request.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserCredentials<'a> {
	pub login: &'a str,
	pub password: &'a str,
}

impl fmt::Debug for UserCredentials<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UserCredentials")
			.field("login", &self.login)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Authorization request.
#[derive(Debug)]
pub struct AuthorizationRequest<'a> {
	/// Authorization endpoint, without the OAuth parameters.
	pub endpoint: UriBuf,
	pub params: AuthorizationParams<'a>,
	pub user: UserCredentials<'a>,
}

impl SendRequest for AuthorizationRequest<'_> {
	type ContentType = Json;
	type Response = CodeBuf;

	fn build_request(&self) -> Result<http::Request<Vec<u8>>, Error> {
		let uri = self.params.to_uri(&self.endpoint)?;

		request_builder::<Self::ContentType>(Method::POST, &uri)
			.body(Self::ContentType::encode(&self.user)?)
			.map_err(Error::request)
	}

	/// Only `200 OK` with a `Location` header carrying a `code` parameter
	/// counts as success. The returned `state` is not compared with the one
	/// that was sent.
	fn decode_response(&self, response: http::Response<Vec<u8>>) -> Result<CodeBuf, Error> {
		if response.status() != StatusCode::OK {
			return Err(Error::auth_request_failed(&format!(
				"unexpected status {}",
				response.status()
			)));
		}

		let location = response
			.headers()
			.get(header::LOCATION)
			.and_then(|value| value.to_str().ok())
			.filter(|value| !value.is_empty())
			.ok_or_else(|| Error::auth_request_failed("missing Location header"))?;

		let code = query_param(location, "code")
			.map_err(|_| Error::auth_request_failed("malformed Location header"))?
			.ok_or_else(|| Error::auth_request_failed("no code in Location header"))?;

		CodeBuf::new(code).map_err(|_| Error::auth_request_failed("invalid authorization code"))
	}
}

impl<H: HttpClient> SberbankIdClient<H> {
	/// Authorization parameters of this client.
	pub fn authorization_params(&self) -> AuthorizationParams<'_> {
		AuthorizationParams::new(
			&self.config().scope,
			self.client_id(),
			self.state(),
			self.nonce(),
			&self.config().redirect_uri,
		)
	}

	/// Authorization URL with all OAuth parameters, for flows where the user
	/// agent is redirected to the identity provider.
	pub fn authorization_uri(&self) -> Result<UriBuf, Error> {
		let endpoint = self.config().environment.endpoint_url(Endpoint::Authorize)?;
		self.authorization_params().to_uri(&endpoint)
	}

	/// Logs in as `login` and returns the authorization code.
	///
	/// Fails with [`Error::AuthRequestFailed`] unless the identity provider
	/// answers `200 OK` with a `Location` header carrying the code.
	pub async fn auth_request(&self, login: &str, password: &str) -> Result<CodeBuf, Error> {
		log::debug!("requesting authorization code for `{login}`");

		self.execute(AuthorizationRequest {
			endpoint: self.config().environment.endpoint_url(Endpoint::Authorize)?,
			params: self.authorization_params(),
			user: UserCredentials { login, password },
		})
		.await
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		client::tests::{MockHttpClient, test_client},
		transport::APPLICATION_JSON,
		util::query_param,
	};

	use super::*;

	fn redirect(status: u16, location: Option<&str>) -> MockHttpClient {
		let mut builder = http::Response::builder().status(status);
		if let Some(location) = location {
			builder = builder.header(header::LOCATION, location);
		}
		MockHttpClient::new(builder.body(Vec::new()).unwrap())
	}

	#[tokio::test]
	async fn code_extracted_from_location() {
		let client = test_client(redirect(200, Some("https://x/callback?code=ABC123")));
		let code = client.auth_request("Q0002", "Password2").await.unwrap();
		assert_eq!(code.as_str(), "ABC123");
	}

	#[tokio::test]
	async fn request_carries_credentials_and_oauth_params() {
		let client = test_client(redirect(200, Some("/login?code=ABC123&state=x")));
		client.auth_request("Q0002", "Password2").await.unwrap();

		let request = client.http_client().last_request();
		assert_eq!(request.method(), Method::POST);
		assert_eq!(
			request.headers().get(header::CONTENT_TYPE),
			Some(&APPLICATION_JSON)
		);

		let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
		assert_eq!(
			body,
			serde_json::json!({"login": "Q0002", "password": "Password2"})
		);

		let uri = request.uri().to_string();
		assert!(uri.starts_with(
			"http://45.12.238.224:8181/CSAFront/oidc/sberbank_id/authorize.do?"
		));

		let param = |key: &str| query_param(&uri, key).unwrap();
		assert_eq!(param("response_type").as_deref(), Some("code"));
		assert_eq!(param("client_type").as_deref(), Some("PRIVATE"));
		assert_eq!(param("scope").as_deref(), Some("openid name snils"));
		assert_eq!(
			param("client_id").as_deref(),
			Some("012345670123abcd0123012345678901")
		);
		assert_eq!(param("state").as_deref(), Some(client.state().as_str()));
		assert_eq!(param("nonce").as_deref(), Some(client.nonce().as_str()));
		assert_eq!(
			param("redirect_uri").as_deref(),
			Some("http://127.0.0.1:8080/login")
		);
	}

	#[tokio::test]
	async fn non_ok_status_fails() {
		for status in [302, 401, 500] {
			let client = test_client(redirect(status, Some("https://x/callback?code=ABC123")));
			assert!(matches!(
				client.auth_request("Q0002", "Password2").await,
				Err(Error::AuthRequestFailed)
			));
		}
	}

	#[tokio::test]
	async fn missing_location_fails() {
		let client = test_client(redirect(200, None));
		assert!(matches!(
			client.auth_request("Q0002", "Password2").await,
			Err(Error::AuthRequestFailed)
		));
	}

	#[tokio::test]
	async fn empty_location_fails() {
		let client = test_client(redirect(200, Some("")));
		assert!(matches!(
			client.auth_request("Q0002", "Password2").await,
			Err(Error::AuthRequestFailed)
		));
	}

	#[tokio::test]
	async fn location_without_code_fails() {
		let client = test_client(redirect(200, Some("https://x/callback?error=access_denied")));
		assert!(matches!(
			client.auth_request("Q0002", "Password2").await,
			Err(Error::AuthRequestFailed)
		));
	}

	#[tokio::test]
	async fn malformed_location_fails() {
		let client = test_client(redirect(200, Some("https://x/call back?code=1")));
		assert!(matches!(
			client.auth_request("Q0002", "Password2").await,
			Err(Error::AuthRequestFailed)
		));
	}

	#[tokio::test]
	async fn transport_error_propagates() {
		let client = test_client(redirect(200, None));
		client.auth_request("Q0002", "Password2").await.ok();

		// The mock has no response left and fails like a broken connection.
		assert!(matches!(
			client.auth_request("Q0002", "Password2").await,
			Err(Error::Request(_))
		));
	}

	#[test]
	fn state_and_nonce_reused_across_requests() {
		let client = test_client(redirect(200, None));
		let first = client.authorization_uri().unwrap();
		let second = client.authorization_uri().unwrap();
		assert_eq!(first.as_str(), second.as_str());
		assert_eq!(
			query_param(first.as_str(), "state").unwrap().as_deref(),
			Some(client.state().as_str())
		);
	}

	#[test]
	fn user_credentials_debug_redacts_password() {
		let user = UserCredentials {
			login: "Q0002",
			password: "Password2",
		};
		assert!(!format!("{user:?}").contains("Password2"));
	}
}
