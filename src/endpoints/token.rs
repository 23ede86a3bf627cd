//! Token endpoint.
use http::{Method, header};
use iref::{Uri, UriBuf};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
	AccessTokenBuf, ClientId, Code,
	client::{Error, SberbankIdClient},
	config::Endpoint,
	endpoints::{RQUID, SendRequest, X_IBM_CLIENT_ID, X_IBM_CLIENT_SECRET, request_builder},
	transport::{APPLICATION_JSON, ContentType, HttpClient, WwwFormUrlEncoded},
	util::{RQUID_LEN, random_rquid},
};

/// Form body of the token request (authorization code grant).
#[derive(Serialize)]
#[serde(tag = "grant_type", rename = "authorization_code")]
pub struct TokenForm<'a> {
	pub scope: &'a str,
	pub redirect_uri: &'a Uri,
	pub code: &'a Code,
	pub client_id: &'a ClientId,
	pub client_secret: &'a str,
}

/// Token request.
pub struct TokenRequest<'a> {
	pub endpoint: UriBuf,
	pub form: TokenForm<'a>,
}

impl SendRequest for TokenRequest<'_> {
	type ContentType = WwwFormUrlEncoded;
	type Response = TokenResponse;

	fn build_request(&self) -> Result<http::Request<Vec<u8>>, Error> {
		request_builder::<Self::ContentType>(Method::POST, &self.endpoint)
			.header(header::ACCEPT, APPLICATION_JSON)
			.header(X_IBM_CLIENT_ID, self.form.client_id.as_str())
			.header(X_IBM_CLIENT_SECRET, self.form.client_secret)
			.header(RQUID, random_rquid(RQUID_LEN))
			.body(Self::ContentType::encode(&self.form)?)
			.map_err(Error::request)
	}

	/// The status code is not checked: a body that does not decode as a
	/// [`TokenResponse`] is the only failure.
	fn decode_response(&self, response: http::Response<Vec<u8>>) -> Result<TokenResponse, Error> {
		if !response.status().is_success() {
			log::warn!("token endpoint answered {}", response.status());
		}

		serde_json::from_slice(response.body()).map_err(Error::token_decode)
	}
}

/// Successful token response.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Access token issued by the identity provider.
	pub access_token: AccessTokenBuf,

	/// Type of the token, `Bearer`.
	pub token_type: String,

	/// Lifetime in seconds of the access token.
	pub expires_in: Option<u64>,

	/// Scope of the access token.
	pub scope: Option<String>,

	/// OpenID Connect ID token (JWT).
	pub id_token: Option<String>,
}

impl<H: HttpClient> SberbankIdClient<H> {
	/// Exchanges an authorization code for an access token.
	pub async fn get_token(&self, code: &Code) -> Result<TokenResponse, Error> {
		log::debug!("exchanging authorization code");

		let config = self.config();
		self.execute(TokenRequest {
			endpoint: config.environment.endpoint_url(Endpoint::Token)?,
			form: TokenForm {
				scope: &config.scope,
				redirect_uri: &config.redirect_uri,
				code,
				client_id: self.client_id(),
				client_secret: &self.credentials().client_secret,
			},
		})
		.await
	}
}
