//! Userinfo endpoint.
use std::ops::Deref;

use http::{Method, header};
use iref::UriBuf;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
	AccessToken, ClientId,
	client::{Error, SberbankIdClient},
	config::Endpoint,
	endpoints::{RQUID, SendRequest, X_IBM_CLIENT_ID, X_INTROSPECT_RQUID, request_builder},
	transport::{APPLICATION_JSON, ContentType, HttpClient, NoContent},
	util::{RQUID_LEN, random_rquid},
};

use super::token::TokenResponse;

/// Personal data of the authenticated user.
///
/// The fields depend on the granted scope (`name`, `snils`, `birthdate`, ...)
/// so the response is kept as an open JSON object.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonData(pub Map<String, Value>);

impl PersonData {
	/// String value of `field`, if present and a string.
	pub fn get_str(&self, field: &str) -> Option<&str> {
		self.0.get(field).and_then(Value::as_str)
	}

	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}

impl Deref for PersonData {
	type Target = Map<String, Value>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Userinfo request.
pub struct UserInfoRequest<'a> {
	pub endpoint: UriBuf,
	pub client_id: &'a ClientId,
	pub access_token: &'a AccessToken,
}

impl SendRequest for UserInfoRequest<'_> {
	type ContentType = NoContent;
	type Response = PersonData;

	fn build_request(&self) -> Result<http::Request<Vec<u8>>, Error> {
		request_builder::<Self::ContentType>(Method::GET, &self.endpoint)
			.header(X_INTROSPECT_RQUID, random_rquid(RQUID_LEN))
			.header(X_IBM_CLIENT_ID, self.client_id.as_str())
			.header(header::AUTHORIZATION, self.access_token.bearer_header())
			.header(header::ACCEPT, APPLICATION_JSON)
			.header(RQUID, random_rquid(RQUID_LEN))
			.body(Self::ContentType::encode(&())?)
			.map_err(Error::request)
	}

	fn decode_response(&self, response: http::Response<Vec<u8>>) -> Result<PersonData, Error> {
		if !response.status().is_success() {
			log::warn!("userinfo endpoint answered {}", response.status());
		}

		serde_json::from_slice(response.body()).map_err(Error::personal_data)
	}
}

impl<H: HttpClient> SberbankIdClient<H> {
	/// Fetches the personal data of the user `token` was issued to.
	pub async fn get_personal_data(&self, token: &TokenResponse) -> Result<PersonData, Error> {
		log::debug!("fetching personal data");

		self.execute(UserInfoRequest {
			endpoint: self.config().environment.endpoint_url(Endpoint::UserInfo)?,
			client_id: self.client_id(),
			access_token: token.access_token.as_access_token(),
		})
		.await
	}
}
