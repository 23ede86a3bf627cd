//! Sberbank ID client, credentials and error types.
use std::fmt;

use crate::{
	ClientId, ClientIdBuf, Nonce, NonceBuf, State, StateBuf,
	config::Config,
	endpoints::SendRequest,
	transport::HttpClient,
};

mod error;

pub use error::*;

/// Credentials issued to a registered integration.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	pub client_id: ClientIdBuf,
	pub client_secret: String,
}

impl Credentials {
	pub fn new(client_id: ClientIdBuf, client_secret: impl Into<String>) -> Self {
		Self {
			client_id,
			client_secret: client_secret.into(),
		}
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id.as_str())
			.field("client_secret", &"<redacted>")
			.finish()
	}
}

/// Sberbank ID client.
///
/// Holds the transport, the integration credentials and the configuration.
/// The `state` and `nonce` sent with authorization requests are generated
/// once, when the client is created, and reused for every authorization
/// request issued by this instance.
///
/// The client adds no synchronization of its own: calling it from several
/// tasks at once is as safe as the underlying [`HttpClient`].
pub struct SberbankIdClient<H> {
	http_client: H,
	credentials: Credentials,
	config: Config,
	state: StateBuf,
	nonce: NonceBuf,
}

impl<H: HttpClient> SberbankIdClient<H> {
	/// Creates a new client. Does not touch the network.
	///
	/// The transport must not follow redirects: the authorization code is
	/// read from the `Location` header of the authorization response.
	pub fn new(http_client: H, credentials: Credentials, config: Config) -> Self {
		Self {
			http_client,
			credentials,
			config,
			state: StateBuf::new_random(),
			nonce: NonceBuf::new_random(),
		}
	}

	/// Builds `request`, sends it and decodes the response.
	pub(crate) async fn execute<R: SendRequest>(&self, request: R) -> Result<R::Response> {
		let http_request = request.build_request()?;

		if self.config.verbose {
			log::info!(
				"{} {} headers: {:?} body: {}",
				http_request.method(),
				http_request.uri(),
				http_request.headers(),
				String::from_utf8_lossy(http_request.body())
			);
		} else {
			log::debug!("{} {}", http_request.method(), http_request.uri());
		}

		let response = self.http_client.send(http_request).await?;

		if self.config.verbose {
			log::info!(
				"response status: {} headers: {:?} body: {}",
				response.status(),
				response.headers(),
				String::from_utf8_lossy(response.body())
			);
		} else {
			log::debug!("response status: {}", response.status());
		}

		request.decode_response(response)
	}
}

impl<H> SberbankIdClient<H> {
	pub fn http_client(&self) -> &H {
		&self.http_client
	}

	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	pub fn client_id(&self) -> &ClientId {
		self.credentials.client_id.as_client_id()
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// State sent with every authorization request of this client.
	pub fn state(&self) -> &State {
		self.state.as_state()
	}

	/// Nonce sent with every authorization request of this client.
	pub fn nonce(&self) -> &Nonce {
		self.nonce.as_nonce()
	}
}

#[cfg(feature = "reqwest")]
impl SberbankIdClient<reqwest::Client> {
	/// Creates a client backed by a [`reqwest::Client`] that does not follow
	/// redirects.
	pub fn with_reqwest(credentials: Credentials, config: Config) -> Result<Self> {
		Ok(Self::new(
			crate::transport::no_redirect_client()?,
			credentials,
			config,
		))
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::sync::Mutex;

	use iref::uri;

	use crate::{Environment, NONCE_LEN, STATE_LEN};

	use super::*;

	/// Transport returning a canned response and recording the requests it
	/// receives.
	pub struct MockHttpClient {
		response: Mutex<Option<http::Response<Vec<u8>>>>,
		pub requests: Mutex<Vec<http::Request<Vec<u8>>>>,
	}

	impl MockHttpClient {
		pub fn new(response: http::Response<Vec<u8>>) -> Self {
			Self {
				response: Mutex::new(Some(response)),
				requests: Mutex::new(Vec::new()),
			}
		}

		pub fn json(status: u16, body: &str) -> Self {
			Self::new(
				http::Response::builder()
					.status(status)
					.header(http::header::CONTENT_TYPE, "application/json")
					.body(body.as_bytes().to_vec())
					.unwrap(),
			)
		}

		pub fn last_request(&self) -> http::Request<Vec<u8>> {
			self.requests.lock().unwrap().pop().unwrap()
		}
	}

	impl HttpClient for MockHttpClient {
		async fn send(&self, request: http::Request<Vec<u8>>) -> Result<http::Response<Vec<u8>>> {
			self.requests.lock().unwrap().push(request);
			self.response
				.lock()
				.unwrap()
				.take()
				.ok_or_else(|| Error::request("no response left"))
		}
	}

	pub fn test_credentials() -> Credentials {
		Credentials::new(
			ClientIdBuf::new("012345670123abcd0123012345678901".to_owned()).unwrap(),
			"QWERTY",
		)
	}

	pub fn test_config() -> Config {
		Config::new(
			"openid name snils",
			uri!("http://127.0.0.1:8080/login").to_owned(),
		)
	}

	pub fn test_client(http_client: MockHttpClient) -> SberbankIdClient<MockHttpClient> {
		SberbankIdClient::new(http_client, test_credentials(), test_config())
	}

	#[test]
	fn state_and_nonce_have_fixed_lengths() {
		let client = test_client(MockHttpClient::json(200, "{}"));
		assert_eq!(client.state().as_str().len(), STATE_LEN);
		assert_eq!(client.nonce().as_str().len(), NONCE_LEN);
	}

	#[test]
	fn clients_get_distinct_nonces() {
		let a = test_client(MockHttpClient::json(200, "{}"));
		let b = test_client(MockHttpClient::json(200, "{}"));
		assert_ne!(a.nonce().as_str(), b.nonce().as_str());
	}

	#[test]
	fn construction_sends_nothing() {
		let client = test_client(MockHttpClient::json(200, "{}"));
		assert!(client.http_client().requests.lock().unwrap().is_empty());
		assert_eq!(client.config().environment, Environment::Sandbox);
	}

	#[test]
	fn debug_redacts_secret() {
		let debug = format!("{:?}", test_credentials());
		assert!(!debug.contains("QWERTY"));
		assert!(debug.contains("012345670123abcd0123012345678901"));
	}
}
