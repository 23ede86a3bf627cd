/// Errors returned by [`SberbankIdClient`](super::SberbankIdClient) and the
/// helpers of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown environment: `{0}`")]
	InvalidEnvironment(String),

	#[error("invalid URL: `{0}`")]
	InvalidUrl(String),

	#[error("unable to send request: {0}")]
	Request(String),

	#[error("unable to receive response: {0}")]
	Response(String),

	/// The authorization endpoint did not answer `200 OK` with a `Location`
	/// header carrying the authorization code.
	#[error("auth request failed")]
	AuthRequestFailed,

	#[error("unable to decode token response: {0}")]
	TokenDecode(String),

	#[error("failed to fetch personal data: {0}")]
	PersonalData(String),
}

impl Error {
	pub fn invalid_environment(value: impl ToString) -> Self {
		let value = value.to_string();
		log::error!("unknown environment: {value}");
		Self::InvalidEnvironment(value)
	}

	pub fn invalid_url(url: impl ToString) -> Self {
		let url = url.to_string();
		log::error!("invalid URL: {url}");
		Self::InvalidUrl(url)
	}

	pub fn request(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("request error: {msg}");
		Self::Request(msg)
	}

	pub fn response(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("response error: {msg}");
		Self::Response(msg)
	}

	pub fn auth_request_failed(reason: &str) -> Self {
		log::error!("auth request failed: {reason}");
		Self::AuthRequestFailed
	}

	pub fn token_decode(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("token response decoding failed: {msg}");
		Self::TokenDecode(msg)
	}

	pub fn personal_data(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("personal data decoding failed: {msg}");
		Self::PersonalData(msg)
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
