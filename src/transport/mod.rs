//! HTTP transport layer and content type encoding.
use http::HeaderValue;
use serde::Serialize;

use crate::client::Error;

mod client;

pub use client::*;

/// `Content-Type: application/json` header value.
pub const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// `Content-Type: application/x-www-form-urlencoded` header value.
pub const APPLICATION_X_WWW_FORM_URLENCODED: HeaderValue =
	HeaderValue::from_static("application/x-www-form-urlencoded");

/// Trait for encoding request bodies with a specific content type.
pub trait ContentType {
	/// The `Content-Type` header value, or `None` for requests with no body.
	const VALUE: Option<HeaderValue>;

	/// Serializes the given value into a byte vector using this content type's
	/// encoding.
	fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, Error>;
}

/// No request body.
pub struct NoContent;

impl ContentType for NoContent {
	const VALUE: Option<HeaderValue> = None;

	fn encode<T: Serialize>(_value: &T) -> Result<Vec<u8>, Error> {
		Ok(Vec::new())
	}
}

/// JSON (`application/json`) content type encoding.
pub struct Json;

impl ContentType for Json {
	const VALUE: Option<HeaderValue> = Some(APPLICATION_JSON);

	fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
		serde_json::to_vec(value).map_err(Error::request)
	}
}

/// URL-encoded form (`application/x-www-form-urlencoded`) content type
/// encoding.
pub struct WwwFormUrlEncoded;

impl ContentType for WwwFormUrlEncoded {
	const VALUE: Option<HeaderValue> = Some(APPLICATION_X_WWW_FORM_URLENCODED);

	fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
		log::debug!("serializing {}", std::any::type_name_of_val(value));
		serde_html_form::to_string(value)
			.map(String::into_bytes)
			.map_err(Error::request)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;

	#[test]
	fn json_encoding() {
		let body = Json::encode(&BTreeMap::from([("login", "Q0002")])).unwrap();
		assert_eq!(body, br#"{"login":"Q0002"}"#);
	}

	#[test]
	fn form_encoding() {
		let body =
			WwwFormUrlEncoded::encode(&BTreeMap::from([("grant_type", "authorization_code")]))
				.unwrap();
		assert_eq!(body, b"grant_type=authorization_code");
	}

	#[test]
	fn no_content_is_empty() {
		assert!(NoContent::encode(&"ignored").unwrap().is_empty());
		assert!(NoContent::VALUE.is_none());
	}
}
