//! Request building and response decoding for each endpoint of the flow.
//!
//! - [`authorization`]: user login, returns the authorization code.
//! - [`token`]: exchanges the code for an access token.
//! - [`userinfo`]: personal data of the authenticated user.
use http::{HeaderName, Method, header};
use iref::Uri;

use crate::{client::Error, transport::ContentType};

pub mod authorization;
pub mod token;
pub mod userinfo;

/// Client identifier header of the API gateway.
pub const X_IBM_CLIENT_ID: HeaderName = HeaderName::from_static("x-ibm-client-id");

/// Client secret header of the API gateway.
pub const X_IBM_CLIENT_SECRET: HeaderName = HeaderName::from_static("x-ibm-client-secret");

/// Request tracking identifier.
pub const RQUID: HeaderName = HeaderName::from_static("rquid");

/// Request tracking identifier of the token introspection performed by the
/// userinfo endpoint.
pub const X_INTROSPECT_RQUID: HeaderName = HeaderName::from_static("x-introspect-rquid");

/// A request of the flow: how it is put on the wire and how its response is
/// read back.
pub trait SendRequest {
	/// Encoding of the request body.
	type ContentType: ContentType;

	/// Decoded response.
	type Response;

	fn build_request(&self) -> Result<http::Request<Vec<u8>>, Error>;

	fn decode_response(&self, response: http::Response<Vec<u8>>)
	-> Result<Self::Response, Error>;
}

/// Starts a request to `uri` with the `Content-Type` of `C`, if any.
fn request_builder<C: ContentType>(method: Method, uri: &Uri) -> http::request::Builder {
	let builder = http::Request::builder().method(method).uri(uri.as_str());

	match C::VALUE {
		Some(content_type) => builder.header(header::CONTENT_TYPE, content_type),
		None => builder,
	}
}
