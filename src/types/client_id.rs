use str_newtype::StrNewType;

use super::all_vschar;

/// Client identifier issued by Sberbank ID to a registered integration
/// (borrowed).
///
/// The identifier is sent both as the `client_id` parameter and in the
/// `X-IBM-Client-ID` header, so it must be representable as a header value.
///
/// # Grammar
///
/// ```abnf
/// client_id = *VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ClientIdBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ClientId(str);

impl ClientId {
	/// Validates that the given string is a well-formed client identifier.
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	/// Validates that the given byte slice is a well-formed client identifier.
	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		all_vschar(bytes, 0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn valid_client_id() {
		assert!(ClientId::new("012345670123abcd0123012345678901").is_ok());
		assert!(ClientId::new("a").is_ok());
	}

	#[test]
	fn empty_client_id_is_valid() {
		assert!(ClientId::new("").is_ok());
	}

	#[test]
	fn client_id_rejects_control_chars() {
		assert!(ClientId::new("abc\r\nX-Injected: 1").is_err());
		assert!(ClientId::new("abc\x7f").is_err());
	}

	#[test]
	fn client_id_buf_roundtrips_as_str() {
		let id = ClientIdBuf::new("my-client".to_owned()).unwrap();
		assert_eq!(id.as_str(), "my-client");
	}
}
