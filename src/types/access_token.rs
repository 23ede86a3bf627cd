use str_newtype::StrNewType;

use super::all_vschar;

/// Access token issued by the token endpoint (borrowed).
///
/// Sent as `Authorization: Bearer <token>` to the userinfo endpoint.
///
/// # Grammar
///
/// ```abnf
/// access-token = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(AccessTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct AccessToken(str);

impl AccessToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		all_vschar(bytes, 1)
	}

	/// Value of the `Authorization` header carrying this token.
	pub fn bearer_header(&self) -> String {
		format!("Bearer {}", self.as_str())
	}
}
