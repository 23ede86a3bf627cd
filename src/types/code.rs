use str_newtype::StrNewType;

use super::all_vschar;

/// Authorization code returned in the `Location` header of the authorization
/// response and exchanged at the token endpoint (borrowed).
///
/// # Grammar
///
/// ```abnf
/// code = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(CodeBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct Code(str);

impl Code {
	/// Validates that the given string is a well-formed authorization code.
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	/// Validates that the given byte slice is a well-formed authorization code.
	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		all_vschar(bytes, 1)
	}
}
