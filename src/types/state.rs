use str_newtype::StrNewType;

use crate::util::random_string;

use super::all_vschar;

/// Length of a generated [`StateBuf`].
pub const STATE_LEN: usize = 8;

/// Length of a generated [`NonceBuf`].
pub const NONCE_LEN: usize = 16;

/// Opaque state sent with the authorization request (borrowed).
///
/// The identity provider echoes it back on the redirect so the client can
/// bind the callback to the request it issued.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-10.12>
///
/// # Grammar
///
/// ```abnf
/// state = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(StateBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct State(str);

impl State {
	/// Validates that the given string is a well-formed state value.
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	/// Validates that the given byte slice is a well-formed state value.
	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		all_vschar(bytes, 1)
	}
}

impl StateBuf {
	/// Generates a new random state of [`STATE_LEN`] characters.
	///
	/// Not cryptographically secure.
	pub fn new_random() -> Self {
		// SAFETY: `random_string` only yields VSCHAR bytes and `STATE_LEN > 0`.
		unsafe { Self::new_unchecked(random_string(STATE_LEN)) }
	}
}

/// OpenID Connect nonce sent with the authorization request (borrowed).
///
/// # Grammar
///
/// ```abnf
/// nonce = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(NonceBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct Nonce(str);

impl Nonce {
	/// Validates that the given string is a well-formed nonce.
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	/// Validates that the given byte slice is a well-formed nonce.
	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		all_vschar(bytes, 1)
	}
}

impl NonceBuf {
	/// Generates a new random nonce of [`NONCE_LEN`] characters.
	///
	/// Not cryptographically secure.
	pub fn new_random() -> Self {
		// SAFETY: `random_string` only yields VSCHAR bytes and `NONCE_LEN > 0`.
		unsafe { Self::new_unchecked(random_string(NONCE_LEN)) }
	}
}

#[cfg(test)]
mod tests {
	use crate::util::STATE_CHARSET;

	use super::*;

	#[test]
	fn random_state_shape() {
		let state = StateBuf::new_random();
		assert_eq!(state.as_str().len(), STATE_LEN);
		assert!(state.as_str().bytes().all(|b| STATE_CHARSET.contains(&b)));
	}

	#[test]
	fn random_nonce_shape() {
		let nonce = NonceBuf::new_random();
		assert_eq!(nonce.as_str().len(), NONCE_LEN);
		assert!(nonce.as_str().bytes().all(|b| STATE_CHARSET.contains(&b)));
	}

	#[test]
	fn empty_state_is_invalid() {
		assert!(State::new("").is_err());
		assert!(Nonce::new("").is_err());
	}
}
