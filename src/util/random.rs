use rand::{RngExt, rng};

/// Characters of a request tracking identifier (`RqUID`).
pub const RQUID_CHARSET: &[u8] = b"abcdefABCDEF0123456789";

/// Length of a request tracking identifier (`RqUID`).
pub const RQUID_LEN: usize = 32;

/// Characters of generated `state` and `nonce` values.
pub const STATE_CHARSET: &[u8] = b"abcdefghiklmnoprstxyzABCDEFGHIKLMNOPRSTXYZ0123456789_-";

/// Draws `len` characters uniformly from `charset`.
///
/// Uses the thread-local generator. The result is not suitable as a secret.
fn random_from(charset: &[u8], len: usize) -> String {
	let mut rng = rng();
	(0..len)
		.map(|_| charset[rng.random_range(0..charset.len())] as char)
		.collect()
}

/// Generates a request tracking identifier of `len` characters from
/// [`RQUID_CHARSET`].
pub fn random_rquid(len: usize) -> String {
	random_from(RQUID_CHARSET, len)
}

/// Generates a random string of `len` characters from [`STATE_CHARSET`].
pub fn random_string(len: usize) -> String {
	random_from(STATE_CHARSET, len)
}
