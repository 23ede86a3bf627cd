//! Validated string types exchanged with the identity provider.
//!
//! All types come in borrowed/owned pairs (e.g. [`AccessToken`] /
//! [`AccessTokenBuf`]) following the same pattern as [`str`] / [`String`].
mod access_token;
mod client_id;
mod code;
mod state;

pub use access_token::*;
pub use client_id::*;
pub use code::*;
pub use state::*;

/// Returns `true` if the byte is a VSCHAR (visible ASCII character plus
/// space), i.e. in the range `0x20..=0x7E`.
const fn is_vschar(c: u8) -> bool {
	c >= 0x20 && c <= 0x7e
}

/// Returns `true` if every byte of `bytes` is a VSCHAR and there are at least
/// `min_len` of them.
const fn all_vschar(bytes: &[u8], min_len: usize) -> bool {
	let mut i = 0;

	while i < bytes.len() {
		if !is_vschar(bytes[i]) {
			return false;
		}

		i += 1
	}

	i >= min_len
}
