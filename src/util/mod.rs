//! URI query string utilities and random identifiers.
use iref::{
	UriBuf, UriRefBuf,
	uri::{Query, QueryBuf},
};
use serde::Serialize;

use crate::client::Error;

mod random;

pub use random::*;

/// Encodes `value` as an `application/x-www-form-urlencoded` query string.
///
/// `value` is typically a string-to-string map or a flat struct of string
/// fields. Key order follows the serialization order of `value`, so a
/// [`BTreeMap`](std::collections::BTreeMap) yields sorted keys.
pub fn build_query<T: Serialize>(value: T) -> Result<String, Error> {
	serde_html_form::to_string(value).map_err(Error::request)
}

/// Extends the query parameters of a URI by serializing `value` as
/// `application/x-www-form-urlencoded` and appending the result.
///
/// Existing query parameters on the URI are preserved.
pub fn extend_uri_query<T: Serialize>(uri: &mut UriBuf, value: T) -> Result<(), Error> {
	let other = QueryBuf::new(build_query(value)?.into_bytes()).map_err(|_| {
		Error::request("serialized parameters are not a valid URI query")
	})?;

	let query = concat_query(
		uri.query().map(ToOwned::to_owned).unwrap_or_default(),
		&other,
	)?;

	uri.set_query(Some(&query));
	Ok(())
}

/// Concatenates two query strings with `&` as separator.
///
/// If either query is empty, the other is returned as-is without a
/// separator.
pub fn concat_query(query: QueryBuf, other: &Query) -> Result<QueryBuf, Error> {
	let mut query = query.into_string();

	if !query.is_empty() && !other.is_empty() {
		query.push('&')
	}

	query.push_str(other.as_str());

	QueryBuf::new(query.into_bytes())
		.map_err(|_| Error::request("concatenated query is not a valid URI query"))
}

/// Returns the first value of the `key` query parameter of `url`.
///
/// `url` may be absolute or relative. Returns `Ok(None)` when the URL has no
/// query or the query has no such key, and an error when `url` is not a URI
/// reference.
pub fn query_param(url: &str, key: &str) -> Result<Option<String>, Error> {
	let url = UriRefBuf::new(url.as_bytes().to_vec())
		.map_err(|_| Error::response(format!("malformed URL `{url}`")))?;

	let Some(query) = url.query() else {
		return Ok(None);
	};

	let pairs: Vec<(String, String)> =
		serde_html_form::from_str(query.as_str()).map_err(Error::response)?;

	Ok(pairs
		.into_iter()
		.find_map(|(k, v)| (k == key).then_some(v)))
}
