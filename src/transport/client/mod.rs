use crate::client::Error;

#[cfg(feature = "reqwest")]
mod reqwest;

#[cfg(feature = "reqwest")]
pub use self::reqwest::no_redirect_client;

/// Sends a single HTTP request and returns the raw response.
///
/// Implementations must not follow redirects.
pub trait HttpClient {
	#[allow(async_fn_in_trait)]
	async fn send(&self, request: http::Request<Vec<u8>>)
	-> Result<http::Response<Vec<u8>>, Error>;
}

impl<T> HttpClient for &T
where
	T: HttpClient,
{
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, Error> {
		T::send(*self, request).await
	}
}
