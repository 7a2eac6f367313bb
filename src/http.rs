//! Transport primitives for token exchanges and resource API calls.
//!
//! The module exposes [`HttpTransport`] alongside the minimal [`HttpRequest`] and
//! [`HttpResponse`] shapes so downstream crates can plug in their own HTTP stack. The client
//! never inspects status codes to classify responses; it only needs the raw body bytes.

// self
use crate::{_prelude::*, error::TransportError};

/// Future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// HTTP verbs issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
	/// `PATCH`.
	Patch,
	/// `PUT`.
	Put,
	/// `DELETE`.
	Delete,
	/// `HEAD`.
	Head,
}
impl Method {
	/// Maps a verb string onto a method.
	///
	/// Unrecognized verbs fall back to [`Method::Head`], matching the behavior existing
	/// integrations were built against.
	pub fn from_verb(verb: &str) -> Self {
		match verb {
			"GET" => Self::Get,
			"POST" => Self::Post,
			"PATCH" => Self::Patch,
			"PUT" => Self::Put,
			"DELETE" => Self::Delete,
			_ => Self::Head,
		}
	}

	/// Returns the canonical upper-case verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Patch => "PATCH",
			Self::Put => "PUT",
			Self::Delete => "DELETE",
			Self::Head => "HEAD",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
#[cfg(feature = "reqwest")]
impl From<Method> for reqwest::Method {
	fn from(method: Method) -> Self {
		match method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Patch => reqwest::Method::PATCH,
			Method::Put => reqwest::Method::PUT,
			Method::Delete => reqwest::Method::DELETE,
			Method::Head => reqwest::Method::HEAD,
		}
	}
}

/// Outbound request handed to a transport.
#[derive(Clone, Debug)]
pub struct HttpRequest {
	/// Verb to issue.
	pub method: Method,
	/// Fully-formed URL including the query string.
	pub url: Url,
	/// JSON body; transports must send `Content-Type: application/json` when present.
	pub body: Option<Vec<u8>>,
	/// Label identifying which endpoint family the request targets (`token` or `api`).
	pub endpoint: &'static str,
}

/// Response returned by a transport.
#[derive(Clone, Debug, Default)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw body bytes.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP transports capable of executing client requests.
///
/// The trait is the client's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so a single transport can be shared between clients, and the
/// futures they return must be `Send`. No timeout is applied by the client; whatever the
/// transport enforces applies.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes the request and returns the response body regardless of status code.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let HttpRequest { method, url, body, endpoint } = request;
			let mut builder = client.request(method.into(), url);

			if let Some(body) = body {
				builder = builder
					.header(reqwest::header::CONTENT_TYPE, "application/json")
					.body(body);
			}

			let response =
				builder.send().await.map_err(|e| TransportError::network(endpoint, e))?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(|e| TransportError::network(endpoint, e))?;

			Ok(HttpResponse { status, body: body.to_vec() })
		})
	}
}
