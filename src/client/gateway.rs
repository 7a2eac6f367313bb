//! Token gateway: decides whether the cached token is usable and refreshes it otherwise.

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	client::{Client, Query},
	http::HttpTransport,
	oauth,
};

/// Query parameter every API request carries the access token under.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Injects a valid access token into `query`, fetching and saving a new one when needed.
	///
	/// The token fetcher only runs when the store holds no token, an empty token, or one whose
	/// expiry is not strictly after the current instant. Fetch and store failures propagate
	/// unchanged and nothing is saved.
	pub async fn ensure_token(&self, query: &mut Query) -> Result<()> {
		self.ensure_token_at(query, OffsetDateTime::now_utc()).await
	}

	pub(crate) async fn ensure_token_at(&self, query: &mut Query, now: OffsetDateTime) -> Result<()> {
		let cached = self.store.load().await?.filter(|token| token.is_valid_at(now));
		let token = match cached {
			Some(token) => token,
			None => {
				let code = self.code.read().clone();
				let fresh = oauth::fetch_token(
					self.http_client.as_ref(),
					&self.config,
					code.as_ref().map(TokenSecret::expose),
				)
				.await?;

				self.store.save(fresh.clone()).await?;

				fresh
			},
		};

		query.insert(ACCESS_TOKEN_PARAM.into(), token.access_token.expose().to_owned());

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// crates.io
	use parking_lot::Mutex;
	use time::macros;
	// self
	use super::*;
	use crate::{
		auth::StoredToken,
		config::ClientConfig,
		http::{HttpRequest, HttpResponse, TransportFuture},
		store::FnStore,
	};

	const NOW: OffsetDateTime = macros::datetime!(2025-06-01 12:00 UTC);

	struct ScriptedTransport {
		requests: Mutex<Vec<HttpRequest>>,
		body: &'static str,
	}
	impl ScriptedTransport {
		fn answering(body: &'static str) -> Self {
			Self { requests: Mutex::new(Vec::new()), body }
		}

		fn calls(&self) -> usize {
			self.requests.lock().len()
		}
	}
	impl HttpTransport for ScriptedTransport {
		fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
			self.requests.lock().push(request);

			let body = self.body.as_bytes().to_vec();

			Box::pin(async move { Ok(HttpResponse { status: 200, body }) })
		}
	}

	struct Harness {
		client: Client<ScriptedTransport>,
		transport: Arc<ScriptedTransport>,
		saved: Arc<Mutex<Vec<StoredToken>>>,
		loads: Arc<AtomicUsize>,
	}

	fn harness(cached: Option<StoredToken>, token_body: &'static str) -> Harness {
		let config = ClientConfig::builder("client", "secret")
			.build()
			.expect("Test configuration should build.");
		let transport = Arc::new(ScriptedTransport::answering(token_body));
		let saved = <Arc<Mutex<Vec<StoredToken>>>>::default();
		let loads = <Arc<AtomicUsize>>::default();
		let store = {
			let saved = saved.clone();
			let loads = loads.clone();

			FnStore::new(
				move || {
					loads.fetch_add(1, Ordering::SeqCst);

					cached.clone()
				},
				move |token| saved.lock().push(token),
			)
		};
		let client = Client::with_http_client(config, transport.clone()).with_store(Arc::new(store));

		Harness { client, transport, saved, loads }
	}

	#[tokio::test]
	async fn valid_cached_token_skips_fetch() {
		let cached = StoredToken::new("cached", NOW + Duration::seconds(1));
		let h = harness(Some(cached), "{\"access_token\":\"fresh\",\"expires_in\":3600}");
		let mut query = Query::new();

		h.client.ensure_token_at(&mut query, NOW).await.expect("Cached token should be reused.");

		assert_eq!(query.get(ACCESS_TOKEN_PARAM).map(String::as_str), Some("cached"));
		assert_eq!(h.transport.calls(), 0);
		assert_eq!(h.loads.load(Ordering::SeqCst), 1);
		assert!(h.saved.lock().is_empty());
	}

	#[tokio::test]
	async fn token_expiring_now_is_refreshed_once() {
		let cached = StoredToken::new("stale", NOW);
		let h = harness(Some(cached), "{\"access_token\":\"fresh\",\"expires_in\":3600}");
		let mut query = Query::new();
		let before = OffsetDateTime::now_utc();

		h.client.ensure_token_at(&mut query, NOW).await.expect("Refresh should succeed.");

		let saved = h.saved.lock().clone();

		assert_eq!(query.get(ACCESS_TOKEN_PARAM).map(String::as_str), Some("fresh"));
		assert_eq!(h.transport.calls(), 1);
		assert_eq!(saved.len(), 1);
		assert_eq!(saved[0].access_token.expose(), "fresh");
		assert!(saved[0].expires_at >= before + Duration::seconds(3600));
		assert!(saved[0].expires_at <= OffsetDateTime::now_utc() + Duration::seconds(3600));
	}

	#[tokio::test]
	async fn empty_or_missing_token_triggers_fetch() {
		for cached in [None, Some(StoredToken::new("", NOW + Duration::hours(1)))] {
			let h = harness(cached, "{\"access_token\":\"fresh\",\"expires_in\":60}");
			let mut query = Query::new();

			h.client.ensure_token_at(&mut query, NOW).await.expect("Fetch should succeed.");

			assert_eq!(h.transport.calls(), 1);
			assert_eq!(h.saved.lock().len(), 1);
		}
	}

	#[tokio::test]
	async fn fetch_failure_saves_nothing() {
		let h = harness(
			None,
			"{\"error\":\"client_auth_fail\",\"error_description\":\"Client authentication failed\"}",
		);
		let mut query = Query::new();
		let err = h
			.client
			.ensure_token_at(&mut query, NOW)
			.await
			.expect_err("Token endpoint error should propagate.");

		assert_eq!(err.code(), Some("client_auth_fail"));
		assert!(h.saved.lock().is_empty());
		assert!(!query.contains_key(ACCESS_TOKEN_PARAM));
	}

	#[tokio::test]
	async fn oversized_lifetime_is_cached_without_overflow() {
		let h = harness(None, "{\"access_token\":\"a\",\"expires_in\":9223372036854775807}");
		let mut query = Query::new();

		h.client.ensure_token_at(&mut query, NOW).await.expect("Fetch should succeed.");

		let saved = h.saved.lock().clone();

		assert_eq!(query.get(ACCESS_TOKEN_PARAM).map(String::as_str), Some("a"));
		assert_eq!(saved.len(), 1);
		assert_eq!(saved[0].expires_at, time::PrimitiveDateTime::MAX.assume_utc());
	}

	#[tokio::test]
	async fn fetch_posts_to_token_endpoint() {
		let h = harness(None, "{\"access_token\":\"fresh\",\"expires_in\":60}");

		h.client.ensure_token(&mut Query::new()).await.expect("Fetch should succeed.");

		let requests = h.transport.requests.lock();
		let request = &requests[0];

		assert_eq!(request.method, crate::http::Method::Post);
		assert_eq!(request.url.as_str(), "https://playlyfe.com/auth/token");
		assert_eq!(request.endpoint, "token");
	}
}
