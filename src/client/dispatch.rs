//! Request dispatcher and the per-verb façades built on it.

// self
use crate::{
	_prelude::*,
	client::{ApiRequest, Client, response},
	http::{HttpRequest, HttpTransport, Method},
	obs::{self, CallKind, CallOutcome, CallSpan, CallTarget},
};

impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Dispatches `request` and decodes the JSON response into `T`.
	pub async fn api<T>(&self, request: ApiRequest) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.dispatch(request, |body| Ok(response::decode_json(&body)?)).await
	}

	/// Dispatches `request` and returns the response bytes uninterpreted (images, exports).
	///
	/// Bodies carrying an `"error"` marker are still classified as service or decode errors.
	pub async fn api_raw(&self, request: ApiRequest) -> Result<Vec<u8>> {
		self.dispatch(request, Ok).await
	}

	/// Issues a `GET` request.
	pub async fn get<T>(
		&self,
		route: &str,
		query: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.api(ApiRequest::new(Method::Get, route).queries(query)).await
	}

	/// Issues a `GET` request and returns the raw response bytes.
	pub async fn get_raw(
		&self,
		route: &str,
		query: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
	) -> Result<Vec<u8>> {
		self.api_raw(ApiRequest::new(Method::Get, route).queries(query)).await
	}

	/// Issues a `POST` request with a JSON body.
	pub async fn post<T, B>(
		&self,
		route: &str,
		query: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
		body: &B,
	) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.api(ApiRequest::new(Method::Post, route).queries(query).json(body)?).await
	}

	/// Issues a `PATCH` request with a JSON body.
	pub async fn patch<T, B>(
		&self,
		route: &str,
		query: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
		body: &B,
	) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.api(ApiRequest::new(Method::Patch, route).queries(query).json(body)?).await
	}

	/// Issues a `PUT` request with a JSON body.
	pub async fn put<T, B>(
		&self,
		route: &str,
		query: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
		body: &B,
	) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.api(ApiRequest::new(Method::Put, route).queries(query).json(body)?).await
	}

	/// Issues a `DELETE` request.
	pub async fn delete<T>(
		&self,
		route: &str,
		query: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.api(ApiRequest::new(Method::Delete, route).queries(query)).await
	}

	async fn dispatch<T, F>(&self, mut request: ApiRequest, decode: F) -> Result<T>
	where
		F: FnOnce(Vec<u8>) -> Result<T>,
	{
		const KIND: CallKind = CallKind::ApiRequest;

		let span = CallSpan::new(
			CallTarget::Route { method: request.method, route: &request.route },
			&self.config.version,
		);

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				self.ensure_token(&mut request.query).await?;

				let url = request.url(&self.config.api_endpoint)?;
				let response = self
					.http_client
					.execute(HttpRequest {
						method: request.method,
						url,
						body: request.body,
						endpoint: "api",
					})
					.await?;

				response::check_api_error(&response.body)?;

				decode(response.body)
			})
			.await;

		if let Err(e) = &result {
			span.record_error(e);
		}

		obs::record_call_outcome(KIND, CallOutcome::of(&result));

		result
	}
}

