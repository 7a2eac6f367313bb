// self
use crate::{_prelude::*, obs::CallTarget};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used around every outbound call.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Opens a span for a call against `target` on API `version`.
	pub fn new(target: CallTarget<'_>, version: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"playlyfe.call",
				kind = target.kind().as_str(),
				method = target.method().as_str(),
				resource = target.resource(),
				version,
				error_code = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (target, version);

			Self {}
		}
	}

	/// Records the service or `invalid_body` code of a failed call on the span.
	pub fn record_error(&self, error: &Error) {
		#[cfg(feature = "tracing")]
		{
			if let Some(code) = error.code() {
				self.span.record("error_code", code);
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = error;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
