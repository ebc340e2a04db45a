//! Wire transports behind `ApiClient`.
//!
//! Client-side (hydrate): `BrowserTransport` issues `fetch` calls through
//! `gloo-net`, races them against the request timeout, and aborts the fetch
//! when the timer wins.
//! Server-side (SSR): `OfflineTransport` fails every call, since the REST
//! API is only reached from the browser.

#![allow(async_fn_in_trait)]

use super::error::TransportError;
use super::request::{ApiRequest, RawResponse};

/// Sends one request and returns whatever status came back.
///
/// Non-2xx statuses are not errors at this layer.
pub trait Transport {
    async fn send(&self, base_url: &str, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Transport for server rendering: every call fails as a network error.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    async fn send(&self, _base_url: &str, _request: ApiRequest) -> Result<RawResponse, TransportError> {
        Err(TransportError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserTransport;

/// Transport used by views in the current build.
#[cfg(feature = "hydrate")]
pub type DefaultTransport = BrowserTransport;
#[cfg(not(feature = "hydrate"))]
pub type DefaultTransport = OfflineTransport;

#[cfg(feature = "hydrate")]
mod browser {
    use futures::future::{Either, select};
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};
    use wasm_bindgen::JsValue;

    use super::Transport;
    use crate::net::error::TransportError;
    use crate::net::request::{ApiRequest, FormPart, Method, RawResponse, RequestBody};
    use crate::util::download::blob_from_bytes;

    /// `fetch`-backed transport for the hydrated client.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserTransport;

    fn js_error(err: JsValue) -> TransportError {
        TransportError::Network(format!("{err:?}"))
    }

    fn http_method(method: Method) -> HttpMethod {
        match method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
        }
    }

    fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, TransportError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        for part in parts {
            match part {
                FormPart::Text { name, value } => form.append_with_str(name, value).map_err(js_error)?,
                FormPart::File { name, file } => {
                    let blob = blob_from_bytes(&file.bytes, &file.mime_type).map_err(js_error)?;
                    form.append_with_blob_and_filename(name, &blob, &file.file_name)
                        .map_err(js_error)?;
                }
            }
        }
        Ok(form)
    }

    impl Transport for BrowserTransport {
        async fn send(&self, base_url: &str, request: ApiRequest) -> Result<RawResponse, TransportError> {
            let url = request.url(base_url);
            let controller = web_sys::AbortController::new().map_err(js_error)?;
            let signal = controller.signal();

            let mut builder = RequestBuilder::new(&url)
                .method(http_method(request.method))
                .abort_signal(Some(&signal));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            // The browser sets the multipart boundary itself.
            let built = match request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(parts) => builder.body(form_data(&parts)?),
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let exchange = Box::pin(async move {
                let response = built
                    .send()
                    .await
                    .map_err(|e| TransportError::Network(e.to_string()))?;
                let status = response.status();
                let body = response
                    .binary()
                    .await
                    .map_err(|e| TransportError::Network(e.to_string()))?;
                Ok(RawResponse { status, body })
            });
            let timer = Box::pin(gloo_timers::future::sleep(request.timeout));

            match select(exchange, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => {
                    controller.abort();
                    Err(TransportError::Timeout)
                }
            }
        }
    }
}
