//! `gloo-net` implementation of the session transport.
//!
//! Browser (csr): real `fetch` calls.
//! Elsewhere: every request fails with [`HttpError::Transport`], which the
//! interceptor chain treats like any other network failure.

#![allow(clippy::unused_async)]

#[cfg(all(test, not(feature = "csr")))]
#[path = "transport_test.rs"]
mod transport_test;

use admin_session::{HttpError, HttpRequest, HttpResponse, Transport};

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "not available outside the browser";

/// Transport backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        #[cfg(feature = "csr")]
        {
            use admin_session::Method;
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            if let Some(authorization) = request.authorization() {
                builder = builder.header("Authorization", &authorization);
            }
            let outgoing = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| HttpError::Transport(e.to_string()))?;

            let resp = outgoing.send().await.map_err(|e| HttpError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| HttpError::Decode(e.to_string()))?;
            admin_session::transport::classify(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(HttpError::Transport(UNAVAILABLE.to_owned()))
        }
    }
}
