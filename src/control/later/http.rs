//! HTTP data tasks.
//!
//! [`DataTask`] wraps a `reqwest` request as a [`Later`]. Every run sends the
//! request again and delivers the fully buffered response, or the error
//! that prevented it. Non-success statuses are still responses; use
//! [`HttpResponse::error_for_status`] to treat them as errors.
//!
//! ```rust,no_run
//! use fnkit::control::later::http::{DataTask, HttpResponse};
//! use fnkit::control::later::{Later, TryLater};
//!
//! # fn main() -> Result<(), fnkit::control::later::http::HttpError> {
//! let client = reqwest::Client::new();
//! let page = DataTask::get(&client, "https://example.com/")?
//!     .try_map(HttpResponse::error_for_status)
//!     .map_ok(|response| response.body().len());
//!
//! let length = page.wait().expect("continuation dropped")?;
//! println!("{length} bytes");
//! # Ok(())
//! # }
//! ```

use reqwest::header::HeaderMap;
use reqwest::{Client, Request, StatusCode};
use tokio::runtime::Handle;

use super::{Continuation, Later, runtime};

/// Why a data task produced no usable response.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request could not be built, sent or read.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request body is a stream and cannot be sent a second time.
    #[error("request body cannot be replayed")]
    UnclonableBody,

    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(StatusCode),
}

/// A fully buffered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl HttpResponse {
    /// Builds a response from its parts.
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// The response status.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response, returning the body.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// The body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.body)
    }

    /// Turns a client or server error status into [`HttpError::Status`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Status`] for 4xx and 5xx statuses.
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.status.is_client_error() || self.status.is_server_error() {
            Err(HttpError::Status(self.status))
        } else {
            Ok(self)
        }
    }
}

/// A replayable HTTP request, run on a tokio runtime.
#[derive(Debug)]
pub struct DataTask {
    client: Client,
    request: Request,
    handle: Handle,
}

impl DataTask {
    /// Wraps `request`, to be sent with `client` on the current or shared
    /// runtime.
    pub fn new(client: Client, request: Request) -> Self {
        Self {
            client,
            request,
            handle: runtime::handle(),
        }
    }

    /// Builds a `GET` task for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Request`] if `url` cannot be parsed.
    pub fn get(client: &Client, url: &str) -> Result<Self, HttpError> {
        let request = client.get(url).build()?;
        Ok(Self::new(client.clone(), request))
    }

    /// Sends the request on the runtime behind `handle` instead.
    #[must_use]
    pub fn with_handle(self, handle: Handle) -> Self {
        Self { handle, ..self }
    }

    /// The wrapped request.
    pub const fn request(&self) -> &Request {
        &self.request
    }
}

impl Later for DataTask {
    type Output = Result<HttpResponse, HttpError>;

    fn run(&self, continuation: Continuation<Self::Output>) {
        let Some(request) = self.request.try_clone() else {
            tracing::debug!(url = %self.request.url(), "data task body cannot be replayed");
            continuation(Err(HttpError::UnclonableBody));
            return;
        };
        let client = self.client.clone();
        tracing::trace!(method = %request.method(), url = %request.url(), "starting data task");
        drop(self.handle.spawn(async move {
            continuation(fetch(&client, request).await);
        }));
    }
}

async fn fetch(client: &Client, request: Request) -> Result<HttpResponse, HttpError> {
    let url = request.url().clone();
    let response = client.execute(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();
    tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "data task completed");
    Ok(HttpResponse::new(status, headers, body))
}
