//! The response-sink handed to handlers, plus a buffered implementation.
//!
//! baton never wraps the sink it is given. [`Mux::serve`](crate::Mux::serve)
//! passes the transport's [`ResponseWriter`] straight through to every
//! handler in the chain.

use std::io;

use bytes::{Bytes, BytesMut};
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{HeaderMap, StatusCode};
use http_body_util::Full;

// ── ContentType ───────────────────────────────────────────────────────────────

/// Common content-type values for use with [`ResponseWriter::send`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentType {
    Csv,          // text/csv
    EventStream,  // text/event-stream  (SSE)
    FormData,     // application/x-www-form-urlencoded
    Html,         // text/html; charset=utf-8
    Json,         // application/json
    MsgPack,      // application/msgpack
    OctetStream,  // application/octet-stream
    Pdf,          // application/pdf
    Text,         // text/plain; charset=utf-8
    Xml,          // application/xml
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv         => "text/csv",
            Self::EventStream => "text/event-stream",
            Self::FormData    => "application/x-www-form-urlencoded",
            Self::Html        => "text/html; charset=utf-8",
            Self::Json        => "application/json",
            Self::MsgPack     => "application/msgpack",
            Self::OctetStream => "application/octet-stream",
            Self::Pdf         => "application/pdf",
            Self::Text        => "text/plain; charset=utf-8",
            Self::Xml         => "application/xml",
        }
    }
}

// ── ResponseWriter ────────────────────────────────────────────────────────────

/// Write surface for one response, supplied by the transport layer.
pub trait ResponseWriter {
    /// Headers that will be sent with the response.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn set_status(&mut self, status: StatusCode);

    /// Appends `chunk` to the body.
    fn write(&mut self, chunk: &[u8]) -> io::Result<()>;

    /// Sets `content-type` and writes `body`. Status is left as is.
    fn send(&mut self, content_type: ContentType, body: &[u8]) -> io::Result<()> {
        self.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type.as_str()));
        self.write(body)
    }

    /// `text/plain; charset=utf-8`.
    fn text(&mut self, body: &str) -> io::Result<()> {
        self.send(ContentType::Text, body.as_bytes())
    }

    /// `application/json`. Pass bytes straight from your serialiser.
    fn json(&mut self, body: &[u8]) -> io::Result<()> {
        self.send(ContentType::Json, body)
    }
}

// ── Recorder ──────────────────────────────────────────────────────────────────

/// A [`ResponseWriter`] that buffers everything in memory.
///
/// The bundled [`Server`](crate::Server) hands one of these to the mux for
/// each request. It is equally useful in tests.
#[derive(Debug, Default)]
pub struct Recorder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: BytesMut,
    written: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status set by a handler, or `200 OK` if none was.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// True until a handler sets a status, a header, or writes any body.
    pub fn is_untouched(&self) -> bool {
        !self.written && self.headers.is_empty()
    }

    /// Converts the recorded response into an `http::Response`.
    pub fn into_response(self) -> http::Response<Full<Bytes>> {
        let status = self.status();
        let mut response = http::Response::new(Full::new(self.body.freeze()));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseWriter for Recorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
        self.written = true;
    }

    fn write(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.body.extend_from_slice(chunk);
        self.written = true;
        Ok(())
    }
}
