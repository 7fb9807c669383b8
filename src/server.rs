use crate::constants::MAX_BODY_BYTES;
use crate::error::InitError;
use crate::web::{self, AppContext, Method, Request, Response};
use std::io::{self, Cursor, Read};

/// Blocking HTTP front end. Requests are handled one at a time, to
/// completion, in arrival order.
pub struct Server {
    http: tiny_http::Server,
    ctx: AppContext,
}

impl Server {
    pub fn bind(addr: &str, ctx: AppContext) -> Result<Self, InitError> {
        let http = tiny_http::Server::http(addr).map_err(|e| InitError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { http, ctx })
    }

    pub fn run(&self) {
        for request in self.http.incoming_requests() {
            self.handle(request);
        }
    }

    fn handle(&self, mut request: tiny_http::Request) {
        let mut req = Request {
            method: Method::parse(&request.method().to_string()),
            path: request.url().to_string(),
            body: String::new(),
        };

        let response = match read_body(request.as_reader()) {
            Ok(Some(body)) => {
                req.body = body;
                web::dispatch(&self.ctx, &req)
            }
            Ok(None) => {
                log::warn!("Rejected request body over {MAX_BODY_BYTES} bytes");
                Response::Html { status: 413, body: "Request body too large".to_string() }
            }
            Err(e) => {
                log::warn!("Failed to read request body: {e}");
                Response::Html { status: 400, body: "Bad request".to_string() }
            }
        };

        log::info!("{} {} -> {}", req.method, req.path, response.status());

        if let Err(e) = request.respond(into_http(response)) {
            log::warn!("Failed to send response: {e}");
        }
    }
}

/// Read a UTF-8 body of at most `MAX_BODY_BYTES`. Returns `None` when the
/// body is longer.
fn read_body(reader: impl Read) -> io::Result<Option<String>> {
    let mut data = Vec::new();
    reader.take(MAX_BODY_BYTES + 1).read_to_end(&mut data)?;

    if !u64::try_from(data.len()).is_ok_and(|len| len <= MAX_BODY_BYTES) {
        return Ok(None);
    }
    String::from_utf8(data)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn header(name: &str, value: &str) -> Option<tiny_http::Header> {
    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

fn into_http(response: Response) -> tiny_http::Response<Cursor<Vec<u8>>> {
    let status = tiny_http::StatusCode(response.status());
    let (body, content_header) = match response {
        Response::Html { body, .. } => (body, header("Content-Type", "text/html; charset=utf-8")),
        Response::Json { body, .. } => (body, header("Content-Type", "application/json")),
        Response::Redirect { location } => (String::new(), header("Location", &location)),
    };

    let data = body.into_bytes();
    let length = data.len();
    tiny_http::Response::new(status, content_header.into_iter().collect(), Cursor::new(data), Some(length), None)
}
