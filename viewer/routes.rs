use std::io::Cursor;

use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::render;
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"text/html; charset=utf-8").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

fn json_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"application/json").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![Header::from_bytes(b"Content-Type", b"text/plain").unwrap()],
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Routes a request to the page or the state endpoint. The lock is held
/// only while serializing the payload, never across I/O.
pub fn dispatch(request: Request, state: SharedState) {
    let method = request.method().clone();
    let url = request.url().to_owned();

    let response = match (method, url.as_str()) {
        (Method::Get, "/") => html_response(render::page()),
        (Method::Get, "/state") => {
            let body = {
                let guard = state.lock().expect("viewer state poisoned");
                serde_json::to_string(&guard.payload())
            };
            match body {
                Ok(json) => json_response(json),
                Err(e) => {
                    eprintln!("failed to serialize state: {e}");
                    not_found()
                }
            }
        }
        _ => not_found(),
    };

    if let Err(e) = request.respond(response) {
        eprintln!("failed to send response: {e}");
    }
}
