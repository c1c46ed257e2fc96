//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, and response conversion for `tiny_http`.

use std::io::Cursor;

use log::{info, warn};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use govmatch::api::{self, ApiContext, ApiError, ApiResponse, CreateSchemeRequest};
use govmatch::core::services::ResultOrder;

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve API requests on `addr` until the process exits
pub fn serve(ctx: &ApiContext, addr: &str) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    info!("Listening on http://{addr}");

    for mut request in server.incoming_requests() {
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = handle_api_request(ctx, &mut request);
        let status = response.status_code().0;
        info!("{method} {url} -> {status}");

        if let Err(e) = request.respond(response) {
            warn!("Failed to send response for {method} {url}: {e}");
        }
    }

    Ok(())
}

// =============================================================================
// ROUTING
// =============================================================================

/// A resolved API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'a> {
    Health,
    ListSchemes,
    CreateScheme,
    GetScheme(&'a str),
    Eligibility(&'a str),
    Explain(&'a str),
}

/// Map a method and URL to an endpoint
///
/// Accepts both `/api/v1/...` and the unversioned `/api/...` prefix.
fn resolve<'a>(method: &Method, url: &'a str) -> Option<Route<'a>> {
    let path = url.split('?').next().unwrap_or(url);
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);
    let api_path = api_path.trim_end_matches('/');

    match (method, api_path) {
        (&Method::Get, "/health") => Some(Route::Health),
        (&Method::Get, "/schemes") => Some(Route::ListSchemes),
        (&Method::Post, "/schemes") => Some(Route::CreateScheme),
        (&Method::Get, _) => {
            if let Some(id) = single_segment(api_path, "/schemes/") {
                return Some(Route::GetScheme(id));
            }
            if let Some(id) = api_path
                .strip_prefix("/eligibility/")
                .and_then(|rest| rest.strip_suffix("/explain"))
                .filter(|id| !id.is_empty() && !id.contains('/'))
            {
                return Some(Route::Explain(id));
            }
            single_segment(api_path, "/eligibility/").map(Route::Eligibility)
        },
        _ => None,
    }
}

fn single_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix).filter(|id| !id.is_empty() && !id.contains('/'))
}

/// Value of `key` in the URL query string
fn query_param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Handle an API request and return a response
pub fn handle_api_request(ctx: &ApiContext, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();

    let Some(route) = resolve(&method, &url) else {
        return not_found_response(&format!("API endpoint not found: {method} {url}"));
    };

    match route {
        Route::Health => handle_result(api::get_health(ctx)),
        Route::ListSchemes => handle_result(api::list_schemes(ctx)),
        Route::CreateScheme => match read_json_body::<CreateSchemeRequest>(request) {
            Ok(req) => created_result(api::create_scheme(ctx, req)),
            Err(e) => error_response(&e),
        },
        Route::GetScheme(id) => handle_result(api::get_scheme(ctx, id)),
        Route::Eligibility(user_id) => handle_result(api::check_eligibility(ctx, user_id)),
        Route::Explain(user_id) => {
            let order = match query_param(&url, "sort").map(str::parse::<ResultOrder>) {
                None => ResultOrder::AsGiven,
                Some(Ok(order)) => order,
                Some(Err(e)) => return error_response(&ApiError::bad_request(e)),
            };
            handle_result(api::explain_eligibility(ctx, user_id, order))
        },
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

/// Like [`handle_result`] but answers 201 on success
fn created_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 201),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_response(&response, error.status_code())
}

/// Create a 404 not found response
fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    error_response(&ApiError::not_found(message))
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let mut response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response.add_header(header);
    }
    response
}
