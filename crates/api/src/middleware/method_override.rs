//! Method-override middleware.
//!
//! Browser forms can only submit GET and POST, so the list page's delete
//! links and the edit form name the real verb in a `_method` query
//! parameter. This middleware rewrites the request method before routing
//! when the incoming method is GET or POST and `_method` names PUT,
//! DELETE, or PATCH. Anything else passes through untouched.

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

pub async fn method_override(mut req: Request, next: Next) -> Response {
    if matches!(*req.method(), Method::GET | Method::POST) {
        if let Some(target) = req.uri().query().and_then(override_target) {
            *req.method_mut() = target;
        }
    }
    next.run(req).await
}

/// Extract the override target from a raw query string.
fn override_target(query: &str) -> Option<Method> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != "_method" {
            return None;
        }
        match value.to_ascii_uppercase().as_str() {
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    })
}
