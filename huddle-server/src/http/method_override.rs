//! `?_method=` override for HTML forms
//!
//! Browsers only submit GET and POST. A POST carrying `_method=PATCH`, `PUT`
//! or `DELETE` in its query string is rewritten to that verb before routing.

use axum::extract::{Query, Request};
use axum::http::Method;
use serde::Deserialize;

#[derive(Deserialize)]
struct OverrideParams {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// The verb requested by `_method`, if it is one forms may override to.
fn requested_method(req: &Request) -> Option<Method> {
    let Query(params) = Query::<OverrideParams>::try_from_uri(req.uri()).ok()?;
    let method = params.method?;

    match method.to_ascii_uppercase().as_str() {
        "PATCH" => Some(Method::PATCH),
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

/// Rewrite the request method. Applied outside the router so the new verb
/// takes part in route matching.
pub fn override_method(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    if let Some(method) = requested_method(&req) {
        tracing::debug!(%method, uri = %req.uri(), "method override");
        *req.method_mut() = method;
    }
    req
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(method: &str, uri: &str) -> Request {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn post_with_override_changes_method() {
        let req = override_method(request("POST", "/users/1?_method=DELETE"));
        assert_eq!(req.method(), Method::DELETE);

        let req = override_method(request("POST", "/users/1?_method=patch"));
        assert_eq!(req.method(), Method::PATCH);

        let req = override_method(request("POST", "/users/1?x=1&_method=PUT"));
        assert_eq!(req.method(), Method::PUT);
    }

    #[test]
    fn only_post_is_overridden() {
        let req = override_method(request("GET", "/users/1?_method=DELETE"));
        assert_eq!(req.method(), Method::GET);
    }

    #[test]
    fn unknown_or_missing_override_is_ignored() {
        let req = override_method(request("POST", "/users?_method=TRACE"));
        assert_eq!(req.method(), Method::POST);

        let req = override_method(request("POST", "/users"));
        assert_eq!(req.method(), Method::POST);
    }
}
