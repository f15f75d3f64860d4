//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use super::error::PageError;

/// Body decoded as JSON when the request says so, as a URL-encoded form
/// otherwise.
pub struct FormOrJson<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().starts_with("application/json"))
}

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = PageError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| PageError::BadBody(e.body_text()))?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| PageError::BadBody(e.body_text()))?;
            Ok(Self(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    use crate::models::{RawValue, UserInput};

    fn request(content_type: &str, body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/users")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_form_bodies() {
        let req = request(
            "application/x-www-form-urlencoded",
            "firstName=Ada&lastName=King&age=36&email=ada%40example.com&is_admin=on",
        );
        let FormOrJson(input) = FormOrJson::<UserInput>::from_request(req, &()).await.unwrap();

        assert_eq!(input.first_name.as_deref(), Some("Ada"));
        assert_eq!(input.email.as_deref(), Some("ada@example.com"));
        assert_eq!(input.age, Some(RawValue::Text("36".into())));
        assert_eq!(input.is_admin, Some(RawValue::Text("on".into())));
    }

    #[tokio::test]
    async fn decodes_json_bodies() {
        let req = request(
            "application/json; charset=utf-8",
            r#"{"firstName":"Ada","age":36,"is_admin":true}"#,
        );
        let FormOrJson(input) = FormOrJson::<UserInput>::from_request(req, &()).await.unwrap();

        assert_eq!(input.age, Some(RawValue::Int(36)));
        assert_eq!(input.is_admin, Some(RawValue::Bool(true)));
        assert!(input.email.is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_bad_body() {
        let req = request("application/json", "{not json");
        let result = FormOrJson::<UserInput>::from_request(req, &()).await;
        assert!(matches!(result, Err(PageError::BadBody(_))));
    }
}
