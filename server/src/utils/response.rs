use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Envelope wrapping every successful payload.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

/// A page of results together with the window that produced it.
#[derive(Serialize)]
pub struct Page<T: Serialize> {
    pub items: Vec<T>,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorBody,
}

impl ApiErrorResponse {
    pub fn new(code: &'static str, message: String) -> Self {
        Self {
            success: false,
            error: ApiErrorBody { code, message },
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

fn respond<T: Serialize>(status: StatusCode, data: T, message: impl Into<String>) -> Response {
    let body = ApiResponse {
        success: true,
        data,
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

pub fn success<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    respond(StatusCode::OK, data, message)
}

/// 201 for operations that create a record.
pub fn created<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    respond(StatusCode::CREATED, data, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_envelope_shape() {
        let body = ApiResponse {
            success: true,
            data: Page {
                items: vec![1, 2],
                limit: 2,
                offset: 4,
            },
            message: "ok".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["data"]["items"], json!([1, 2]));
        assert_eq!(value["data"]["offset"], 4);
    }

    #[test]
    fn test_error_envelope_shape() {
        let value = serde_json::to_value(ApiErrorResponse::new("NOT_FOUND", "gone".into())).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "NOT_FOUND");
        assert_eq!(value["error"]["message"], "gone");
    }

    #[test]
    fn test_created_sets_status() {
        assert_eq!(created("x", "made").status(), StatusCode::CREATED);
    }
}
