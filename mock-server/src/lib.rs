use axum::{
    extract::Path,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

/// What the server saw of a request, echoed back as JSON.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inspection {
    pub method: String,
    pub path: String,
    pub accept: Option<String>,
    pub host: Option<String>,
    pub content_length: Option<String>,
    pub form: Vec<(String, String)>,
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/echo", post(echo))
        .route("/inspect", any(inspect))
        .route("/inspect/{*rest}", any(inspect))
        .route("/status/{code}", get(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

async fn hello() -> &'static str {
    "hello"
}

async fn echo(body: String) -> String {
    body
}

async fn inspect(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Inspection> {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let inspection = Inspection {
        method: method.to_string(),
        path: uri.path().to_string(),
        accept: header_value(header::ACCEPT),
        host: header_value(header::HOST),
        content_length: header_value(header::CONTENT_LENGTH),
        form: url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect(),
    };
    info!(method = %inspection.method, path = %inspection.path, "inspected request");
    Json(inspection)
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspection_serializes_form_as_pairs() {
        let inspection = Inspection {
            method: "POST".to_string(),
            path: "/inspect".to_string(),
            accept: Some("*/*".to_string()),
            host: Some("localhost".to_string()),
            content_length: Some("7".to_string()),
            form: vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ],
        };
        let json = serde_json::to_value(&inspection).unwrap();
        assert_eq!(json["method"], "POST");
        assert_eq!(json["form"], serde_json::json!([["a", "1"], ["b", "2"]]));
    }

    #[test]
    fn inspection_roundtrips_through_json() {
        let inspection = Inspection {
            method: "GET".to_string(),
            path: "/".to_string(),
            accept: None,
            host: None,
            content_length: None,
            form: Vec::new(),
        };
        let json = serde_json::to_string(&inspection).unwrap();
        let back: Inspection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inspection);
    }

    #[test]
    fn missing_headers_serialize_as_null() {
        let inspection = Inspection {
            method: "GET".to_string(),
            path: "/".to_string(),
            accept: None,
            host: None,
            content_length: None,
            form: Vec::new(),
        };
        let json = serde_json::to_value(&inspection).unwrap();
        assert!(json["host"].is_null());
        assert!(json["form"].as_array().unwrap().is_empty());
    }
}
