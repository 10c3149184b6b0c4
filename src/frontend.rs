//! Embedded upload page served on the fallback route.

use axum::body::Body as AxumBody;
use axum::http::{HeaderMap, HeaderValue, Request, header};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

use crate::error::ApiError;

#[derive(RustEmbed)]
#[folder = "frontend"]
/// Static assets compiled into the binary.
pub struct FrontendAssets;

/// Serves the upload page and its assets.
pub async fn serve_frontend(req: Request<AxumBody>) -> Result<Response, ApiError> {
    let path = req.uri().path().trim_start_matches('/');
    let requested = if path.is_empty() { "index.html" } else { path };
    if let Some(response) = load_embedded_asset(requested)? {
        return Ok(response);
    }

    Err(ApiError::NotFound("not found".into()))
}

fn load_embedded_asset(path: &str) -> Result<Option<Response>, ApiError> {
    let asset = FrontendAssets::get(path);
    let Some(asset) = asset else {
        return Ok(None);
    };
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(mime.essence_str())
            .map_err(|_| ApiError::Internal("invalid mime type".into()))?,
    );
    Ok(Some(
        (headers, AxumBody::from(asset.data.into_owned())).into_response(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn make_server() -> TestServer {
        TestServer::new(Router::new().fallback(serve_frontend)).expect("test server")
    }

    #[tokio::test]
    async fn root_serves_upload_page() {
        let server = make_server();
        let response = server.get("/").await;

        response.assert_status_ok();
        response.assert_header(header::CONTENT_TYPE, "text/html");
        assert!(response.text().contains("/api/upload"));
    }

    #[tokio::test]
    async fn unknown_asset_returns_404() {
        let server = make_server();
        let response = server.get("/missing.js").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
