use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use include_dir::{include_dir, Dir};

use crate::web::error::WebError;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

fn get_static_file(path: &str) -> Option<&'static [u8]> {
    let file = STATIC_DIR.get_file(path)?;
    Some(file.contents())
}

fn get_file(path: &str) -> Result<Response<Body>, WebError> {
    let mime_type = mime_guess::from_path(path).first_or_text_plain();
    match get_static_file(path) {
        None => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty())?),
        Some(file) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime_type.as_ref())
            .header(
                header::CACHE_CONTROL,
                #[cfg(not(debug_assertions))]
                "public, max-age=86400",
                #[cfg(debug_assertions)]
                "no-cache",
            )
            .body(Body::from(file))?),
    }
}

pub(crate) async fn static_path(Path(path): Path<String>) -> impl IntoResponse {
    let path = path.trim_start_matches('/');
    get_file(path)
}
