// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::fs;
use std::path::Path;
use tracing::debug;

fn content_type(name: &str) -> Mime {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("svg") => mime::IMAGE_SVG,
        Some("css") => mime::TEXT_CSS,
        Some("js") => mime::APPLICATION_JAVASCRIPT,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Serve a flat file from `static_dir`. Nested or relative names are refused.
pub fn static_asset(static_dir: &Path, name: &str) -> ResultResp {
    if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(ServerError::NotFound);
    }

    let path = static_dir.join(name);
    let bytes = fs::read(&path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "static asset unavailable");
        ServerError::NotFound
    })?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(name).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}
