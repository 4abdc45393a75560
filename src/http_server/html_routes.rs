//! HTML Routes
//!
//! Fixed pages plus static assets from the public directory. Any path not
//! matched elsewhere serves `index.html`.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

pub const INDEX_PAGE: &str = "index.html";
pub const ANIMALS_PAGE: &str = "animals.html";
pub const ZOOKEEPERS_PAGE: &str = "zookeepers.html";

/// Create HTML routes rooted at `public_dir`
pub fn html_routes(public_dir: &Path) -> Router {
    let index = public_dir.join(INDEX_PAGE);

    let assets = ServeDir::new(public_dir).fallback(ServeFile::new(&index));

    Router::new()
        .route_service("/", ServeFile::new(&index))
        .route_service("/animals", ServeFile::new(public_dir.join(ANIMALS_PAGE)))
        .route_service(
            "/zookeepers",
            ServeFile::new(public_dir.join(ZOOKEEPERS_PAGE)),
        )
        .fallback_service(assets)
}
