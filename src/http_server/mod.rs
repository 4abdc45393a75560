//! # HTTP Server
//!
//! Axum server for the animal API and the HTML front end.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/animals` - List (filtered) and create animals
//! - `/api/animals/:id` - Lookup by id
//! - `/`, `/animals`, `/zookeepers` - HTML pages
//! - anything else - static asset from the public directory, else `index.html`

pub mod animal_routes;
pub mod config;
pub mod html_routes;
pub mod observability_routes;
pub mod server;

pub use animal_routes::{animal_routes, AnimalState};
pub use config::HttpServerConfig;
pub use server::HttpServer;
