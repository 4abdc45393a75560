//! # HTTP Server
//!
//! Combines the health, animal API and HTML routers into one Axum app.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::animals::AnimalStore;
use crate::observability::{log_event, log_event_with_fields, Event};

use super::animal_routes::{animal_routes, AnimalState};
use super::config::{parse_origin, HttpServerConfig};
use super::html_routes::html_routes;
use super::observability_routes::{health_routes, log_requests};

pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server that serves `store`
    pub fn new(config: HttpServerConfig, store: AnimalStore) -> Self {
        let state = Arc::new(AnimalState::new(store));
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<AnimalState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|origin| {
                    let parsed = parse_origin(origin);
                    if parsed.is_none() {
                        log_event_with_fields(
                            Event::CorsOriginIgnored,
                            &[("origin", origin.as_str())],
                        );
                    }
                    parsed
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/api", animal_routes(state))
            // Must come last: owns the wildcard fallback
            .merge(html_routes(&config.public_dir))
            .layer(middleware::from_fn(log_requests))
            .layer(cors)
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(
            Event::ServerListening,
            &[
                ("addr", addr.to_string().as_str()),
                ("public_dir", self.config.public_dir.display().to_string().as_str()),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
