//! # HTTP Server
//!
//! Main HTTP server combining the health and book routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::storage::BookStore;

use super::book_routes::{book_routes, BookState};
use super::config::HttpServerConfig;
use super::health_routes::health_routes;

/// HTTP server for the book catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an empty store with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default(), BookStore::new())
    }

    /// Create a server with custom configuration over `store`
    pub fn with_config(config: HttpServerConfig, store: BookStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: BookStore) -> Router {
        let book_state = Arc::new(BookState::new(store));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| match s.parse() {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        warn!(origin = %s, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes(book_state.clone()))
            .merge(book_routes(book_state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address. Host names are resolved.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        let addr = self.config.socket_addr();
        TcpListener::bind(addr.as_str()).await.map_err(|e| {
            std::io::Error::new(e.kind(), format!("failed to bind '{}': {}", addr, e))
        })
    }

    /// Start the HTTP server and serve until the process stops
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        let addr: SocketAddr = listener.local_addr()?;
        info!(%addr, "bookshelf HTTP server listening");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
