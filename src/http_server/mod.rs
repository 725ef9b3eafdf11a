//! # Bookshelf HTTP Server Module
//!
//! Thin HTTP layer over the book store: routing, JSON encoding, and
//! mapping store errors to status codes.
//!
//! # Endpoints
//!
//! - `/` - Liveness text
//! - `/health` - Health check
//! - `/books` - List and create books
//! - `/books/{id}` - Get, update, and delete a book

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;

pub use book_routes::BookState;
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
