//! bookshelf - A small in-memory book catalog served over HTTP

pub mod cli;
pub mod http_server;
pub mod storage;
