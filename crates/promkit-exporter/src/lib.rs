//! promkit exporter: serves a [`promkit_core::Registry`] over HTTP.
//!
//! Each scrape triggers a fresh collect + encode of the registry; the body is
//! written with content type `text/plain; version=0.0.4`.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;

pub use server::{spawn, start_http_server};
