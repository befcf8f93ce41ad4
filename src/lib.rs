//! # UmmahMap Backend
//!
//! Geolocation-driven companion service for daily Islamic practice.
//!
//! This crate exposes a small REST API via Axum with three capabilities:
//!
//! - **Qibla bearing**: great-circle forward azimuth from the caller's
//!   coordinates to the Kaaba, computed locally.
//! - **Nearest mosque**: proxied lookup against the Google Places
//!   nearby-search API, returning the closest result with a directions link.
//! - **Prayer times**: proxied lookup against the AlAdhan timings API,
//!   reshaped to a fixed set of six daily prayer times.
//!
//! ## Architecture
//!
//! - [`config`]: Process configuration loaded once from environment variables
//! - [`models`]: Shared geographic value types
//! - [`services`]: Local computation (qibla bearing)
//! - [`upstream`]: HTTP clients for the two third-party services
//! - [`http`]: Axum-based HTTP server, handlers, and error mapping
//!
//! Every request is independent; there is no persistence and no shared
//! mutable state.

pub mod config;
pub mod models;

pub mod services;
pub mod upstream;

pub mod http;
