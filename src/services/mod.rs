//! Local computation services.
//!
//! The only local business logic in this service is the qibla bearing
//! calculation; everything else delegates to upstream APIs.

pub mod qibla;

pub use qibla::{bearing_to_kaaba, KAABA};
