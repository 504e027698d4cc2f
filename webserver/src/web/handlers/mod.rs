//! HTTP request handlers

pub mod api;

pub use api::*;
