//! Web layer: handlers behind the router

pub mod handlers;
