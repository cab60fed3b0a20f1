//! HTTP handlers and shared application state.

pub mod http;
