//! HTTP front end: configuration, routing, page rendering.

pub mod app;
pub mod config;
