//! Networking: REST calls to the site backend.

pub mod api;
