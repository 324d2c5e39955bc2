//! Networking for the single product listing request.

pub mod api;
