pub mod auth;
pub mod http;
pub mod movements;
pub mod registry;
