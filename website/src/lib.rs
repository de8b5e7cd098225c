pub mod config;
pub mod content;
pub mod layout;
pub mod router;
pub mod routes;
