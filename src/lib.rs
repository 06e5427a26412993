pub mod api;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod server;
pub mod store;
