pub mod client;
pub mod errors;
pub mod graphql;
pub mod operations;
pub mod pagination;
pub mod server;
pub mod server_handler;
pub mod tools;
