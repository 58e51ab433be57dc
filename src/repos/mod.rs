pub mod access_token_repo;
pub mod error;
pub mod resource_server_repo;
pub mod store;
