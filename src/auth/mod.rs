pub mod models;
pub mod password_service;
pub mod policy;
pub mod token_service;
