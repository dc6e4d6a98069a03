pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod organization;
pub mod server;
pub mod services;
pub mod tenancy;
