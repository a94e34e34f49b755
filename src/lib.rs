pub mod api;
pub mod config;
pub mod download;
pub mod error;
pub mod fetcher;
pub mod site;
