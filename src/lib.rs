pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod render;
pub mod review_session;
pub mod store;
