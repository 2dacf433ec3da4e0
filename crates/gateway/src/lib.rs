pub mod config;
pub mod handler;
pub mod metrics;
pub mod middleware;
pub mod state;
