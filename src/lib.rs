// Medical Report Analyzer - upload a lab report, get a structured AI summary

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod llm;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod types;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
