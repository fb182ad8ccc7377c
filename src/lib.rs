//! AlgoPrep - DSA Practice Platform Backend
//!
//! This library provides the backend for the AlgoPrep platform, a web
//! application for practicing data-structure-and-algorithm problems.
//!
//! # Features
//!
//! - Curated problem catalog with per-user solved tracking
//! - In-browser code execution delegated to a remote judge
//! - Study assistant backed by generative providers with a local fallback
//! - Per-user markdown notes
//! - Accounts delegated to a managed identity provider, profiles in a
//!   managed document store
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Orchestration logic
//! - **Providers / Store**: External service clients behind traits
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
