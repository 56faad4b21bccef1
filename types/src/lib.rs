//! FitTrack Shared Types
//!
//! This crate contains the domain type contract shared across the
//! backend, frontend, and worker members of the monorepo. It defines
//! data shapes only; behavior lives with the consumers.

pub mod api;
pub mod errors;
pub mod models;

// Re-export commonly used items
pub use api::{ApiResponse, PaginatedResponse, PaginationParams};
pub use errors::AppError;
pub use models::{BodyRecord, Exercise, User, WorkoutGroup, WorkoutRecord, WorkoutSet};
