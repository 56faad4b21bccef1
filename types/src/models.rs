//! Domain models for the FitTrack application
//!
//! Every record is an immutable value. An update produces a new value
//! with a fresh `updated_at`; nothing is mutated in place. The
//! `user_id`/`exercise_id` fields are lookup references only, with no
//! ownership semantics attached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body weight and composition measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Weight in kg, expected to lie strictly between 0 and 1000
    pub weight: f64,
    /// Body fat percentage, 0 to 100 when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Strength training exercise defined by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Named grouping of exercises (e.g. "push day")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutGroup {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One logged workout of a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    /// Ordered by `set_number`; sequence order is meaningful
    pub sets: Vec<WorkoutSet>,
    pub recorded_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One set within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub set_number: u32,
    /// Load in kg; absent for bodyweight sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Expected to be a whole number between 1 and 1000
    pub reps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}
