//! Database repositories
//!
//! Provides the data access layer for database operations.

pub mod food;
pub mod lift;
pub mod summary;
pub mod target;
pub mod user;

pub use food::{CreateFood, FoodRecord, FoodRepository};
pub use lift::{CreateLift, LiftRecord, LiftRepository};
pub use summary::{CreateSummary, SummaryRecord, SummaryRepository};
pub use target::{TargetRecord, TargetRepository, UpsertTarget};
pub use user::{UserRecord, UserRepository};
