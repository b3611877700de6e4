//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the
//! calculation core and the repositories.

pub mod catalog;
pub mod diary;
pub mod lift;
pub mod target;
pub mod user;

pub use catalog::CatalogService;
pub use diary::DiaryService;
pub use lift::LiftService;
pub use target::TargetService;
pub use user::UserService;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Convert a database Decimal to f64 for the API boundary
pub(crate) fn dec_to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Convert an f64 to Decimal for database storage
pub(crate) fn f64_to_dec(f: f64) -> Decimal {
    Decimal::try_from(f).unwrap_or(Decimal::ZERO)
}
