//! Domain value objects.

mod conflict_policy;

pub use conflict_policy::ConflictPolicy;
