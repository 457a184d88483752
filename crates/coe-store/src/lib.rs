//! # coe-store — the audit data store
//!
//! In-memory source of truth for a Command Center session: the audit,
//! the compliance domains, and the assignment bundles. Mutations are
//! copy-on-write — every operation returns a fresh [`AuditStore`]
//! snapshot, so readers holding the previous snapshot never observe a
//! partially-updated assignment.
//!
//! Also home to the seeded demo dataset ([`seed`]) and the pure
//! statistics aggregator ([`stats`]).

pub mod error;
pub mod seed;
pub mod stats;
pub mod store;

pub use error::StoreError;
pub use seed::seed;
pub use stats::{aggregate, AuditStats};
pub use store::AuditStore;
