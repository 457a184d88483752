//! # coe-pack — the Audit Pack
//!
//! Renders an assignment subset into the flat, human-readable Audit
//! Pack report and saves it as `<auditId>_AuditPack.txt`. The pack is
//! what leaves the tool — the one artifact an auditor can hand over
//! without access to the dashboard — so rendering is deterministic and
//! read-only: the same subset always produces byte-identical output,
//! and no entity is ever mutated.

pub mod error;
pub mod report;

pub use error::PackError;
pub use report::{render, write};
