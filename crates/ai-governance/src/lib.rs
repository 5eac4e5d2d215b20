//! Maturity scoring and gap analysis for AI governance assessments.
//!
//! The [`assessment`] module holds the scoring engine, the gap analysis engine and the
//! static catalogs they consume. [`config`], [`telemetry`] and [`error`] carry the
//! service plumbing shared with the API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
