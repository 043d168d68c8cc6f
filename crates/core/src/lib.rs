//! # UMRS Core
//!
//! Client-side domain logic for the Unified Medical Record System.
//!
//! The centrepiece is the record form engine ([`RecordFormEngine`]): a
//! typed, in-memory draft of a medical visit record with optional
//! sections, derived completion progress, submit-time validation, and
//! session-scoped attachment staging. Everything runs synchronously within
//! one UI event turn; nothing is persisted, and the submit boundary is the
//! [`sink::RecordSink`] trait.
//!
//! Alongside the engine live the smaller page models: sign-in validation
//! ([`auth`]), the medical profile ([`profile`]), and the dashboard
//! summary ([`dashboard`]).
//!
//! **No UI concerns**: rendering, routing, and styling belong to the host
//! application; this crate owns state and rules only.

pub mod auth;
pub mod dashboard;
pub mod engine;
mod error;
pub mod profile;
pub mod progress;
pub mod record;
pub mod sections;
pub mod sink;
pub mod validation;

pub use engine::{RecordFormEngine, StagingErrors};
pub use error::{RecordError, RecordResult};
pub use record::{AttachmentBucket, MedicalRecordDraft, VisitType};
pub use sections::{SectionFocus, SectionId, SectionVisibility};
pub use sink::{LoggingSink, RecordSink};
pub use validation::{RequiredField, ValidationErrors};

// Staging types callers need to drive the engine.
pub use umrs_attachments::{AttachmentRef, CandidateFile, ContentHandle, MediaType};
