//! # haul-link
//!
//! Turns a user's row selection and per-row classification input into one
//! validated, all-or-nothing link update.
//!
//! [`LinkingSession`] owns the transient selection and staged text for one
//! browsing session. It talks to persistence only through [`LinkStore`], so
//! it can be driven against [`haul_db::service::FreightService`] or any other
//! store.

pub mod error;
pub mod plan;
pub mod session;
pub mod store;

pub use error::WorkflowError;
pub use plan::{RejectedRow, SubmissionPlan, parse_classification_id};
pub use session::{LinkingSession, SubmitOutcome, WorkflowState};
pub use store::LinkStore;
