//! Per-session selection and staging state for the unlinked-products screen.

use std::collections::{HashMap, HashSet};

use haul_core::entities::{LinkUpdate, UnlinkedProduct};
use haul_core::errors::LinkUpdateError;
use serde::{Serialize, Serializer};

use crate::error::WorkflowError;
use crate::plan::{RejectedRow, SubmissionPlan};
use crate::store::LinkStore;

/// Where a session stands. Derived from its selection, staged text, and the
/// outcome of the last submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    /// Nothing selected and nothing staged.
    Idle,
    /// At least one row selected, nothing staged.
    Selecting,
    /// At least one row has staged text.
    Staging,
    /// The last submit reached the store and was refused. Selection and
    /// staged text are unchanged.
    SubmitFailed,
}

/// Result of [`LinkingSession::submit`]. Every variant carries the selected
/// rows that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The batch was committed.
    Submitted {
        updates: Vec<LinkUpdate>,
        rejected: Vec<RejectedRow>,
    },
    /// No selected row had a valid classification id; the store was not called.
    NothingToSubmit { rejected: Vec<RejectedRow> },
    /// The store refused the batch. Nothing was committed.
    Failed {
        #[serde(serialize_with = "serialize_display")]
        error: LinkUpdateError,
        rejected: Vec<RejectedRow>,
    },
}

impl SubmitOutcome {
    #[must_use]
    pub fn rejected(&self) -> &[RejectedRow] {
        match self {
            Self::Submitted { rejected, .. }
            | Self::NothingToSubmit { rejected }
            | Self::Failed { rejected, .. } => rejected,
        }
    }
}

fn serialize_display<S: Serializer>(error: &LinkUpdateError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Selection and staged classification text for one browsing session.
///
/// Nothing here is persisted. Dropping the session discards it.
pub struct LinkingSession<'s, S: LinkStore + ?Sized> {
    store: &'s S,
    rows: Vec<UnlinkedProduct>,
    selected: HashSet<i64>,
    staged: HashMap<i64, String>,
    last_failure: Option<LinkUpdateError>,
}

impl<'s, S: LinkStore + ?Sized> LinkingSession<'s, S> {
    /// A session with no rows listed. Call [`Self::refresh`] to load them.
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            rows: Vec::new(),
            selected: HashSet::new(),
            staged: HashMap::new(),
            last_failure: None,
        }
    }

    /// Reload the unlinked rows from the store.
    ///
    /// Selection and staged text for products no longer listed are dropped.
    /// A failed query leaves the list empty but keeps selection and staged
    /// text, so a later successful refresh can restore them.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Store` if the store query fails.
    pub async fn refresh(&mut self) -> Result<(), WorkflowError> {
        match self.store.list_unlinked_products().await {
            Ok(rows) => {
                self.rows = rows;
                self.prune();
                self.last_failure = None;
                tracing::debug!(rows = self.rows.len(), "unlinked products loaded");
                Ok(())
            }
            Err(error) => {
                self.rows.clear();
                tracing::warn!(%error, "failed to load unlinked products");
                Err(error.into())
            }
        }
    }

    fn prune(&mut self) {
        let listed: HashSet<i64> = self.rows.iter().map(|row| row.product_id).collect();
        self.selected.retain(|id| listed.contains(id));
        self.staged.retain(|id, _| listed.contains(id));
    }

    fn ensure_listed(&self, product_id: i64) -> Result<(), WorkflowError> {
        if self.rows.iter().any(|row| row.product_id == product_id) {
            Ok(())
        } else {
            Err(WorkflowError::NotListed { product_id })
        }
    }

    /// Flip one product in or out of the selection. Returns whether it is now
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NotListed` for a product that is not listed.
    pub fn toggle(&mut self, product_id: i64) -> Result<bool, WorkflowError> {
        self.ensure_listed(product_id)?;
        if self.selected.remove(&product_id) {
            Ok(false)
        } else {
            self.selected.insert(product_id);
            Ok(true)
        }
    }

    /// Select every listed product, or clear the selection when every listed
    /// product is already selected. A partial selection becomes full. With an
    /// empty list this does nothing.
    pub fn toggle_all(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.rows.iter().map(|row| row.product_id).collect();
        }
    }

    /// Whether every listed product is selected, compared by membership.
    #[must_use]
    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty()
            && self
                .rows
                .iter()
                .all(|row| self.selected.contains(&row.product_id))
    }

    /// Record raw classification text for a product. Selection is not
    /// required and is not changed. Blank text clears the staged value.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::NotListed` for a product that is not listed.
    pub fn stage(&mut self, product_id: i64, text: impl Into<String>) -> Result<(), WorkflowError> {
        self.ensure_listed(product_id)?;
        let text = text.into();
        if text.trim().is_empty() {
            self.staged.remove(&product_id);
        } else {
            self.staged.insert(product_id, text);
        }
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> WorkflowState {
        if self.last_failure.is_some() {
            WorkflowState::SubmitFailed
        } else if !self.staged.is_empty() {
            WorkflowState::Staging
        } else if !self.selected.is_empty() {
            WorkflowState::Selecting
        } else {
            WorkflowState::Idle
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[UnlinkedProduct] {
        &self.rows
    }

    #[must_use]
    pub fn is_selected(&self, product_id: i64) -> bool {
        self.selected.contains(&product_id)
    }

    #[must_use]
    pub fn staged_text(&self, product_id: i64) -> Option<&str> {
        self.staged.get(&product_id).map(String::as_str)
    }

    /// The error from the last failed submit, if the session is in
    /// [`WorkflowState::SubmitFailed`].
    #[must_use]
    pub const fn last_failure(&self) -> Option<&LinkUpdateError> {
        self.last_failure.as_ref()
    }

    /// The batch a submit would send right now. Does not touch the store.
    #[must_use]
    pub fn prepare(&self) -> SubmissionPlan {
        SubmissionPlan::build(&self.rows, &self.selected, &self.staged)
    }

    /// Validate the selection and send the accepted rows as one batch.
    ///
    /// On success the submitted rows leave the list along with their
    /// selection and staged text; rejected rows stay as they were. On
    /// failure nothing local changes. Failures are never retried.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let SubmissionPlan { updates, rejected } = self.prepare();
        for row in &rejected {
            tracing::info!(
                product_id = row.product_id,
                reason = %row.reason,
                "selected row left out of link batch"
            );
        }

        if updates.is_empty() {
            tracing::info!(rejected = rejected.len(), "nothing to submit");
            return SubmitOutcome::NothingToSubmit { rejected };
        }

        match self.store.bulk_update_links(&updates).await {
            Ok(()) => {
                let submitted: HashSet<i64> = updates.iter().map(|u| u.link_id).collect();
                let cleared: Vec<i64> = self
                    .rows
                    .iter()
                    .filter(|row| submitted.contains(&row.link_id))
                    .map(|row| row.product_id)
                    .collect();
                self.rows.retain(|row| !submitted.contains(&row.link_id));
                for product_id in &cleared {
                    self.selected.remove(product_id);
                    self.staged.remove(product_id);
                }
                self.last_failure = None;
                tracing::info!(linked = updates.len(), "products linked");
                SubmitOutcome::Submitted { updates, rejected }
            }
            Err(error) => {
                tracing::warn!(%error, batch = updates.len(), "link batch refused");
                self.last_failure = Some(error.clone());
                SubmitOutcome::Failed { error, rejected }
            }
        }
    }
}
