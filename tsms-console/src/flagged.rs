//! Flagged transaction review

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{FlagStatus, FlaggedTransaction};
use tracing::{info, instrument};

/// Status filter of the review list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Resolved,
}

impl StatusFilter {
    fn accepts(&self, status: FlagStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == FlagStatus::Pending,
            Self::Resolved => status == FlagStatus::Resolved,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlaggedFilter {
    /// Case-insensitive match on transaction id, tenant or reason
    pub search: String,
    pub status: StatusFilter,
}

impl FlaggedFilter {
    pub fn matches(&self, item: &FlaggedTransaction) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = item.transaction_id.to_lowercase().contains(&term)
            || item.tenant.to_lowercase().contains(&term)
            || item.flag_reason.to_lowercase().contains(&term);
        matches_search && self.status.accepts(item.status)
    }
}

/// Owns the flagged list for one review session
#[derive(Debug, Clone, Default)]
pub struct FlaggedReview {
    items: Vec<FlaggedTransaction>,
}

impl FlaggedReview {
    pub fn new(items: Vec<FlaggedTransaction>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FlaggedTransaction] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&FlaggedTransaction> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items passing `filter`, in list order
    pub fn filtered(&self, filter: &FlaggedFilter) -> Vec<&FlaggedTransaction> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_pending()).count()
    }

    /// Mark a pending item resolved
    ///
    /// Rejects an empty resolution, an unknown id and an item that is
    /// already resolved.
    #[instrument(skip(self, resolution))]
    pub fn resolve(
        &mut self,
        id: &str,
        resolver: &str,
        resolution: &str,
    ) -> AppResult<&FlaggedTransaction> {
        let resolution = resolution.trim();
        if resolution.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::ResolutionRequired,
                "Resolution details are required",
            )
            .with_detail("id", id));
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::FlaggedTransactionNotFound,
                    format!("Flagged transaction {} not found", id),
                )
            })?;

        if !item.is_pending() {
            return Err(AppError::with_message(
                ErrorCode::FlagAlreadyResolved,
                format!("Flagged transaction {} is already resolved", id),
            ));
        }

        item.status = FlagStatus::Resolved;
        item.resolved_by = Some(resolver.to_string());
        item.resolution = Some(resolution.to_string());
        info!(transaction_id = %item.transaction_id, "Flagged transaction resolved");
        Ok(item)
    }
}
