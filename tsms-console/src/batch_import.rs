//! Batch transaction import from POS terminals
//!
//! [`BatchImport`] owns the terminal list, the current selection, the
//! running import and the result history. Per-terminal outcomes come from an
//! [`ImportSource`], so the terminal connection can be swapped for a
//! simulation or a fixed script in tests.

use std::path::Path;

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::error::{AppError, AppResult};
use shared::models::{ImportResult, ImportStatus, Terminal};
use tracing::{debug, info, instrument, warn};

/// Results kept in the history, newest first
pub const IMPORT_HISTORY_LIMIT: usize = 20;

/// Progress gained per tick of a running import
pub const PROGRESS_STEP: u8 = 10;

const SUCCESS_MESSAGE: &str = "Import completed successfully";
const TIMEOUT_MESSAGE: &str = "Connection timed out";

/// What importing one terminal produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported { transactions: u32 },
    Failed { message: String },
}

impl ImportOutcome {
    pub fn timed_out() -> Self {
        Self::Failed {
            message: TIMEOUT_MESSAGE.to_string(),
        }
    }
}

/// Source of per-terminal import outcomes
pub trait ImportSource {
    fn import(&mut self, terminal: &Terminal) -> ImportOutcome;
}

impl<F> ImportSource for F
where
    F: FnMut(&Terminal) -> ImportOutcome,
{
    fn import(&mut self, terminal: &Terminal) -> ImportOutcome {
        (*self)(terminal)
    }
}

/// Simulated terminals: 80% succeed with 1-100 transactions, the rest time out
#[derive(Debug, Clone)]
pub struct SimulatedImportSource {
    rng: StdRng,
    success_rate: f64,
}

impl SimulatedImportSource {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible outcomes
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            success_rate: 0.8,
        }
    }
}

impl Default for SimulatedImportSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportSource for SimulatedImportSource {
    fn import(&mut self, _terminal: &Terminal) -> ImportOutcome {
        if self.rng.gen_bool(self.success_rate) {
            ImportOutcome::Imported {
                transactions: self.rng.gen_range(1..=100),
            }
        } else {
            ImportOutcome::timed_out()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportState {
    #[default]
    Idle,
    Running {
        progress: u8,
    },
}

#[derive(Debug, Clone, Default)]
pub struct BatchImport {
    terminals: Vec<Terminal>,
    selected: Vec<String>,
    history: Vec<ImportResult>,
    state: ImportState,
}

impl BatchImport {
    pub fn new(terminals: Vec<Terminal>) -> Self {
        Self {
            terminals,
            ..Self::default()
        }
    }

    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    /// Selected terminal ids in selection order
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn history(&self) -> &[ImportResult] {
        &self.history
    }

    pub fn state(&self) -> ImportState {
        self.state
    }

    pub fn online_count(&self) -> usize {
        self.terminals.iter().filter(|t| t.is_online()).count()
    }

    /// State of the "Select All Online Terminals" checkbox
    pub fn all_online_selected(&self) -> bool {
        let mut online = self.terminals.iter().filter(|t| t.is_online()).peekable();
        online.peek().is_some() && online.all(|t| self.is_selected(&t.id))
    }

    /// `2 of 5 selected`
    pub fn selection_summary(&self) -> String {
        format!("{} of {} selected", self.selected.len(), self.terminals.len())
    }

    /// `4 of 5 terminals online`
    pub fn online_summary(&self) -> String {
        format!(
            "{} of {} terminals online",
            self.online_count(),
            self.terminals.len()
        )
    }

    /// Flip one terminal's selection; returns whether it is now selected
    pub fn toggle(&mut self, id: &str) -> AppResult<bool> {
        let terminal = self
            .terminals
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found(format!("Terminal {}", id)))?;

        if !terminal.is_selectable() {
            return Err(
                AppError::validation(format!("{} is offline", terminal.name))
                    .with_detail("terminal_id", id),
            );
        }

        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            debug!(terminal_id = %id, "Terminal deselected");
            Ok(false)
        } else {
            self.selected.push(id.to_string());
            debug!(terminal_id = %id, "Terminal selected");
            Ok(true)
        }
    }

    /// Select every online terminal, or clear the selection when they
    /// already are all selected
    pub fn select_all_online(&mut self) {
        if self.all_online_selected() {
            self.selected.clear();
        } else {
            self.selected = self
                .terminals
                .iter()
                .filter(|t| t.is_online())
                .map(|t| t.id.clone())
                .collect();
        }
    }

    /// Begin an import; `false` when nothing is selected or one is running
    pub fn start(&mut self) -> bool {
        if self.selected.is_empty() || self.state != ImportState::Idle {
            return false;
        }
        self.state = ImportState::Running { progress: 0 };
        info!(terminals = self.selected.len(), "Batch import started");
        true
    }

    /// Advance a running import; completes it once progress reaches 100
    pub fn tick<S: ImportSource>(&mut self, source: &mut S, at: NaiveDateTime) -> ImportState {
        if let ImportState::Running { progress } = self.state {
            let progress = progress.saturating_add(PROGRESS_STEP).min(100);
            if progress >= 100 {
                self.complete_import(source, at);
            } else {
                self.state = ImportState::Running { progress };
            }
        }
        self.state
    }

    pub fn cancel(&mut self) {
        if self.state != ImportState::Idle {
            info!("Batch import cancelled");
        }
        self.state = ImportState::Idle;
    }

    /// Import every selected terminal and prepend the results to the history
    ///
    /// Returns the new results. Nothing happens without a selection.
    #[instrument(skip(self, source))]
    pub fn complete_import<S: ImportSource>(
        &mut self,
        source: &mut S,
        at: NaiveDateTime,
    ) -> &[ImportResult] {
        self.state = ImportState::Idle;

        let mut results = Vec::with_capacity(self.selected.len());
        for id in &self.selected {
            let Some(terminal) = self.terminals.iter().find(|t| &t.id == id) else {
                continue;
            };
            let result = match source.import(terminal) {
                ImportOutcome::Imported { transactions } => ImportResult {
                    terminal_id: terminal.id.clone(),
                    terminal_name: terminal.name.clone(),
                    status: ImportStatus::Success,
                    message: SUCCESS_MESSAGE.to_string(),
                    transactions_count: Some(transactions),
                    timestamp: at,
                },
                ImportOutcome::Failed { message } => {
                    warn!(terminal = %terminal.name, %message, "Terminal import failed");
                    ImportResult {
                        terminal_id: terminal.id.clone(),
                        terminal_name: terminal.name.clone(),
                        status: ImportStatus::Failed,
                        message,
                        transactions_count: None,
                        timestamp: at,
                    }
                }
            };
            results.push(result);
        }

        let count = results.len();
        if count > 0 {
            let succeeded = results.iter().filter(|r| r.is_success()).count();
            results.append(&mut self.history);
            results.truncate(IMPORT_HISTORY_LIMIT);
            self.history = results;
            info!(count, succeeded, "Batch import completed");
        }
        &self.history[..count.min(self.history.len())]
    }

    /// Result history as pretty JSON
    pub fn export_results(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.history)?)
    }

    pub fn export_results_to(&self, path: &Path) -> AppResult<()> {
        std::fs::write(path, self.export_results()?)?;
        info!(path = %path.display(), count = self.history.len(), "Import results exported");
        Ok(())
    }
}
