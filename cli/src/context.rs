use courtside_core::context::{AppConfig, AppConfigExt};
use courtside_core::datasets::{DatasetError, Tables, load_tables};
use courtside_types::SelectionState;

/// Holds all state for the CLI session: the persisted configuration, the
/// immutable startup tables, and the current selection. Interaction is
/// strictly synchronous per command, so no locking is needed.
pub struct CliContext {
    pub config: AppConfig,
    pub tables: Tables,
    pub selection: SelectionState,
}

impl CliContext {
    /// Load configuration and all datasets. A missing or malformed
    /// dataset is fatal here; the dashboard cannot render without its
    /// tables.
    pub async fn init() -> Result<Self, DatasetError> {
        let config = AppConfig::load();
        let tables = load_tables(&config).await?;
        Ok(Self {
            config,
            tables,
            selection: SelectionState::default(),
        })
    }

    /// Re-read every dataset from the configured directory, keeping the
    /// current selection.
    pub async fn reload_tables(&mut self) -> Result<(), DatasetError> {
        self.tables = load_tables(&self.config).await?;
        Ok(())
    }
}
