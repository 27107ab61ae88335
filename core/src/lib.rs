pub mod context;
pub mod datasets;
pub mod franchise;
pub mod views;

// Re-exports for convenience
pub use context::{AppConfig, AppConfigExt, ConfigError, DatasetFiles};
pub use datasets::{
    AdvancedRow, BoxScoreRow, DatasetError, LineSeriesRow, Tables, TeamId, TeamLookup, load_tables,
};
pub use franchise::{BOUNDS_LABEL, normalize_label, selected_franchises};
pub use views::{
    DashboardView, LookupError, SelectionError, ViewError, effective_labels, effective_tiers,
    filter_advanced, render,
};
