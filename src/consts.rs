pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Defaults and file locations used by the CLI, grouped by concern.

    // =============================================================================
    // LOADING
    // =============================================================================

    /// Latency of the simulated data source (milliseconds)
    pub const DEFAULT_LOAD_DELAY_MS: u64 = 1500;

    // =============================================================================
    // FILES
    // =============================================================================

    /// Directory under $HOME holding configuration and logs
    pub const CONFIG_DIR: &str = ".finance-dashboard";

    /// Configuration file name inside [`CONFIG_DIR`]
    pub const CONFIG_FILE: &str = "config.json";

    /// Log file used while the TUI owns the terminal
    pub const LOG_FILE: &str = "dashboard.log";
}
