//! Central constants for the edison application

/// Default values for configuration
pub mod config {
    /// Configuration file checked relative to the working directory
    pub const DEFAULT_CONFIG_FILE: &str = "./configuration/configuration.json";

    /// Directory under the platform config directory holding edison's files
    pub const USER_CONFIG_DIR: &str = "edison";

    /// File name looked up inside [`USER_CONFIG_DIR`]
    pub const CONFIG_FILE_NAME: &str = "configuration.json";

    /// Number of languages shown by `top-user-langs` when the config omits it
    pub const DEFAULT_TOP_LANGS: usize = 5;
}

/// Default values for statistics gathering
pub mod stats {
    /// Language requests kept in flight with `--parallel`
    pub const PARALLEL_FETCHES: usize = 8;
}

/// Default values for terminal output
pub mod output {
    /// Printed in place of a value that could not be fetched
    pub const UNAVAILABLE: &str = "unavailable";

    /// Trailing characters of the token left visible by `print-config`
    pub const TOKEN_VISIBLE_CHARS: usize = 4;
}

/// Default values for diagnostics
pub mod logging {
    /// Filter used when `RUST_LOG` is not set
    pub const DEFAULT_FILTER: &str = "edison=warn,edison_gitea=warn";

    /// Filter used with `--debug`
    pub const DEBUG_FILTER: &str = "edison=debug,edison_gitea=debug";
}
