//! Configuration for vidflow.
//!
//! Settings come from three places, highest precedence first: command-line
//! flags, `.vidflow/config.toml` (found by searching upward from the working
//! directory), and built-in defaults. Every resolved key remembers where its
//! value came from so `vidflow config` can show it.
//!
//! ```toml
//! [store]
//! index_path = "index.yaml"
//! manuscript_dir = "manuscript"
//!
//! [display]
//! color = true
//! verbose = false
//! ```

mod discovery;
mod model;
mod sources;

pub use discovery::{CONFIG_DIR, CONFIG_FILE, discover_config_file_from};
pub use model::{
    CliArgs, Config, DEFAULT_INDEX_PATH, DEFAULT_MANUSCRIPT_DIR, DisplayConfig, StoreConfig,
};
