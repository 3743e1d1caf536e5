//! Council configuration
//!
//! Loading the `.env` definitions file and the resolved, immutable
//! configuration object built from it.

pub mod api;
pub mod env_file;
pub mod types;

pub use api::ApiSettings;
pub use env_file::{EnvFileLoader, EnvFileReport, DEFAULT_ENV_FILE};
pub use types::{
    default_chairman_model, default_council_models, default_data_dir, CouncilConfig,
    CHAIRMAN_MODEL, COUNCIL_MODELS, DATA_DIR,
};
