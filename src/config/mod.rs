mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{ConfigFiles, DiskConfigFiles};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{ChecksConfig, Config, FormatConfig, ScanConfig, StyleConfig, SyntaxConfig};
pub use validation::validate_config;
