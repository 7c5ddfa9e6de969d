mod loader;
mod model;

pub use loader::{
    ConfigFormat, ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAMES, LoadResult,
    RealFileSystem,
};
pub use model::{Config, DEFAULT_MAXCOLS, DEFAULT_MAXCOLS_SOFT, IncludePatterns, RawConfig};
