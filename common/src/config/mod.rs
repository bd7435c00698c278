mod content_provider;
mod manager;
mod serializer;
mod validate;

pub use content_provider::{ConfigContentProvider, FileContentConfigProvider, InMemoryConfigProvider};
pub use manager::ConfigManager;
pub use serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::{check_range, Validate};
