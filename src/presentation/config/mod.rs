mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CacheBackend, CacheSettings, DatabaseSettings, GrammarProvider, GrammarSettings,
    LoggingSettings, ServerSettings, Settings, ValidationSettings,
};
