mod settings;

pub use settings::{ApiConfig, Settings};
