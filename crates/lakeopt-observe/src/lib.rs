mod error;
pub use error::LogError;

mod settings;
pub use settings::{LogFormat, LogSettings};

mod setup;
pub use setup::init;
