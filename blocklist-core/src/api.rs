//! The API of blocklist-core.

mod configuration;
mod error;
mod record;

pub use configuration::{CompatibleConfiguration, Configuration, StrictConfiguration};
pub use error::Error;
pub use record::BlockRecord;
