mod config;
pub use config::RestConfig;

mod error;
pub use error::{ModelError, ModelResult};

mod resource;
pub use resource::{ResourceTagMap, ResourceType};

mod strategy;
pub use strategy::{BackoffStrategy, JitterStrategy, RetryStrategy};

pub mod rethinkdb;
pub mod wire;
