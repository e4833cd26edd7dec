pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod operation;
pub mod transport;

pub use client::MediaLiveClient;
pub use config::{ClientConfig, Config, read_config};
pub use error::{ClientError, ServiceError, ServiceErrorKind};
pub use medialive_api as api;
