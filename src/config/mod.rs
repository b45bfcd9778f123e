mod credentials;
mod loader;
mod types;

pub use credentials::{Credentials, SecureString};
pub use loader::ConfigError;
pub use types::{Config, LoaderSettings, MapperSettings};
