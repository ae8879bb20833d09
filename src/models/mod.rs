pub mod backend_kind;
pub mod config;
pub mod invocation;

pub use backend_kind::BackendKind;
pub use config::{AppConfig, CONFIG_ENV_VAR};
pub use invocation::{parse_light_flag, Invocation};
