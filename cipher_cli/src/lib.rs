pub mod args;
pub mod error;
pub mod io;
pub mod registry;
pub mod runner;

pub use error::CliError;
pub use registry::CipherKind;
