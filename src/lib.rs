//! Small Windows-flavoured command line utilities: `wls`, `wla` and `wfile`.

pub mod alias;
pub mod cli;
pub mod detect;
pub mod error;
pub mod filesystem;
pub mod listing;
pub mod utils;

pub use error::{Error, Result};
