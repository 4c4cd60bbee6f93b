//! Core UCD snapshot module

pub mod codec;
pub mod config;
pub mod format;
pub mod global;
pub mod lookup;
pub mod names;
pub mod reader;
pub mod types;
mod utils;

pub use config::{Compression, LoadOptions, VersionCheck};
pub use lookup::CharInfo;
pub use reader::UnicodeData;
pub use types::error::{Result, UcdError};
