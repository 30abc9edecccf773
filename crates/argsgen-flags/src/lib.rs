#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

mod duplicate;
mod error;
mod flag;
mod scan;
mod set;

pub use duplicate::{find_duplicates, Duplicate, Occurrence};
pub use error::FlagError;
pub use flag::{Flag, FlagValue};
pub use scan::{scan, ScannedFlag};
pub use set::{FlagGroup, FlagSet};
