#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

pub mod check;
pub mod digest;
pub mod emit;
pub mod logging;
pub mod report;
