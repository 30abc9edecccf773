#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

//! Fixed GN argument profiles for Windows x64 ungoogled-chromium builds.
//!
//! Each module is self-contained: constant flag groups, a `flag_set()`
//! concatenating them, and a zero-argument `generate()` that wraps the
//! joined block in its comment header and footer. Output is identical on
//! every call.

pub mod fast;
pub mod fingerprint;
mod profile;
pub mod ungoogled;

pub use profile::{Profile, UnknownProfile};
