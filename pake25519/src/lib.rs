#![no_std]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(test)]
extern crate std;

mod error;
mod field;
mod montgomery;

pub use crate::{
    error::{Error, Result},
    field::FieldElement,
    montgomery::{AffinePoint, Curve25519},
};

pub use x25519_dalek::X25519_BASEPOINT_BYTES;
