//! It exposes all common structs and types shared by the auction and the
//! asset registry contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, registry::*, structs::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

#[cfg(feature = "test-utils")]
pub mod test;

mod constants;
mod errors;
mod registry;
mod structs;
mod types;
