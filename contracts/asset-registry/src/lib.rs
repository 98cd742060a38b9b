//! A CIS-2 NFT registry holding the assets put up for auction.
//!
//! # Description
//! Every token has exactly one owner. Tokens are minted by the contract
//! owner and moved with the standard `transfer` function; when the receiver
//! is a contract, its receive hook is invoked and may reject the transfer.
//!
//! An address can enable and disable other addresses as operators. An
//! operator of some address is allowed to transfer any token owned by that
//! address, which is how a seller authorizes an auction to take custody.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{helper::*, state::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod contract;
mod helper;
mod state;
