//! English auction for a single registry token.
//!
//! The seller initializes the contract, makes it an operator on the registry
//! and activates it, which moves the token into the contract's custody and
//! starts the clock. Bids are escrowed; outbid amounts are credited to a
//! ledger and pulled back with `withdraw`. Once the deadline passes anyone can
//! settle the auction.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod state;
