use commons::Token;
use concordium_std::*;

use crate::state::{AuctionState, Custody};

#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct InitParams {
    /// Token to be auctioned.
    pub asset: Token,
    /// Length of the bidding window, counted from activation.
    pub duration: Duration,
    /// Smallest allowed first bid. Zero means no reserve.
    pub reserve: Amount,
}

/// The auction as returned by the `view` function.
#[derive(Debug, Clone, Serialize, SchemaType, PartialEq, Eq)]
pub struct AuctionView {
    pub asset: Token,
    pub seller: AccountAddress,
    pub reserve: Amount,
    pub duration: Duration,
    /// Unknown until the auction is activated.
    pub deadline: Option<Timestamp>,
    pub custody: Custody,
    pub highest_bidder: Option<AccountAddress>,
    /// Zero if there are no bids.
    pub highest_bid: Amount,
    pub settled: bool,
    /// State at the slot time of the query.
    pub state: AuctionState,
}
