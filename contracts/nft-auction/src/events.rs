use commons::{Token, ACTIVATE_TAG, BIDING_TAG, SETTLE_TAG, WITHDRAW_TAG};
use concordium_std::*;

/// Activation event data.
#[derive(Debug, Serial)]
pub struct ActivateEvent<'a> {
    /// Auctioned registry token.
    pub asset: &'a Token,
    /// Seller account address.
    pub seller: &'a AccountAddress,
    /// Bids are accepted strictly before this time.
    pub deadline: Timestamp,
}

/// Bid event data.
#[derive(Debug, Serial)]
pub struct BidEvent<'a> {
    /// Bidder account address.
    pub bidder: &'a AccountAddress,
    /// Bid amount.
    pub amount: Amount,
}

/// Refund withdrawal event data.
#[derive(Debug, Serial)]
pub struct WithdrawEvent<'a> {
    pub account: &'a AccountAddress,
    pub amount: Amount,
}

/// Settlement event data.
#[derive(Debug, Serial)]
pub struct SettleEvent<'a> {
    /// Auction winner, `None` if no bids were placed.
    pub winner: Option<&'a AccountAddress>,
    /// Address of the previous token owner.
    pub seller: &'a AccountAddress,
    /// Amount paid to the seller.
    pub price: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum AuctionEvents<'a> {
    Activate(ActivateEvent<'a>),
    Bid(BidEvent<'a>),
    Withdraw(WithdrawEvent<'a>),
    Settle(SettleEvent<'a>),
}

impl<'a> AuctionEvents<'a> {
    pub fn activate(asset: &'a Token, seller: &'a AccountAddress, deadline: Timestamp) -> Self {
        Self::Activate(ActivateEvent {
            asset,
            seller,
            deadline,
        })
    }

    pub fn bid(bidder: &'a AccountAddress, amount: Amount) -> Self {
        Self::Bid(BidEvent { bidder, amount })
    }

    pub fn withdraw(account: &'a AccountAddress, amount: Amount) -> Self {
        Self::Withdraw(WithdrawEvent { account, amount })
    }

    pub fn settle(
        winner: Option<&'a AccountAddress>,
        seller: &'a AccountAddress,
        price: Amount,
    ) -> Self {
        Self::Settle(SettleEvent {
            winner,
            seller,
            price,
        })
    }
}

impl<'a> Serial for AuctionEvents<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            AuctionEvents::Activate(event) => {
                out.write_u8(ACTIVATE_TAG)?;
                event.serial(out)
            }
            AuctionEvents::Bid(event) => {
                out.write_u8(BIDING_TAG)?;
                event.serial(out)
            }
            AuctionEvents::Withdraw(event) => {
                out.write_u8(WITHDRAW_TAG)?;
                event.serial(out)
            }
            AuctionEvents::Settle(event) => {
                out.write_u8(SETTLE_TAG)?;
                event.serial(out)
            }
        }
    }
}
