// Custom event tags start below the tags reserved by CIS-2 (255 down to 251).

/// Tag for the auction Activate event.
pub const ACTIVATE_TAG: u8 = u8::MAX - 5;

/// Tag for the auction Bid event.
pub const BIDING_TAG: u8 = u8::MAX - 6;

/// Tag for the auction Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 7;

/// Tag for the auction Settle event.
pub const SETTLE_TAG: u8 = u8::MAX - 8;

/// Entrypoint of the auction that accepts incoming registry tokens.
pub const ON_RECEIVING_CIS2: &str = "onReceivingCIS2";

