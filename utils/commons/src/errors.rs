use super::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Failing to mint new tokens because one of the token IDs already exists
    /// in this contract (Error code: -4).
    TokenIdAlreadyExists,
    /// Unknown token (Error code: -5).
    UnknownToken,
    /// Only account addresses can perform this action (Error code: -6).
    OnlyAccountAddress,
    /// Unauthorized (Error code: -7)
    Unauthorized,
    /// Failed to invoke a contract (Error code: -8).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -9).
    InvokeTransferError,
    /// Registry refused to move the asset into the auction's custody
    /// (Error code: -10).
    ConstructionRefused,
    /// Auction custody was already taken (Error code: -11).
    AlreadyActivated,
    /// Auction does not hold the asset yet (Error code: -12).
    NotActivated,
    /// Bid placed at or after the deadline (Error code: -13).
    AuctionEnded,
    /// First bid is zero or below the reserve (Error code: -14).
    BidTooLow,
    /// Bid does not strictly exceed the current highest bid (Error code: -15).
    BidNotHighEnough,
    /// Caller has no refundable balance (Error code: -16).
    NothingToWithdraw,
    /// Settlement before the deadline, or after the auction was already
    /// settled (Error code: -17).
    AuctionNotYetEnded,
    /// Deadline can not be represented (Error code: -18).
    InvalidDuration,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to CCD transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}

/// Failure of a read-only query to another contract.
#[derive(Debug)]
pub enum ContractReadError<R> {
    Call(CallContractError<R>),
    Compatibility,
    Parse,
}
