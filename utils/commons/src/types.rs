use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
pub type ContractTokenId = TokenIdVec;

/// Contract token amount type. Every registry token is unique, so the only
/// meaningful balances are 0 and 1.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

pub type TransferParameter = TransferParams<ContractTokenId, ContractTokenAmount>;

/// Parameter type for the CIS-2 function `balanceOf` specialized to the subset
/// of TokenIDs used by this contract.
pub type ContractBalanceOfQueryParams = BalanceOfQueryParams<ContractTokenId>;

/// Response type for the CIS-2 function `balanceOf` specialized to the subset
/// of TokenAmounts used by this contract.
pub type ContractBalanceOfQueryResponse = BalanceOfQueryResponse<ContractTokenAmount>;

/// Parameter of the `onReceivingCIS2` hook for registry tokens.
pub type OnReceivingParams = OnReceivingCis2Params<ContractTokenId, ContractTokenAmount>;
