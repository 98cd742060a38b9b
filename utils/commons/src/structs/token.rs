use super::*;

/// A token held by a registry contract.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq, Clone)]
pub struct Token {
    /// Registry contract address.
    pub contract: ContractAddress,
    /// Token identifier within the registry.
    pub id: ContractTokenId,
}
