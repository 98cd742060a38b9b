use super::*;

/// The parameter for the registry function `mint`.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct MintParams {
    /// Identifier of the new token.
    pub token_id: ContractTokenId,
    /// Initial owner of the token.
    pub owner: Address,
}

/// The parameter for the registry `init` function.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct RegistryParams {
    /// Token metadata urls are this prefix followed by the hex encoded token ID.
    pub metadata_base_url: String,
}
