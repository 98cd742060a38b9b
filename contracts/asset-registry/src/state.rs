use super::*;

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Current owner of every minted token.
    pub tokens: StateMap<ContractTokenId, Address, S>,
    /// Operators enabled by each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Prefix of the token metadata urls.
    pub metadata_base_url: String,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn empty(state_builder: &mut StateBuilder<S>, metadata_base_url: String) -> Self {
        State {
            tokens: state_builder.new_map(),
            operators: state_builder.new_map(),
            metadata_base_url,
        }
    }

    /// Mints a new token owned by `owner`.
    pub fn mint(&mut self, token_id: ContractTokenId, owner: Address) -> ContractResult<()> {
        ensure!(
            self.tokens.get(&token_id).is_none(),
            CustomContractError::TokenIdAlreadyExists.into()
        );
        self.tokens.insert(token_id, owner);
        Ok(())
    }

    pub fn owner_of(&self, token_id: &ContractTokenId) -> Option<Address> {
        self.tokens.get(token_id).map(|owner| *owner)
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist in the state.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let owner = self.owner_of(token_id).ok_or(ContractError::InvalidTokenId)?;
        let amount: u8 = if owner == *address { 1 } else { 0 };
        Ok(ContractTokenAmount::from(amount))
    }

    /// Update the state with a transfer.
    /// Results in an error if the token ID does not exist in the state or if
    /// the from address has insufficient tokens to do the transfer.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        let mut owner = self
            .tokens
            .get_mut(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        // A transfer of zero tokens is a no-op.
        if amount == ContractTokenAmount::from(0u8) {
            return Ok(());
        }
        ensure!(
            amount == ContractTokenAmount::from(1u8),
            ContractError::InsufficientFunds
        );
        ensure!(*owner == *from, ContractError::InsufficientFunds);
        *owner = *to;
        Ok(())
    }

    /// Check if an address is an operator of a given owner address.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }

    /// Update the state adding a new operator for a given address.
    /// Succeeds even if the `operator` is already an operator for the
    /// `address`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is not an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        if let Some(mut operators) = self.operators.get_mut(owner) {
            operators.remove(operator);
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADDRESS_0: Address = Address::Account(AccountAddress([0u8; 32]));
    const ADDRESS_1: Address = Address::Account(AccountAddress([1u8; 32]));

    fn token_0() -> ContractTokenId {
        TokenIdVec(vec![0, 1])
    }

    fn amount(n: u8) -> ContractTokenAmount {
        ContractTokenAmount::from(n)
    }

    #[concordium_test]
    fn test_mint_twice() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder, String::new());

        claim_eq!(state.mint(token_0(), ADDRESS_0), Ok(()));
        claim_eq!(
            state.mint(token_0(), ADDRESS_1),
            Err(CustomContractError::TokenIdAlreadyExists.into())
        );
        claim_eq!(state.owner_of(&token_0()), Some(ADDRESS_0));
    }

    #[concordium_test]
    fn test_balance_and_transfer() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder, String::new());
        state
            .mint(token_0(), ADDRESS_0)
            .expect_report("Failed to mint token_0");

        claim_eq!(state.balance(&token_0(), &ADDRESS_0), Ok(amount(1)));
        claim_eq!(state.balance(&token_0(), &ADDRESS_1), Ok(amount(0)));
        claim_eq!(
            state.balance(&TokenIdVec(vec![9]), &ADDRESS_0),
            Err(ContractError::InvalidTokenId)
        );

        // Not owned by the `from` address.
        claim_eq!(
            state.transfer(&token_0(), amount(1), &ADDRESS_1, &ADDRESS_0),
            Err(ContractError::InsufficientFunds)
        );
        claim_eq!(
            state.transfer(&token_0(), amount(2), &ADDRESS_0, &ADDRESS_1),
            Err(ContractError::InsufficientFunds)
        );
        claim_eq!(
            state.transfer(&token_0(), amount(0), &ADDRESS_1, &ADDRESS_0),
            Ok(())
        );
        claim_eq!(state.owner_of(&token_0()), Some(ADDRESS_0));

        claim_eq!(
            state.transfer(&token_0(), amount(1), &ADDRESS_0, &ADDRESS_1),
            Ok(())
        );
        claim_eq!(state.owner_of(&token_0()), Some(ADDRESS_1));
    }

    #[concordium_test]
    fn test_operators() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder, String::new());

        claim!(!state.is_operator(&ADDRESS_0, &ADDRESS_1));
        state.add_operator(&ADDRESS_0, &ADDRESS_1, &mut state_builder);
        state.add_operator(&ADDRESS_0, &ADDRESS_1, &mut state_builder);
        claim!(state.is_operator(&ADDRESS_0, &ADDRESS_1));
        claim!(!state.is_operator(&ADDRESS_1, &ADDRESS_0));

        state.remove_operator(&ADDRESS_0, &ADDRESS_1);
        claim!(!state.is_operator(&ADDRESS_0, &ADDRESS_1));
        state.remove_operator(&ADDRESS_1, &ADDRESS_0);
    }
}
