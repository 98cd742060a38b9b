use concordium_cis2::{AdditionalData, Receiver, Transfer, TransferParams};
use concordium_std::*;

use crate::{ContractReadError, ContractTokenAmount, Token};

/// Calls into an asset registry contract holding `Token`s.
pub trait HostRegistryExt<S>: HasHost<S> {
    /// Move a single unit of `token` from `from` to `to`. The host's own
    /// address must either be `from` or an operator of `from`.
    fn registry_transfer(
        &mut self,
        token: &Token,
        from: Address,
        to: Receiver,
    ) -> Result<(), CallContractError<Self::ReturnValueType>> {
        let parameter = TransferParams::from(vec![Transfer {
            token_id: token.id.clone(),
            amount: ContractTokenAmount::from(1u8),
            from,
            to,
            data: AdditionalData::empty(),
        }]);

        self.invoke_contract(
            &token.contract,
            &parameter,
            EntrypointName::new_unchecked("transfer"),
            Amount::zero(),
        )?;

        Ok(())
    }

    fn registry_owner_of(
        &self,
        token: &Token,
    ) -> Result<Option<Address>, ContractReadError<Self::ReturnValueType>> {
        let mut result = self
            .invoke_contract_read_only(
                &token.contract,
                &token.id,
                EntrypointName::new_unchecked("ownerOf"),
                Amount::zero(),
            )
            .map_err(ContractReadError::Call)?
            .ok_or(ContractReadError::Compatibility)?;

        <Option<Address>>::deserial(&mut result).map_err(|_| ContractReadError::Parse)
    }
}

impl<S, H: HasHost<S>> HostRegistryExt<S> for H {}
