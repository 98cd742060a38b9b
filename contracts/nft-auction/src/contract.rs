use commons::{CustomContractError, HostRegistryExt, OnReceivingParams, ON_RECEIVING_CIS2};
use concordium_cis2::Receiver;
use concordium_std::*;

use crate::events::AuctionEvents;
use crate::external::*;
use crate::state::{Settlement, State};

/// Initialize a pending auction. The sender becomes the seller.
#[init(contract = "NftAuction", parameter = "InitParams")]
fn contract_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(State::new(state_builder, ctx.init_origin(), params))
}

/// Take custody of the asset and start the bidding window. The seller must
/// have made this contract an operator on the registry beforehand.
#[receive(mutable, contract = "NftAuction", name = "activate", enable_logger)]
fn contract_activate<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    host.state_mut().begin_activation(&ctx.sender())?;

    let asset = host.state().asset.clone();
    let seller = host.state().seller;
    let self_address = ctx.self_address();

    host.registry_transfer(
        &asset,
        Address::Account(seller),
        Receiver::Contract(
            self_address,
            OwnedEntrypointName::new_unchecked(ON_RECEIVING_CIS2.into()),
        ),
    )
    .map_err(|_| CustomContractError::ConstructionRefused)?;

    let owner = host
        .registry_owner_of(&asset)
        .map_err(|_| CustomContractError::ConstructionRefused)?;
    ensure_eq!(
        owner,
        Some(Address::Contract(self_address)),
        CustomContractError::ConstructionRefused.into()
    );

    let deadline = host
        .state_mut()
        .complete_activation(ctx.metadata().slot_time())?;

    logger.log(&AuctionEvents::activate(&asset, &seller, deadline))?;

    Ok(())
}

/// CIS-2 receive hook. Only the activation transfer of the auctioned token is accepted.
#[receive(
    contract = "NftAuction",
    name = "onReceivingCIS2",
    parameter = "OnReceivingParams"
)]
fn contract_on_receiving_cis2<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<()> {
    let params = OnReceivingParams::deserial(&mut ctx.parameter_cursor())?;
    host.state().check_incoming(&ctx.sender(), &params)?;
    Ok(())
}

/// Place a bid. The attached amount stays in escrow until the bid is
/// outbid and withdrawn, or paid to the seller on settlement.
#[receive(
    mutable,
    payable,
    contract = "NftAuction",
    name = "bid",
    enable_logger
)]
fn contract_bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let bidder = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    host.state_mut()
        .bid(ctx.metadata().slot_time(), bidder, amount)?;

    logger.log(&AuctionEvents::bid(&bidder, amount))?;

    Ok(())
}

/// Pay out everything owed to the sender from outbid bids.
#[receive(mutable, contract = "NftAuction", name = "withdraw", enable_logger)]
fn contract_withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let account = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    // Ledger entry is zeroed before the transfer
    let amount = host.state_mut().withdraw(&account)?;

    logger.log(&AuctionEvents::withdraw(&account, amount))?;

    host.invoke_transfer(&account, amount)
        .map_err(CustomContractError::from)?;

    Ok(())
}

/// Settle an expired auction. Anyone may call this.
#[receive(mutable, contract = "NftAuction", name = "endAuction", enable_logger)]
fn contract_end_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let settlement = host.state_mut().settle(ctx.metadata().slot_time())?;

    let asset = host.state().asset.clone();
    let self_address = Address::Contract(ctx.self_address());

    match settlement {
        Settlement::Winner {
            seller,
            winning_bid,
        } => {
            logger.log(&AuctionEvents::settle(
                Some(&winning_bid.account),
                &seller,
                winning_bid.amount,
            ))?;

            host.registry_transfer(
                &asset,
                self_address,
                Receiver::from_account(winning_bid.account),
            )
            .map_err(CustomContractError::from)?;
            host.invoke_transfer(&seller, winning_bid.amount)
                .map_err(CustomContractError::from)?;
        }
        Settlement::Unsold(seller) => {
            logger.log(&AuctionEvents::settle(None, &seller, Amount::zero()))?;

            host.registry_transfer(&asset, self_address, Receiver::from_account(seller))
                .map_err(CustomContractError::from)?;
        }
    }

    Ok(())
}

/// View the auction.
#[receive(contract = "NftAuction", name = "view", return_value = "AuctionView")]
fn contract_view<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<AuctionView> {
    Ok(host.state().view(ctx.metadata().slot_time()))
}

/// Amount owed to an account from outbid bids.
#[receive(
    contract = "NftAuction",
    name = "pendingReturns",
    parameter = "AccountAddress",
    return_value = "Amount"
)]
fn contract_pending_returns<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Amount> {
    let account = AccountAddress::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().pending_return(&account))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use crate::state::{AuctionState, Custody};
    use commons::{test::*, ContractTokenId, Token, TransferParameter};
    use concordium_cis2::{AdditionalData, TokenAmountU8, TokenIdVec};
    use concordium_std::test_infrastructure::*;
    use std::{cell::RefCell, rc::Rc};

    const REGISTRY: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const AUCTION: ContractAddress = ContractAddress {
        index: 2,
        subindex: 0,
    };
    const SELLER: AccountAddress = AccountAddress([0; 32]);
    const ALICE: AccountAddress = AccountAddress([1; 32]);
    const BOB: AccountAddress = AccountAddress([2; 32]);

    const START_MILLIS: u64 = 10_000;
    const DURATION_MINUTES: u64 = 60;

    /// Current owner of the asset as recorded by the mocked registry.
    type Ownership = Rc<RefCell<Address>>;

    fn asset() -> Token {
        Token {
            contract: REGISTRY,
            id: TokenIdVec(vec![42]),
        }
    }

    fn after(millis: u64) -> Timestamp {
        Timestamp::from_timestamp_millis(START_MILLIS + millis)
    }

    fn deadline() -> Timestamp {
        after(Duration::from_minutes(DURATION_MINUTES).millis())
    }

    fn ccd(micro_ccd: u64) -> Amount {
        Amount::from_micro_ccd(micro_ccd)
    }

    fn new_ctx<'a>(sender: Address, slot_time: Timestamp) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender)
            .set_self_address(AUCTION)
            .set_metadata_slot_time(slot_time);
        ctx
    }

    /// Registry mock moving the asset between owners. A transfer succeeds
    /// only if `from` is the current owner, and the auction is either the
    /// owner itself or was made an operator (`authorized`).
    fn setup_registry(
        host: &mut TestHost<State<TestStateApi>>,
        ownership: &Ownership,
        authorized: bool,
    ) {
        let owner = Rc::clone(ownership);
        host.setup_mock_entrypoint(
            REGISTRY,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_map_mock::<TransferParameter, (), _>(move |params| {
                for transfer in params.0.iter() {
                    let mut current = owner.borrow_mut();
                    let is_self = transfer.from == Address::Contract(AUCTION);
                    if transfer.token_id != asset().id
                        || transfer.from != *current
                        || !(is_self || authorized)
                    {
                        return None;
                    }
                    *current = transfer.to.address();
                }
                Some(())
            }),
        );

        let owner = Rc::clone(ownership);
        host.setup_mock_entrypoint(
            REGISTRY,
            OwnedEntrypointName::new_unchecked("ownerOf".into()),
            parse_and_map_mock::<ContractTokenId, Option<Address>, _>(move |token_id| {
                Some(if *token_id == asset().id {
                    Some(*owner.borrow())
                } else {
                    None
                })
            }),
        );
    }

    /// Host of a pending auction for `asset()` with the given reserve.
    fn pending_host(reserve: Amount) -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            asset: asset(),
            duration: Duration::from_minutes(DURATION_MINUTES),
            reserve,
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(SELLER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = contract_init(&ctx, &mut state_builder)
            .expect_report("Failed during init_NftAuction");

        TestHost::new(state, state_builder)
    }

    /// Host of an activated auction together with the registry ownership record.
    fn active_host(reserve: Amount) -> (TestHost<State<TestStateApi>>, Ownership) {
        let mut host = pending_host(reserve);
        let ownership = Rc::new(RefCell::new(Address::Account(SELLER)));
        setup_registry(&mut host, &ownership, true);

        let ctx = new_ctx(Address::Account(SELLER), after(0));
        let mut logger = TestLogger::init();
        let result = contract_activate(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        (host, ownership)
    }

    /// Bid on behalf of `bidder`. The attached amount is credited to the
    /// contract balance only if the bid succeeds.
    fn place_bid(
        host: &mut TestHost<State<TestStateApi>>,
        bidder: AccountAddress,
        amount: Amount,
        slot_time: Timestamp,
    ) -> ReceiveResult<()> {
        let ctx = new_ctx(Address::Account(bidder), slot_time);
        let mut logger = TestLogger::init();
        let balance = host.self_balance();
        host.set_self_balance(balance + amount);

        let result = contract_bid(&ctx, host, amount, &mut logger);
        if result.is_err() {
            host.set_self_balance(balance);
        }
        result
    }

    fn withdraw(
        host: &mut TestHost<State<TestStateApi>>,
        account: AccountAddress,
    ) -> ReceiveResult<()> {
        let ctx = new_ctx(Address::Account(account), after(1));
        let mut logger = TestLogger::init();
        contract_withdraw(&ctx, host, &mut logger)
    }

    fn end_auction(
        host: &mut TestHost<State<TestStateApi>>,
        slot_time: Timestamp,
    ) -> ReceiveResult<()> {
        let ctx = new_ctx(Address::Account(ALICE), slot_time);
        let mut logger = TestLogger::init();
        contract_end_auction(&ctx, host, &mut logger)
    }

    fn pending_returns(host: &TestHost<State<TestStateApi>>, account: AccountAddress) -> Amount {
        let bytes = to_bytes(&account);
        let mut ctx = new_ctx(Address::Account(account), after(0));
        ctx.set_parameter(&bytes);
        contract_pending_returns(&ctx, host).expect_report("pendingReturns failed")
    }

    #[concordium_test]
    fn test_init() {
        let host = pending_host(ccd(100_000));
        let ctx = new_ctx(Address::Account(ALICE), after(0));

        let view = contract_view(&ctx, &host).expect_report("view failed");
        claim_eq!(
            view,
            AuctionView {
                asset: asset(),
                seller: SELLER,
                reserve: ccd(100_000),
                duration: Duration::from_minutes(DURATION_MINUTES),
                deadline: None,
                custody: Custody::Pending,
                highest_bidder: None,
                highest_bid: Amount::zero(),
                settled: false,
                state: AuctionState::NotStarted,
            }
        );
    }

    #[concordium_test]
    fn test_activate() {
        let mut host = pending_host(Amount::zero());
        let ownership = Rc::new(RefCell::new(Address::Account(SELLER)));
        setup_registry(&mut host, &ownership, true);

        let ctx = new_ctx(Address::Account(SELLER), after(0));
        let mut logger = TestLogger::init();
        let result = contract_activate(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(*ownership.borrow(), Address::Contract(AUCTION));
        claim_eq!(host.state().custody, Custody::Held);
        claim_eq!(host.state().deadline, Some(deadline()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&AuctionEvents::activate(
                &asset(),
                &SELLER,
                deadline()
            ))]
        );
    }

    #[concordium_test]
    fn test_activate_by_non_seller() {
        let mut host = pending_host(Amount::zero());
        let ownership = Rc::new(RefCell::new(Address::Account(SELLER)));
        setup_registry(&mut host, &ownership, true);

        let ctx = new_ctx(Address::Account(ALICE), after(0));
        let mut logger = TestLogger::init();
        let result = contract_activate(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
        claim_eq!(*ownership.borrow(), Address::Account(SELLER));
        claim_eq!(host.state().custody, Custody::Pending);
    }

    #[concordium_test]
    fn test_activate_twice() {
        let (mut host, _ownership) = active_host(Amount::zero());

        let ctx = new_ctx(Address::Account(SELLER), after(1));
        let mut logger = TestLogger::init();
        let result = contract_activate(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::AlreadyActivated.into()));
        claim_eq!(host.state().deadline, Some(deadline()));
    }

    #[concordium_test]
    fn test_activate_without_operator_rights() {
        let mut host = pending_host(Amount::zero());
        let ownership = Rc::new(RefCell::new(Address::Account(SELLER)));
        setup_registry(&mut host, &ownership, false);

        let ctx = new_ctx(Address::Account(SELLER), after(0));
        let mut logger = TestLogger::init();
        let result = contract_activate(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::ConstructionRefused.into()));
        claim_eq!(*ownership.borrow(), Address::Account(SELLER));
        claim!(logger.logs.is_empty());
    }

    #[concordium_test]
    fn test_activate_token_not_owned_by_seller() {
        let mut host = pending_host(Amount::zero());
        let ownership = Rc::new(RefCell::new(Address::Account(BOB)));
        setup_registry(&mut host, &ownership, true);

        let ctx = new_ctx(Address::Account(SELLER), after(0));
        let mut logger = TestLogger::init();
        let result = contract_activate(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::ConstructionRefused.into()));
        claim_eq!(*ownership.borrow(), Address::Account(BOB));
    }

    /// A registry that accepts the transfer but still reports the seller as
    /// owner does not hand over custody.
    #[concordium_test]
    fn test_activate_custody_not_recorded() {
        let mut host = pending_host(Amount::zero());
        host.setup_mock_entrypoint(
            REGISTRY,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            parse_and_map_mock::<TransferParameter, (), _>(|_| Some(())),
        );
        host.setup_mock_entrypoint(
            REGISTRY,
            OwnedEntrypointName::new_unchecked("ownerOf".into()),
            parse_and_map_mock::<ContractTokenId, Option<Address>, _>(|_| {
                Some(Some(Address::Account(SELLER)))
            }),
        );

        let ctx = new_ctx(Address::Account(SELLER), after(0));
        let mut logger = TestLogger::init();
        let result = contract_activate(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::ConstructionRefused.into()));
        claim_eq!(host.state().deadline, None);
        claim!(logger.logs.is_empty());
    }

    #[concordium_test]
    fn test_on_receiving_cis2() {
        let mut host = pending_host(Amount::zero());
        let params = OnReceivingParams {
            token_id: asset().id,
            amount: TokenAmountU8(1),
            from: Address::Account(SELLER),
            data: AdditionalData::empty(),
        };
        let bytes = to_bytes(&params);

        let mut ctx = new_ctx(Address::Contract(REGISTRY), after(0));
        ctx.set_parameter(&bytes);
        claim_eq!(
            contract_on_receiving_cis2(&ctx, &host),
            Err(CustomContractError::Unauthorized.into())
        );

        host.state_mut()
            .begin_activation(&Address::Account(SELLER))
            .expect_report("Activation failed");
        claim_eq!(contract_on_receiving_cis2(&ctx, &host), Ok(()));

        let mut ctx = new_ctx(Address::Account(SELLER), after(0));
        ctx.set_parameter(&bytes);
        claim_eq!(
            contract_on_receiving_cis2(&ctx, &host),
            Err(CustomContractError::Unauthorized.into())
        );
    }

    #[concordium_test]
    fn test_bid_before_activation() {
        let mut host = pending_host(Amount::zero());

        let result = place_bid(&mut host, ALICE, ccd(200_000), after(0));

        claim_eq!(result, Err(CustomContractError::NotActivated.into()));
        claim_eq!(host.self_balance(), Amount::zero());
    }

    #[concordium_test]
    fn test_bid() {
        let (mut host, _ownership) = active_host(ccd(100_000));

        let ctx = new_ctx(Address::Account(ALICE), after(1));
        let mut logger = TestLogger::init();
        host.set_self_balance(ccd(200_000));
        let result = contract_bid(&ctx, &mut host, ccd(200_000), &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&AuctionEvents::bid(&ALICE, ccd(200_000)))]
        );

        let view = contract_view(&ctx, &host).expect_report("view failed");
        claim_eq!(view.highest_bidder, Some(ALICE));
        claim_eq!(view.highest_bid, ccd(200_000));
        claim_eq!(view.state, AuctionState::Active);
    }

    #[concordium_test]
    fn test_bid_from_contract() {
        let (mut host, _ownership) = active_host(Amount::zero());

        let ctx = new_ctx(Address::Contract(REGISTRY), after(1));
        let mut logger = TestLogger::init();
        let result = contract_bid(&ctx, &mut host, ccd(200_000), &mut logger);

        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }

    #[concordium_test]
    fn test_bid_amount_rules() {
        let (mut host, _ownership) = active_host(ccd(100_000));

        claim_eq!(
            place_bid(&mut host, ALICE, Amount::zero(), after(1)),
            Err(CustomContractError::BidTooLow.into())
        );
        claim_eq!(
            place_bid(&mut host, ALICE, ccd(50_000), after(1)),
            Err(CustomContractError::BidTooLow.into())
        );
        claim_eq!(place_bid(&mut host, ALICE, ccd(200_000), after(2)), Ok(()));
        claim_eq!(
            place_bid(&mut host, BOB, ccd(200_000), after(3)),
            Err(CustomContractError::BidNotHighEnough.into())
        );
        claim_eq!(
            place_bid(&mut host, BOB, ccd(300_000), deadline()),
            Err(CustomContractError::AuctionEnded.into())
        );
        claim_eq!(host.self_balance(), ccd(200_000));
        claim_eq!(pending_returns(&host, ALICE), Amount::zero());
    }

    #[concordium_test]
    fn test_auction_with_outbid_and_withdraw() {
        let (mut host, ownership) = active_host(ccd(100_000));

        claim_eq!(place_bid(&mut host, ALICE, ccd(200_000), after(1)), Ok(()));
        claim_eq!(place_bid(&mut host, BOB, ccd(300_000), after(2)), Ok(()));
        claim_eq!(pending_returns(&host, ALICE), ccd(200_000));
        claim_eq!(pending_returns(&host, BOB), Amount::zero());

        claim_eq!(withdraw(&mut host, ALICE), Ok(()));
        claim!(host.transfer_occurred(&ALICE, ccd(200_000)));
        claim_eq!(pending_returns(&host, ALICE), Amount::zero());
        claim_eq!(
            withdraw(&mut host, ALICE),
            Err(CustomContractError::NothingToWithdraw.into())
        );

        claim_eq!(
            end_auction(&mut host, after(3)),
            Err(CustomContractError::AuctionNotYetEnded.into())
        );

        claim_eq!(end_auction(&mut host, deadline()), Ok(()));
        claim_eq!(*ownership.borrow(), Address::Account(BOB));
        claim!(host.transfer_occurred(&SELLER, ccd(300_000)));
        claim!(host.state().settled);

        claim_eq!(
            end_auction(&mut host, deadline()),
            Err(CustomContractError::AuctionNotYetEnded.into())
        );
    }

    #[concordium_test]
    fn test_withdraw_from_contract() {
        let (mut host, _ownership) = active_host(Amount::zero());

        let ctx = new_ctx(Address::Contract(REGISTRY), after(1));
        let mut logger = TestLogger::init();
        let result = contract_withdraw(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }

    #[concordium_test]
    fn test_withdraw_after_settlement() {
        let (mut host, _ownership) = active_host(Amount::zero());

        claim_eq!(place_bid(&mut host, ALICE, ccd(1_000), after(1)), Ok(()));
        claim_eq!(place_bid(&mut host, BOB, ccd(2_000), after(2)), Ok(()));
        claim_eq!(place_bid(&mut host, ALICE, ccd(3_000), after(3)), Ok(()));
        claim_eq!(end_auction(&mut host, deadline()), Ok(()));

        let ctx = new_ctx(Address::Account(BOB), deadline());
        let mut logger = TestLogger::init();
        let result = contract_withdraw(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim!(host.transfer_occurred(&BOB, ccd(2_000)));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&AuctionEvents::withdraw(&BOB, ccd(2_000)))]
        );
        claim_eq!(pending_returns(&host, ALICE), ccd(1_000));
    }

    #[concordium_test]
    fn test_end_auction_without_bids() {
        let (mut host, ownership) = active_host(ccd(100_000));

        let ctx = new_ctx(Address::Account(BOB), deadline());
        let mut logger = TestLogger::init();
        let result = contract_end_auction(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(*ownership.borrow(), Address::Account(SELLER));
        claim!(!host.transfer_occurred(&SELLER, Amount::zero()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&AuctionEvents::settle(
                None,
                &SELLER,
                Amount::zero()
            ))]
        );

        let view = contract_view(&ctx, &host).expect_report("view failed");
        claim_eq!(view.state, AuctionState::Settled);
    }

    #[concordium_test]
    fn test_end_auction_before_activation() {
        let mut host = pending_host(Amount::zero());

        claim_eq!(
            end_auction(&mut host, deadline()),
            Err(CustomContractError::AuctionNotYetEnded.into())
        );
    }

    #[concordium_test]
    fn test_end_auction_registry_failure() {
        let (mut host, ownership) = active_host(Amount::zero());
        claim_eq!(place_bid(&mut host, ALICE, ccd(1_000), after(1)), Ok(()));

        // Registry no longer lists the auction as owner, so it refuses the transfer.
        *ownership.borrow_mut() = Address::Account(BOB);

        claim_eq!(
            end_auction(&mut host, deadline()),
            Err(CustomContractError::InvokeContractError.into())
        );
        claim!(!host.transfer_occurred(&SELLER, ccd(1_000)));
    }
}
