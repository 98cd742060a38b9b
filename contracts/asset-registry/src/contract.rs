use super::*;

/// Initialize contract instance with no tokens.
#[init(contract = "AssetRegistry", parameter = "RegistryParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params: RegistryParams = ctx.parameter_cursor().get()?;
    Ok(State::empty(state_builder, params.metadata_base_url))
}

/// Mint a new token with a given address as its owner.
/// Logs a `Mint` and a `TokenMetadata` event.
/// The url for the token metadata is the token ID encoded in hex, appended on
/// the metadata base url given on initialization.
///
/// It rejects if:
/// - The sender is not the contract instance owner.
/// - Fails to parse parameter.
/// - The token ID already exists.
/// - Fails to log Mint or TokenMetadata event.
#[receive(
    contract = "AssetRegistry",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        ctx.sender().matches_account(&ctx.owner()),
        ContractError::Unauthorized
    );

    let params: MintParams = ctx.parameter_cursor().get()?;

    host.state_mut().mint(params.token_id.clone(), params.owner)?;

    logger.log(&Cis2Event::Mint(MintEvent {
        token_id: params.token_id.clone(),
        amount: ContractTokenAmount::from(1u8),
        owner: params.owner,
    }))?;

    logger.log(&token_metadata_event(
        &host.state().metadata_base_url,
        params.token_id,
    ))?;

    Ok(())
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Invokes the receive hook of every contract receiving a token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not `from`, or an operator of `from`.
///     - The token is not owned by `from`.
/// - Fails to log event.
/// - Any of the contracts receiving a transfer rejects it.
#[receive(
    contract = "AssetRegistry",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    for transfer in transfers {
        let state = host.state_mut();
        ensure!(
            transfer.from == sender || state.is_operator(&transfer.from, &sender),
            ContractError::Unauthorized
        );

        let to_address = transfer.to.address();
        state.transfer(
            &transfer.token_id,
            transfer.amount,
            &transfer.from,
            &to_address,
        )?;

        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id.clone(),
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingParams {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )
            .map_err(CustomContractError::from)?;
        }
    }
    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event for each update.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    contract = "AssetRegistry",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    for param in params {
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address to
/// check as an operator of the owner address.
#[receive(
    contract = "AssetRegistry",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    let state = host.state();
    let response: Vec<bool> = params
        .queries
        .iter()
        .map(|query| state.is_operator(&query.owner, &query.address))
        .collect();

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "AssetRegistry",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Current owner of a token, `None` if it was never minted.
#[receive(
    contract = "AssetRegistry",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Option<Address>"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<Address>> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    Ok(host.state().owner_of(&token_id))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const AUCTION: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };
    const METADATA_BASE_URL: &str = "https://metadata.test/nft/";

    fn token_0() -> ContractTokenId {
        TokenIdVec(vec![0, 1])
    }

    fn token_1() -> ContractTokenId {
        TokenIdVec(vec![42, 84, 168])
    }

    fn quantity_1() -> ContractTokenAmount {
        ContractTokenAmount::from(1u8)
    }

    /// Test helper function which creates a host with two tokens with id
    /// `token_0` owned by `ADDRESS_0` and `token_1` owned by `ADDRESS_1`.
    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder, String::from(METADATA_BASE_URL));
        state
            .mint(token_0(), ADDRESS_0)
            .expect_report("Failed to mint token_0");
        state
            .mint(token_1(), ADDRESS_1)
            .expect_report("Failed to mint token_1");
        TestHost::new(state, state_builder)
    }

    fn transfer_parameter(from: Address, to: Receiver) -> TransferParameter {
        TransferParams(vec![Transfer {
            token_id: token_0(),
            amount: quantity_1(),
            from,
            to,
            data: AdditionalData::empty(),
        }])
    }

    /// Test initialization succeeds.
    #[concordium_test]
    fn test_init() {
        let mut ctx = TestInitContext::empty();
        let params = RegistryParams {
            metadata_base_url: String::from(METADATA_BASE_URL),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);
        let mut builder = TestStateBuilder::new();

        let state = init(&ctx, &mut builder).expect_report("Contract initialization failed");

        claim_eq!(
            state.tokens.iter().count(),
            0,
            "No token should be initialized"
        );
        claim_eq!(state.metadata_base_url, METADATA_BASE_URL);
    }

    /// Test minting, ensuring the new token is owned by the given address and
    /// the appropriate events are logged.
    #[concordium_test]
    fn test_mint() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0).set_owner(ACCOUNT_0);
        let params = MintParams {
            token_id: token_0(),
            owner: ADDRESS_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder, String::from(METADATA_BASE_URL));
        let mut host = TestHost::new(state, state_builder);

        let result = mint(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().owner_of(&token_0()), Some(ADDRESS_1));
        claim_eq!(
            logger.logs,
            vec![
                to_bytes(&Cis2Event::Mint(MintEvent {
                    owner: ADDRESS_1,
                    token_id: token_0(),
                    amount: quantity_1(),
                })),
                to_bytes(&Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(
                    TokenMetadataEvent {
                        token_id: token_0(),
                        metadata_url: MetadataUrl {
                            url: String::from("https://metadata.test/nft/0001"),
                            hash: None,
                        },
                    }
                )),
            ]
        );

        // Minting the same token again fails.
        let result = mint(&ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::TokenIdAlreadyExists.into())
        );
    }

    /// Test minting fails when the sender is not the contract owner.
    #[concordium_test]
    fn test_mint_not_owner() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_owner(ACCOUNT_0);
        let params = MintParams {
            token_id: token_0(),
            owner: ADDRESS_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder, String::from(METADATA_BASE_URL));
        let mut host = TestHost::new(state, state_builder);

        let result = mint(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(host.state().owner_of(&token_0()), None);
    }

    /// Test transfer succeeds, when `from` is the sender.
    #[concordium_test]
    fn test_transfer_account() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter = transfer_parameter(ADDRESS_0, Receiver::from_account(ACCOUNT_1));
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = default_host();

        let result = transfer(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().owner_of(&token_0()), Some(ADDRESS_1));
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                from: ADDRESS_0,
                to: ADDRESS_1,
                token_id: token_0(),
                amount: quantity_1(),
            })),
            "Incorrect event emitted"
        )
    }

    /// Test transfer token fails, when sender is neither the owner or an
    /// operator of the owner.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter = transfer_parameter(ADDRESS_0, Receiver::from_account(ACCOUNT_1));
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = default_host();

        let result = transfer(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(host.state().owner_of(&token_0()), Some(ADDRESS_0));
    }

    /// Test transfer of a token the `from` address does not own.
    #[concordium_test]
    fn test_transfer_not_owned() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter = transfer_parameter(ADDRESS_1, Receiver::from_account(ACCOUNT_0));
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = default_host();

        let result = transfer(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(ContractError::InsufficientFunds));
    }

    /// Test an operator moving a token into a contract, which accepts it
    /// through its receive hook.
    #[concordium_test]
    fn test_operator_transfer_to_contract() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(AUCTION));
        let parameter = transfer_parameter(
            ADDRESS_0,
            Receiver::Contract(
                AUCTION,
                OwnedEntrypointName::new_unchecked(ON_RECEIVING_CIS2.into()),
            ),
        );
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = default_host();
        let (state, state_builder) = host.state_and_builder();
        state.add_operator(&ADDRESS_0, &Address::Contract(AUCTION), state_builder);

        host.setup_mock_entrypoint(
            AUCTION,
            OwnedEntrypointName::new_unchecked(ON_RECEIVING_CIS2.into()),
            parse_and_check_mock::<OnReceivingParams, _>(
                |params| params.token_id == token_0() && params.from == ADDRESS_0,
                (),
            ),
        );

        let result = transfer(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            host.state().owner_of(&token_0()),
            Some(Address::Contract(AUCTION))
        );
    }

    /// Test a transfer fails when the receiving contract rejects the token.
    #[concordium_test]
    fn test_transfer_rejected_by_receiver() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter = transfer_parameter(
            ADDRESS_0,
            Receiver::Contract(
                AUCTION,
                OwnedEntrypointName::new_unchecked(ON_RECEIVING_CIS2.into()),
            ),
        );
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = default_host();

        host.setup_mock_entrypoint(
            AUCTION,
            OwnedEntrypointName::new_unchecked(ON_RECEIVING_CIS2.into()),
            parse_and_check_mock::<OnReceivingParams, _>(|_| false, ()),
        );

        let result = transfer(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::InvokeContractError.into()));
    }

    /// Test adding an operator succeeds and the appropriate event is logged.
    #[concordium_test]
    fn test_add_operator() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let update = UpdateOperator {
            update: OperatorUpdate::Add,
            operator: Address::Contract(AUCTION),
        };
        let parameter = UpdateOperatorParams(vec![update]);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = default_host();

        let result = update_operator(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim!(
            host.state()
                .is_operator(&ADDRESS_0, &Address::Contract(AUCTION)),
            "Account should be an operator"
        );
        claim_eq!(
            logger.logs,
            vec![to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                    UpdateOperatorEvent {
                        owner: ADDRESS_0,
                        operator: Address::Contract(AUCTION),
                        update: OperatorUpdate::Add,
                    }
                )
            )]
        );

        // Check the operatorOf query.
        let query = OperatorOfQueryParams {
            queries: vec![
                OperatorOfQuery {
                    owner: ADDRESS_0,
                    address: Address::Contract(AUCTION),
                },
                OperatorOfQuery {
                    owner: ADDRESS_1,
                    address: Address::Contract(AUCTION),
                },
            ],
        };
        let query_bytes = to_bytes(&query);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&query_bytes);

        let result = operator_of(&ctx, &host).expect_report("Failed getting result value");
        claim_eq!(result.0, vec![true, false]);
    }

    /// Test removing an operator.
    #[concordium_test]
    fn test_remove_operator() {
        let mut host = default_host();
        let (state, state_builder) = host.state_and_builder();
        state.add_operator(&ADDRESS_0, &ADDRESS_1, state_builder);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Remove,
            operator: ADDRESS_1,
        }]);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = update_operator(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim!(!host.state().is_operator(&ADDRESS_0, &ADDRESS_1));
    }

    /// Test balanceOf and ownerOf queries.
    #[concordium_test]
    fn test_queries() {
        let host = default_host();

        let query = ContractBalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: token_0(),
                    address: ADDRESS_0,
                },
                BalanceOfQuery {
                    token_id: token_1(),
                    address: ADDRESS_0,
                },
            ],
        };
        let query_bytes = to_bytes(&query);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&query_bytes);

        let result = balance_of(&ctx, &host).expect_report("Failed getting balances");
        claim_eq!(result.0, vec![quantity_1(), ContractTokenAmount::from(0u8)]);

        let token_bytes = to_bytes(&token_1());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&token_bytes);
        claim_eq!(owner_of(&ctx, &host), Ok(Some(ADDRESS_1)));

        let token_bytes = to_bytes(&TokenIdVec(vec![9]));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&token_bytes);
        claim_eq!(owner_of(&ctx, &host), Ok(None));
    }
}
