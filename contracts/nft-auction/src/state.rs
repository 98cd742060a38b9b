use commons::{CustomContractError, OnReceivingParams, Token};
use concordium_cis2::TokenAmountU8;
use concordium_std::*;

use crate::external::{AuctionView, InitParams};

/// Custody of the auctioned token.
#[derive(Debug, Clone, Copy, Serialize, SchemaType, PartialEq, Eq)]
pub enum Custody {
    /// The seller still owns the token.
    Pending,
    /// Activation transfer is in progress.
    Incoming,
    /// The auction owns the token.
    Held,
}

#[derive(Debug, Clone, Copy, Serialize, SchemaType, PartialEq, Eq)]
pub enum AuctionState {
    NotStarted,
    Active,
    Expired,
    Settled,
}

#[derive(Debug, Clone, Serialize, SchemaType, PartialEq, Eq)]
pub struct Bid {
    pub account: AccountAddress,
    pub amount: Amount,
}

/// Auction outcome. Token and funds must be transfered by the caller.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub enum Settlement {
    /// Highest bid
    Winner {
        seller: AccountAddress,
        winning_bid: Bid,
    },
    /// No bids were placed during the auction
    Unsold(AccountAddress),
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Auctioned registry token.
    pub asset: Token,
    /// Seller account address.
    pub seller: AccountAddress,
    /// Minimum first bid.
    pub reserve: Amount,
    /// Bidding window, counted from activation.
    pub duration: Duration,
    /// End of the bidding window. Set on activation.
    pub deadline: Option<Timestamp>,
    pub custody: Custody,
    /// Current highest bid.
    pub highest_bid: Option<Bid>,
    /// Outbid amounts owed to bidders.
    pub pending_returns: StateMap<AccountAddress, Amount, S>,
    pub settled: bool,
}

impl<S: HasStateApi> State<S> {
    /// Create a pending auction without any bids.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        seller: AccountAddress,
        params: InitParams,
    ) -> Self {
        State {
            asset: params.asset,
            seller,
            reserve: params.reserve,
            duration: params.duration,
            deadline: None,
            custody: Custody::Pending,
            highest_bid: None,
            pending_returns: state_builder.new_map(),
            settled: false,
        }
    }

    /// Get auction state at given slot_time
    pub fn auction_state(&self, slot_time: Timestamp) -> AuctionState {
        if self.settled {
            return AuctionState::Settled;
        }
        match (self.custody, self.deadline) {
            (Custody::Held, Some(deadline)) if slot_time < deadline => AuctionState::Active,
            (Custody::Held, Some(_)) => AuctionState::Expired,
            _ => AuctionState::NotStarted,
        }
    }

    /// First half of activation, performed before the token is pulled from the seller.
    pub fn begin_activation(&mut self, sender: &Address) -> Result<(), CustomContractError> {
        ensure!(
            sender.matches_account(&self.seller),
            CustomContractError::Unauthorized
        );
        ensure_eq!(
            self.custody,
            Custody::Pending,
            CustomContractError::AlreadyActivated
        );
        self.custody = Custody::Incoming;
        Ok(())
    }

    /// Second half of activation. Starts the bidding window and returns its deadline.
    pub fn complete_activation(
        &mut self,
        slot_time: Timestamp,
    ) -> Result<Timestamp, CustomContractError> {
        ensure_eq!(
            self.custody,
            Custody::Incoming,
            CustomContractError::NotActivated
        );
        let deadline = slot_time
            .checked_add(self.duration)
            .ok_or(CustomContractError::InvalidDuration)?;
        self.custody = Custody::Held;
        self.deadline = Some(deadline);
        Ok(deadline)
    }

    /// Check a token received through the CIS-2 hook.
    pub fn check_incoming(
        &self,
        sender: &Address,
        params: &OnReceivingParams,
    ) -> Result<(), CustomContractError> {
        ensure!(
            sender.matches_contract(&self.asset.contract),
            CustomContractError::Unauthorized
        );
        ensure_eq!(
            params.token_id,
            self.asset.id,
            CustomContractError::UnknownToken
        );
        ensure_eq!(
            params.amount,
            TokenAmountU8(1),
            CustomContractError::UnknownToken
        );
        ensure!(
            params.from.matches_account(&self.seller),
            CustomContractError::Unauthorized
        );
        ensure_eq!(
            self.custody,
            Custody::Incoming,
            CustomContractError::Unauthorized
        );
        Ok(())
    }

    pub fn bid(
        &mut self,
        slot_time: Timestamp,
        bidder: AccountAddress,
        amount: Amount,
    ) -> Result<(), CustomContractError> {
        match self.auction_state(slot_time) {
            AuctionState::NotStarted => bail!(CustomContractError::NotActivated),
            AuctionState::Expired | AuctionState::Settled => {
                bail!(CustomContractError::AuctionEnded)
            }
            AuctionState::Active => {}
        }
        ensure!(amount > Amount::zero(), CustomContractError::BidTooLow);

        match &self.highest_bid {
            None => ensure!(amount >= self.reserve, CustomContractError::BidTooLow),
            Some(previous) => ensure!(
                amount > previous.amount,
                CustomContractError::BidNotHighEnough
            ),
        }

        let bid = Bid {
            account: bidder,
            amount,
        };
        if let Some(previous) = self.highest_bid.replace(bid) {
            let mut owed = self
                .pending_returns
                .entry(previous.account)
                .or_insert_with(Amount::zero);
            *owed += previous.amount;
        }
        Ok(())
    }

    /// Zero the caller's ledger entry and return the amount that must be paid out.
    pub fn withdraw(&mut self, caller: &AccountAddress) -> Result<Amount, CustomContractError> {
        let mut owed = self
            .pending_returns
            .get_mut(caller)
            .ok_or(CustomContractError::NothingToWithdraw)?;
        let amount = *owed;
        ensure!(
            amount > Amount::zero(),
            CustomContractError::NothingToWithdraw
        );
        *owed = Amount::zero();
        Ok(amount)
    }

    /// Mark the auction settled. Must happen before any outgoing call.
    pub fn settle(&mut self, slot_time: Timestamp) -> Result<Settlement, CustomContractError> {
        ensure_eq!(
            self.auction_state(slot_time),
            AuctionState::Expired,
            CustomContractError::AuctionNotYetEnded
        );
        self.settled = true;

        Ok(match self.highest_bid.clone() {
            Some(winning_bid) => Settlement::Winner {
                seller: self.seller,
                winning_bid,
            },
            None => Settlement::Unsold(self.seller),
        })
    }

    pub fn pending_return(&self, account: &AccountAddress) -> Amount {
        self.pending_returns
            .get(account)
            .map(|owed| *owed)
            .unwrap_or_else(Amount::zero)
    }

    pub fn view(&self, slot_time: Timestamp) -> AuctionView {
        AuctionView {
            asset: self.asset.clone(),
            seller: self.seller,
            reserve: self.reserve,
            duration: self.duration,
            deadline: self.deadline,
            custody: self.custody,
            highest_bidder: self.highest_bid.as_ref().map(|bid| bid.account),
            highest_bid: self
                .highest_bid
                .as_ref()
                .map(|bid| bid.amount)
                .unwrap_or_else(Amount::zero),
            settled: self.settled,
            state: self.auction_state(slot_time),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_cis2::{AdditionalData, TokenIdVec};
    use concordium_std::test_infrastructure::*;

    const REGISTRY: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const SELLER: AccountAddress = AccountAddress([0; 32]);
    const ALICE: AccountAddress = AccountAddress([1; 32]);
    const BOB: AccountAddress = AccountAddress([2; 32]);
    const CAROL: AccountAddress = AccountAddress([3; 32]);

    const START_MILLIS: u64 = 1_000;
    const DURATION_MINUTES: u64 = 60;

    fn new_state(reserve: Amount) -> State<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        State::new(
            &mut state_builder,
            SELLER,
            InitParams {
                asset: Token {
                    contract: REGISTRY,
                    id: TokenIdVec(vec![7]),
                },
                duration: duration(),
                reserve,
            },
        )
    }

    fn duration() -> Duration {
        Duration::from_minutes(DURATION_MINUTES)
    }

    fn deadline() -> Timestamp {
        after(duration().millis())
    }

    fn after(millis: u64) -> Timestamp {
        Timestamp::from_timestamp_millis(START_MILLIS + millis)
    }

    fn active_state(reserve: Amount) -> State<TestStateApi> {
        let mut state = new_state(reserve);
        state
            .begin_activation(&Address::Account(SELLER))
            .expect_report("Activation failed");
        state
            .complete_activation(after(0))
            .expect_report("Activation failed");
        state
    }

    /// Total amount the auction owes to bidders, including the current leader.
    fn escrowed(state: &State<TestStateApi>) -> Amount {
        let owed = state
            .pending_returns
            .iter()
            .fold(Amount::zero(), |acc, (_, amount)| acc + *amount);
        owed + state
            .highest_bid
            .as_ref()
            .map(|bid| bid.amount)
            .unwrap_or_else(Amount::zero)
    }

    #[concordium_test]
    fn test_state_transitions() {
        let mut state = new_state(Amount::zero());
        claim_eq!(state.auction_state(after(0)), AuctionState::NotStarted);

        state
            .begin_activation(&Address::Account(SELLER))
            .expect_report("Activation failed");
        claim_eq!(state.custody, Custody::Incoming);
        claim_eq!(state.auction_state(after(0)), AuctionState::NotStarted);

        let deadline = state
            .complete_activation(after(0))
            .expect_report("Activation failed");
        claim_eq!(deadline, self::deadline());
        claim_eq!(state.deadline, Some(deadline));
        claim_eq!(state.auction_state(after(0)), AuctionState::Active);
        claim_eq!(
            state.auction_state(after(duration().millis() - 1)),
            AuctionState::Active
        );
        claim_eq!(state.auction_state(deadline), AuctionState::Expired);

        claim_eq!(state.settle(deadline), Ok(Settlement::Unsold(SELLER)));
        claim_eq!(state.auction_state(deadline), AuctionState::Settled);
    }

    #[concordium_test]
    fn test_activation_checks() {
        let mut state = new_state(Amount::zero());
        claim_eq!(
            state.begin_activation(&Address::Account(ALICE)),
            Err(CustomContractError::Unauthorized)
        );
        claim_eq!(
            state.begin_activation(&Address::Contract(REGISTRY)),
            Err(CustomContractError::Unauthorized)
        );
        claim_eq!(
            state.complete_activation(after(0)),
            Err(CustomContractError::NotActivated)
        );
        claim_eq!(state.custody, Custody::Pending);

        claim_eq!(state.begin_activation(&Address::Account(SELLER)), Ok(()));
        claim_eq!(
            state.begin_activation(&Address::Account(SELLER)),
            Err(CustomContractError::AlreadyActivated)
        );
    }

    #[concordium_test]
    fn test_activation_overflow() {
        let mut state = new_state(Amount::zero());
        state.duration = Duration::from_millis(u64::MAX);
        state
            .begin_activation(&Address::Account(SELLER))
            .expect_report("Activation failed");
        claim_eq!(
            state.complete_activation(after(0)),
            Err(CustomContractError::InvalidDuration)
        );
    }

    #[concordium_test]
    fn test_check_incoming() {
        let mut state = new_state(Amount::zero());
        let mut params = OnReceivingParams {
            token_id: TokenIdVec(vec![7]),
            amount: TokenAmountU8(1),
            from: Address::Account(SELLER),
            data: AdditionalData::empty(),
        };
        let registry = Address::Contract(REGISTRY);

        // Nothing is expected before activation starts.
        claim_eq!(
            state.check_incoming(&registry, &params),
            Err(CustomContractError::Unauthorized)
        );

        state
            .begin_activation(&Address::Account(SELLER))
            .expect_report("Activation failed");
        claim_eq!(state.check_incoming(&registry, &params), Ok(()));
        claim_eq!(
            state.check_incoming(&Address::Account(SELLER), &params),
            Err(CustomContractError::Unauthorized)
        );

        params.from = Address::Account(ALICE);
        claim_eq!(
            state.check_incoming(&registry, &params),
            Err(CustomContractError::Unauthorized)
        );

        params.from = Address::Account(SELLER);
        params.token_id = TokenIdVec(vec![8]);
        claim_eq!(
            state.check_incoming(&registry, &params),
            Err(CustomContractError::UnknownToken)
        );
    }

    #[concordium_test]
    fn test_bid_rules() {
        let reserve = Amount::from_micro_ccd(100_000);
        let mut state = new_state(reserve);
        claim_eq!(
            state.bid(after(0), ALICE, Amount::from_micro_ccd(200_000)),
            Err(CustomContractError::NotActivated)
        );

        let mut state = active_state(reserve);
        claim_eq!(
            state.bid(after(0), ALICE, Amount::zero()),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(
            state.bid(after(0), ALICE, Amount::from_micro_ccd(99_999)),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(state.bid(after(0), ALICE, reserve), Ok(()));
        claim_eq!(
            state.bid(after(1), BOB, reserve),
            Err(CustomContractError::BidNotHighEnough)
        );
        claim_eq!(
            state.bid(after(1), BOB, Amount::from_micro_ccd(50_000)),
            Err(CustomContractError::BidNotHighEnough)
        );
        claim_eq!(
            state.bid(deadline(), BOB, Amount::from_micro_ccd(500_000)),
            Err(CustomContractError::AuctionEnded)
        );

        // Rejected bids leave the leader untouched.
        claim_eq!(
            state.highest_bid,
            Some(Bid {
                account: ALICE,
                amount: reserve,
            })
        );
        claim_eq!(state.pending_return(&ALICE), Amount::zero());
    }

    #[concordium_test]
    fn test_zero_reserve_still_needs_positive_bid() {
        let mut state = active_state(Amount::zero());
        claim_eq!(
            state.bid(after(0), ALICE, Amount::zero()),
            Err(CustomContractError::BidTooLow)
        );
        claim_eq!(state.bid(after(0), ALICE, Amount::from_micro_ccd(1)), Ok(()));
    }

    #[concordium_test]
    fn test_bid_sequence_invariants() {
        let reserve = Amount::from_micro_ccd(1_000);
        let mut state = active_state(reserve);
        let bids = [
            (ALICE, 1_000),
            (BOB, 900),
            (BOB, 2_000),
            (CAROL, 2_000),
            (ALICE, 3_500),
            (ALICE, 4_000),
            (CAROL, 10_000),
            (BOB, 9_999),
        ];

        let mut received = Amount::zero();
        let mut last_highest = Amount::zero();
        for (i, (bidder, micro_ccd)) in bids.iter().enumerate() {
            let amount = Amount::from_micro_ccd(*micro_ccd);
            if state.bid(after(i as u64), *bidder, amount).is_ok() {
                received += amount;
            }
            let highest = state
                .highest_bid
                .as_ref()
                .map(|bid| bid.amount)
                .unwrap_or_else(Amount::zero);
            claim!(highest >= last_highest);
            claim!(highest >= reserve);
            claim!(escrowed(&state) <= received);
            last_highest = highest;
        }

        claim_eq!(
            state.highest_bid,
            Some(Bid {
                account: CAROL,
                amount: Amount::from_micro_ccd(10_000),
            })
        );
        claim_eq!(
            state.pending_return(&ALICE),
            Amount::from_micro_ccd(1_000 + 3_500 + 4_000)
        );
        claim_eq!(state.pending_return(&BOB), Amount::from_micro_ccd(2_000));
        claim_eq!(state.pending_return(&CAROL), Amount::zero());
        claim_eq!(escrowed(&state), received);
    }

    #[concordium_test]
    fn test_withdraw_once() {
        let mut state = active_state(Amount::zero());
        claim_eq!(
            state.withdraw(&ALICE),
            Err(CustomContractError::NothingToWithdraw)
        );
        state
            .bid(after(0), ALICE, Amount::from_micro_ccd(200_000))
            .expect_report("Bid failed");
        state
            .bid(after(0), BOB, Amount::from_micro_ccd(300_000))
            .expect_report("Bid failed");

        claim_eq!(state.withdraw(&ALICE), Ok(Amount::from_micro_ccd(200_000)));
        claim_eq!(state.pending_return(&ALICE), Amount::zero());
        claim_eq!(
            state.withdraw(&ALICE),
            Err(CustomContractError::NothingToWithdraw)
        );
        // The leader has nothing to withdraw.
        claim_eq!(
            state.withdraw(&BOB),
            Err(CustomContractError::NothingToWithdraw)
        );
    }

    #[concordium_test]
    fn test_settle() {
        let mut state = active_state(Amount::zero());
        state
            .bid(after(0), ALICE, Amount::from_micro_ccd(200_000))
            .expect_report("Bid failed");

        claim_eq!(
            state.settle(after(1)),
            Err(CustomContractError::AuctionNotYetEnded)
        );
        claim_eq!(
            state.settle(deadline()),
            Ok(Settlement::Winner {
                seller: SELLER,
                winning_bid: Bid {
                    account: ALICE,
                    amount: Amount::from_micro_ccd(200_000),
                },
            })
        );
        claim!(state.settled);
        claim_eq!(
            state.settle(deadline()),
            Err(CustomContractError::AuctionNotYetEnded)
        );
        claim_eq!(
            state.bid(deadline(), BOB, Amount::from_micro_ccd(300_000)),
            Err(CustomContractError::AuctionEnded)
        );
    }

    #[concordium_test]
    fn test_settle_pending_auction() {
        let mut state = new_state(Amount::zero());
        claim_eq!(
            state.settle(deadline()),
            Err(CustomContractError::AuctionNotYetEnded)
        );
        claim!(!state.settled);
    }
}
