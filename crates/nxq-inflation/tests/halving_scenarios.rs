// crates/nxq-inflation/tests/halving_scenarios.rs
//
// Multi-epoch scenarios for the epoch-end handler: the halving progression,
// reconciliation after governance parameter changes, disabled inflation,
// supply cap enforcement, and mint destination priority.
//
// The ticker passes the number of the epoch that is *starting*; helpers
// below take the ended epoch and add one.

use std::sync::Arc;

use nxq_core::amount::{Amount, ANXQ_PER_NXQ};
use nxq_core::context::BlockContext;
use nxq_core::epoch::{DAY_EPOCH_ID, WEEK_EPOCH_ID};
use nxq_core::traits::{BankKeeper, EpochHooks, EvmParamsReader};
use nxq_inflation::{
    DestinationSource, EpochOutcome, HalvingState, InMemoryBank, InflationKeeper, InflationParams,
    DEFAULT_MULTI_SIG_ADDRESS,
};
use nxq_store::MemoryStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const DAILY: Amount = 7200 * ANXQ_PER_NXQ;
const DENOM: &str = "anxq";
const MULTISIG: &str = "nxq1qgpqyqszqgpqyqszqgpqyqszqgpqyqsz5ekpet";
const EVM_MULTISIG: &str = "nxq1qyqszqgpqyqszqgpqyqszqgpqyqszqgp9asyja";

type TestKeeper = InflationKeeper<MemoryStore, InMemoryBank>;

struct FixedEvmParams(String);

impl EvmParamsReader for FixedEvmParams {
    fn multi_sig_address(&self) -> String {
        self.0.clone()
    }
}

fn params(halving_interval_epochs: u64) -> InflationParams {
    InflationParams {
        halving_interval_epochs,
        multi_sig_address: MULTISIG.to_string(),
        ..Default::default()
    }
}

fn setup(params: InflationParams, state: HalvingState) -> TestKeeper {
    setup_with_bank(params, state, InMemoryBank::new())
}

fn setup_with_bank(params: InflationParams, state: HalvingState, bank: InMemoryBank) -> TestKeeper {
    let mut keeper = InflationKeeper::new(MemoryStore::new(), bank);
    keeper.set_params(&params).expect("valid params");
    keeper.set_halving_data(&state).expect("store write");
    keeper
}

/// Run the daily tick that closes `ended_epoch`.
fn close_day(keeper: &mut TestKeeper, ended_epoch: u64) -> EpochOutcome {
    let mut ctx = BlockContext::new(ended_epoch);
    keeper
        .after_epoch_end(&mut ctx, DAY_EPOCH_ID, ended_epoch + 1)
        .expect("mint succeeds")
}

fn supply(keeper: &TestKeeper) -> Amount {
    keeper.bank().get_supply(DENOM)
}

// ---------------------------------------------------------------------------
// Halving progression
// ---------------------------------------------------------------------------

#[test]
fn test_progression_with_four_epoch_interval() {
    let mut keeper = setup(params(4), HalvingState::new(1));

    let expected = [
        (1, DAILY),
        (2, DAILY),
        (3, DAILY),
        (4, DAILY),
        (5, DAILY / 2),
        (6, DAILY / 2),
        (7, DAILY / 2),
        (8, DAILY / 2),
        (9, DAILY / 4),
    ];

    let mut total: Amount = 0;
    for (ended, amount) in expected {
        let before = supply(&keeper);
        close_day(&mut keeper, ended);
        let minted = supply(&keeper) - before;
        assert_eq!(minted, amount, "ended epoch {}", ended);
        total += minted;

        let state = keeper.get_halving_data().unwrap();
        match ended {
            1..=4 => assert_eq!(state, HalvingState::new(1)),
            5..=8 => {
                assert_eq!(state.current_period, 1);
                assert_eq!(state.last_halving_epoch, 5);
            }
            _ => {
                assert_eq!(state.current_period, 2);
                assert_eq!(state.last_halving_epoch, 9);
            }
        }
    }

    // 4 * 7200 + 4 * 3600 + 1800
    assert_eq!(total, 45_000 * ANXQ_PER_NXQ);
    assert_eq!(keeper.bank().balance(MULTISIG, DENOM), total);
}

#[test]
fn test_production_schedule_boundaries() {
    let mut keeper = setup(params(1461), HalvingState::new(1));

    let outcome = close_day(&mut keeper, 1461);
    assert_eq!(outcome.minted_amount(), DAILY);
    assert_eq!(keeper.get_halving_data().unwrap().current_period, 0);

    let outcome = close_day(&mut keeper, 1462);
    assert_eq!(outcome.minted_amount(), DAILY / 2);
    match outcome {
        EpochOutcome::Minted(report) => {
            assert!(report.natural_halving);
            assert_eq!(report.previous_period, 0);
            assert_eq!(report.period, 1);
        }
        other => panic!("expected a mint, got {:?}", other),
    }
    let state = keeper.get_halving_data().unwrap();
    assert_eq!(state.current_period, 1);
    assert_eq!(state.last_halving_epoch, 1462);

    assert_eq!(close_day(&mut keeper, 2922).minted_amount(), DAILY / 2);
    assert_eq!(close_day(&mut keeper, 2923).minted_amount(), DAILY / 4);
    let state = keeper.get_halving_data().unwrap();
    assert_eq!(state.current_period, 2);
    assert_eq!(state.last_halving_epoch, 2923);
}

#[test]
fn test_ticks_inside_a_period_leave_state_alone() {
    let mut keeper = setup(
        params(1461),
        HalvingState {
            current_period: 1,
            last_halving_epoch: 1462,
            start_epoch: 1,
        },
    );

    let outcome = close_day(&mut keeper, 1500);
    match outcome {
        EpochOutcome::Minted(report) => {
            assert!(!report.natural_halving);
            assert!(!report.period_mismatch);
        }
        other => panic!("expected a mint, got {:?}", other),
    }
    assert_eq!(keeper.get_halving_data().unwrap().last_halving_epoch, 1462);
}

// ---------------------------------------------------------------------------
// Reconciliation after governance changes
// ---------------------------------------------------------------------------

#[test]
fn test_interval_increase_rolls_period_back() {
    let mut keeper = setup(params(1461), HalvingState::new(1));
    close_day(&mut keeper, 1462);
    assert_eq!(keeper.get_halving_data().unwrap().current_period, 1);

    // Governance doubles the interval.
    keeper.set_params(&params(2922)).unwrap();

    let outcome = close_day(&mut keeper, 1826);
    match &outcome {
        EpochOutcome::Minted(report) => {
            assert!(!report.natural_halving, "no time-driven halving happened");
            assert!(report.period_mismatch);
            assert_eq!(report.previous_period, 1);
            assert_eq!(report.period, 0);
        }
        other => panic!("expected a mint, got {:?}", other),
    }
    assert_eq!(outcome.minted_amount(), DAILY);

    let state = keeper.get_halving_data().unwrap();
    assert_eq!(state.current_period, 0);
    // The natural-halving marker is untouched by reconciliation.
    assert_eq!(state.last_halving_epoch, 1462);
    assert_eq!(keeper.get_period().unwrap(), 0);
}

#[test]
fn test_interval_decrease_jumps_period_forward() {
    let mut keeper = setup(params(1461), HalvingState::new(1));
    close_day(&mut keeper, 100);

    // Interval shrinks to 30: ended epoch 101 lands in period 3.
    keeper.set_params(&params(30)).unwrap();
    let outcome = close_day(&mut keeper, 101);
    assert_eq!(outcome.minted_amount(), DAILY / 8);

    let state = keeper.get_halving_data().unwrap();
    assert_eq!(state.current_period, 3);
    assert_eq!(state.last_halving_epoch, 101);
}

#[test]
fn test_stale_stored_period_is_corrected() {
    // State claims period 5 but nothing in the schedule supports it.
    let mut keeper = setup(
        params(1461),
        HalvingState {
            current_period: 5,
            last_halving_epoch: 0,
            start_epoch: 1,
        },
    );

    let outcome = close_day(&mut keeper, 10);
    assert_eq!(outcome.minted_amount(), DAILY);
    assert_eq!(keeper.get_halving_data().unwrap().current_period, 0);
}

// ---------------------------------------------------------------------------
// Skip conditions
// ---------------------------------------------------------------------------

#[test]
fn test_disabled_inflation_counts_skipped_epochs() {
    let mut disabled = params(4);
    disabled.enable_inflation = false;
    let mut keeper = setup(disabled, HalvingState::new(1));

    for ended in 1..=10 {
        let outcome = close_day(&mut keeper, ended);
        assert_eq!(
            outcome,
            EpochOutcome::InflationDisabled {
                skipped_epochs: ended
            }
        );
    }

    assert_eq!(supply(&keeper), 0);
    assert_eq!(keeper.get_skipped_epochs().unwrap(), 10);
    assert_eq!(keeper.get_halving_data().unwrap(), HalvingState::new(1));
}

#[test]
fn test_supply_cap_blocks_mint() {
    let mut capped = params(1461);
    capped.max_supply = 10_000 * ANXQ_PER_NXQ;
    let bank = InMemoryBank::new().with_supply(DENOM, 9_000 * ANXQ_PER_NXQ);
    let mut keeper = setup_with_bank(capped, HalvingState::new(1), bank);

    let outcome = close_day(&mut keeper, 1);
    assert_eq!(
        outcome,
        EpochOutcome::SupplyCapReached {
            current_supply: 9_000 * ANXQ_PER_NXQ,
            emission: DAILY,
        }
    );
    assert_eq!(supply(&keeper), 9_000 * ANXQ_PER_NXQ);
}

#[test]
fn test_supply_cap_allows_exact_fill() {
    let mut capped = params(1461);
    capped.max_supply = 10_000 * ANXQ_PER_NXQ;
    let bank = InMemoryBank::new().with_supply(DENOM, 2_800 * ANXQ_PER_NXQ);
    let mut keeper = setup_with_bank(capped, HalvingState::new(1), bank);

    assert_eq!(close_day(&mut keeper, 1).minted_amount(), DAILY);
    assert_eq!(supply(&keeper), 10_000 * ANXQ_PER_NXQ);

    // Cap reached: the next day mints nothing.
    assert!(matches!(
        close_day(&mut keeper, 2),
        EpochOutcome::SupplyCapReached { .. }
    ));
}

#[test]
fn test_supply_cap_on_halving_boundary_changes_nothing() {
    let mut capped = params(1461);
    capped.max_supply = 10_000 * ANXQ_PER_NXQ;
    let bank = InMemoryBank::new().with_supply(DENOM, 1_800 * ANXQ_PER_NXQ);
    let mut keeper = setup_with_bank(capped, HalvingState::new(1), bank);

    // Last full-rate day fits: supply 9000 NXQ.
    assert_eq!(close_day(&mut keeper, 1461).minted_amount(), DAILY);

    // Ended epoch 1462 would be the first halved day, but 3600 NXQ does not
    // fit in the remaining 1000 NXQ.
    let mut ctx = BlockContext::new(1462);
    let outcome = keeper
        .after_epoch_end(&mut ctx, DAY_EPOCH_ID, 1463)
        .unwrap();
    assert_eq!(
        outcome,
        EpochOutcome::SupplyCapReached {
            current_supply: 9_000 * ANXQ_PER_NXQ,
            emission: DAILY / 2,
        }
    );

    // No halving recorded, mirrors still describe the previous mint.
    assert_eq!(keeper.get_halving_data().unwrap(), HalvingState::new(1));
    assert_eq!(keeper.get_period().unwrap(), 0);
    assert_eq!(keeper.get_epoch_mint_provision().unwrap(), DAILY);
    assert_eq!(supply(&keeper), 9_000 * ANXQ_PER_NXQ);
    assert!(ctx.events.events().is_empty());
}

#[test]
fn test_only_daily_ticks_mint() {
    let mut keeper = setup(params(1461), HalvingState::new(1));
    let mut ctx = BlockContext::new(1);

    for id in [WEEK_EPOCH_ID, "hour"] {
        let outcome = keeper.after_epoch_end(&mut ctx, id, 2).unwrap();
        assert_eq!(outcome, EpochOutcome::NonDailyEpoch);
    }
    assert_eq!(supply(&keeper), 0);

    keeper.after_epoch_end(&mut ctx, DAY_EPOCH_ID, 2).unwrap();
    assert_eq!(supply(&keeper), DAILY);
}

// ---------------------------------------------------------------------------
// Mint destination
// ---------------------------------------------------------------------------

#[test]
fn test_evm_params_address_wins_and_is_announced() {
    let mut keeper = setup(params(1461), HalvingState::new(1))
        .with_evm_params(Arc::new(FixedEvmParams(EVM_MULTISIG.to_string())));
    let mut ctx = BlockContext::new(1);

    let outcome = keeper.after_epoch_end(&mut ctx, DAY_EPOCH_ID, 2).unwrap();
    match outcome {
        EpochOutcome::Minted(report) => {
            assert_eq!(report.destination.source, DestinationSource::EvmParams);
            assert_eq!(report.destination.address, EVM_MULTISIG);
        }
        other => panic!("expected a mint, got {:?}", other),
    }
    assert_eq!(keeper.bank().balance(EVM_MULTISIG, DENOM), DAILY);
    assert_eq!(keeper.bank().balance(MULTISIG, DENOM), 0);

    let announced: Vec<_> = ctx
        .events
        .events_of_kind("mint")
        .filter_map(|e| e.attribute("multi_sig_address"))
        .collect();
    assert_eq!(announced, vec![EVM_MULTISIG]);
}

#[test]
fn test_empty_evm_params_fall_back_to_module_params() {
    let mut keeper = setup(params(1461), HalvingState::new(1))
        .with_evm_params(Arc::new(FixedEvmParams(String::new())));

    close_day(&mut keeper, 1);
    assert_eq!(keeper.bank().balance(MULTISIG, DENOM), DAILY);
}

#[test]
fn test_default_address_is_last_resort() {
    let mut no_address = params(1461);
    no_address.multi_sig_address = String::new();
    let mut keeper = setup(no_address, HalvingState::new(1));

    match close_day(&mut keeper, 1) {
        EpochOutcome::Minted(report) => {
            assert_eq!(report.destination.source, DestinationSource::Default);
        }
        other => panic!("expected a mint, got {:?}", other),
    }
    assert_eq!(keeper.bank().balance(DEFAULT_MULTI_SIG_ADDRESS, DENOM), DAILY);
}

// ---------------------------------------------------------------------------
// Hook adapter
// ---------------------------------------------------------------------------

#[test]
fn test_hooks_drive_a_week_of_ticks() {
    let mut keeper = setup(params(4), HalvingState::new(1));
    let mut ctx = BlockContext::new(1);

    {
        let mut hooks = keeper.hooks();
        for starting in 2..=8 {
            hooks.before_epoch_start(&mut ctx, DAY_EPOCH_ID, starting);
            hooks.after_epoch_end(&mut ctx, DAY_EPOCH_ID, starting);
        }
        hooks.after_epoch_end(&mut ctx, WEEK_EPOCH_ID, 2);
    }

    // Ended epochs 1..=4 at full rate, 5..=7 halved.
    assert_eq!(supply(&keeper), 4 * DAILY + 3 * (DAILY / 2));
    assert_eq!(ctx.events.events_of_kind("mint").count(), 7);
}

#[test]
#[should_panic(expected = "failed to mint and send to multi-sig")]
fn test_hooks_abort_when_recipient_is_unusable() {
    let mut keeper = setup(params(1461), HalvingState::new(1))
        .with_evm_params(Arc::new(FixedEvmParams("not-an-address".to_string())));
    let mut ctx = BlockContext::new(1);
    keeper.hooks().after_epoch_end(&mut ctx, DAY_EPOCH_ID, 2);
}
