// crates/nxq-cli/src/node.rs
//
// A minimal single-process chain: the inflation keeper, a simulated epochs
// module, and an in-memory bank whose supply is persisted between runs.
//
// Store layout (one database, prefixed per module):
//   - `inflation/...` -> InflationKeeper keys
//   - `epochs/Ticker` -> EpochTicker
//   - `bank/Supply/{denom}` -> amount string

use serde::{Deserialize, Serialize};

use nxq_core::amount::{as_string, Amount};
use nxq_core::context::BlockContext;
use nxq_core::error::NxqError;
use nxq_core::traits::BankKeeper;
use nxq_inflation::keeper::KEY_PARAMS;
use nxq_inflation::{EpochOutcome, GenesisState, InMemoryBank, InflationKeeper, MODULE_NAME};
use nxq_store::{KvStore, MemoryStore, RocksStore};

use crate::ticker::{EpochTick, EpochTicker};

const EPOCHS_MODULE: &str = "epochs";
const BANK_MODULE: &str = "bank";
const KEY_TICKER: &[u8] = b"Ticker";

pub type DynStore = Box<dyn KvStore>;

#[derive(Serialize, Deserialize)]
struct StoredSupply(#[serde(with = "as_string")] Amount);

fn supply_key(denom: &str) -> Vec<u8> {
    format!("Supply/{}", denom).into_bytes()
}

/// Result of handing one tick to the inflation module.
#[derive(Debug, Clone, Serialize)]
pub struct TickRecord {
    pub identifier: String,
    pub epoch_number: u64,
    pub height: u64,
    pub outcome: EpochOutcome,
}

pub struct Node {
    pub keeper: InflationKeeper<DynStore, InMemoryBank>,
    pub ticker: EpochTicker,
    epochs: DynStore,
    bank: DynStore,
}

impl Node {
    /// Open the node on RocksDB at `db_path`, seeding it with `genesis` if
    /// the inflation module has never been initialized there.
    pub fn open_rocks(
        db_path: &str,
        genesis: &GenesisState,
        blocks_per_day: u64,
    ) -> Result<Self, NxqError> {
        let db = RocksStore::open(db_path)?;
        tracing::info!("Opened node state at {}", db_path);
        Self::open(
            Box::new(db.prefixed(MODULE_NAME)),
            Box::new(db.prefixed(EPOCHS_MODULE)),
            Box::new(db.prefixed(BANK_MODULE)),
            genesis,
            blocks_per_day,
        )
    }

    /// A throwaway node seeded with `genesis`.
    pub fn open_memory(genesis: &GenesisState, blocks_per_day: u64) -> Result<Self, NxqError> {
        Self::open(
            Box::new(MemoryStore::new()),
            Box::new(MemoryStore::new()),
            Box::new(MemoryStore::new()),
            genesis,
            blocks_per_day,
        )
    }

    fn open(
        inflation: DynStore,
        epochs: DynStore,
        bank: DynStore,
        genesis: &GenesisState,
        blocks_per_day: u64,
    ) -> Result<Self, NxqError> {
        let mut keeper = InflationKeeper::new(inflation, InMemoryBank::new());
        if keeper.store().get(KEY_PARAMS)?.is_none() {
            keeper.init_genesis(genesis)?;
        }

        let denom = keeper.get_params()?.mint_denom;
        let supply: Option<StoredSupply> = bank.get_json(&supply_key(&denom))?;
        *keeper.bank_mut() = InMemoryBank::new().with_supply(&denom, supply.map_or(0, |s| s.0));

        let ticker = epochs
            .get_json(KEY_TICKER)?
            .unwrap_or_else(|| EpochTicker::new(blocks_per_day));

        Ok(Self {
            keeper,
            ticker,
            epochs,
            bank,
        })
    }

    /// Total supply of the module's mint denom.
    pub fn supply(&self) -> Result<Amount, NxqError> {
        let denom = self.keeper.get_params()?.mint_denom;
        Ok(self.keeper.bank().get_supply(&denom))
    }

    /// Advance one day, running every resulting epoch boundary through the
    /// inflation module.
    pub fn advance_day(&mut self) -> Result<Vec<TickRecord>, NxqError> {
        self.ticker
            .advance_day()
            .into_iter()
            .map(|tick| self.apply_tick(tick))
            .collect()
    }

    /// Advance `days` days, saving the ticker and supply after each one.
    pub fn advance_days(&mut self, days: u64) -> Result<Vec<TickRecord>, NxqError> {
        let mut records = Vec::new();
        for _ in 0..days {
            records.extend(self.advance_day()?);
            self.save()?;
        }
        Ok(records)
    }

    fn apply_tick(&mut self, tick: EpochTick) -> Result<TickRecord, NxqError> {
        let mut ctx = BlockContext::new(tick.height);
        let outcome = self
            .keeper
            .after_epoch_end(&mut ctx, tick.identifier, tick.epoch_number)?;
        self.keeper
            .before_epoch_start(&mut ctx, tick.identifier, tick.epoch_number);

        for event in ctx.events.events() {
            tracing::debug!(kind = %event.kind, attributes = ?event.attributes, "event");
        }

        Ok(TickRecord {
            identifier: tick.identifier.to_string(),
            epoch_number: tick.epoch_number,
            height: tick.height,
            outcome,
        })
    }

    /// Persist the ticker position and bank supply.
    pub fn save(&mut self) -> Result<(), NxqError> {
        self.epochs.set_json(KEY_TICKER, &self.ticker)?;
        let denom = self.keeper.get_params()?.mint_denom;
        let supply = self.keeper.bank().get_supply(&denom);
        self.bank.set_json(&supply_key(&denom), &StoredSupply(supply))
    }
}
