// crates/nxq-cli/src/ticker.rs
//
// Epoch ticker for offline simulation.
//
// Stands in for the chain's epochs module: advances one day at a time,
// closing the running daily epoch and, every seventh day, the running
// weekly epoch. Each tick carries the number of the epoch that is
// *starting*, which is what epoch hooks receive on chain.

use serde::{Deserialize, Serialize};

use nxq_core::epoch::{DAY_EPOCH_ID, WEEK_EPOCH_ID};

const DAYS_PER_WEEK: u64 = 7;

/// One epoch boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochTick {
    pub identifier: &'static str,
    /// Number of the epoch that begins at this boundary.
    pub epoch_number: u64,
    /// Block height at the boundary.
    pub height: u64,
}

/// Position of the simulated epochs module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochTicker {
    blocks_per_day: u64,
    height: u64,
    current_day: u64,
    current_week: u64,
    days_into_week: u64,
}

impl EpochTicker {
    /// A ticker sitting inside day epoch 1 and week epoch 1.
    pub fn new(blocks_per_day: u64) -> Self {
        Self {
            blocks_per_day,
            height: 1,
            current_day: 1,
            current_week: 1,
            days_into_week: 0,
        }
    }

    pub fn current_day(&self) -> u64 {
        self.current_day
    }

    pub fn current_week(&self) -> u64 {
        self.current_week
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    /// Advance past one day boundary. Returns the daily tick, followed by a
    /// weekly tick when a week completes.
    pub fn advance_day(&mut self) -> Vec<EpochTick> {
        self.height += self.blocks_per_day;
        self.current_day += 1;
        self.days_into_week += 1;

        let mut ticks = vec![EpochTick {
            identifier: DAY_EPOCH_ID,
            epoch_number: self.current_day,
            height: self.height,
        }];

        if self.days_into_week == DAYS_PER_WEEK {
            self.days_into_week = 0;
            self.current_week += 1;
            ticks.push(EpochTick {
                identifier: WEEK_EPOCH_ID,
                epoch_number: self.current_week,
                height: self.height,
            });
        }

        tracing::trace!(
            "Day epoch {} started at block {} ({} ticks)",
            self.current_day,
            self.height,
            ticks.len()
        );
        ticks
    }
}
