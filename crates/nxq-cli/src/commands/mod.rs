// crates/nxq-cli/src/commands/mod.rs
//
// Command module declarations for the nxq CLI, plus the context every
// command runs with.

pub mod genesis;
pub mod schedule;
pub mod simulate;
pub mod state;

use crate::config::NodeConfig;
use crate::node::Node;
use crate::output::OutputFormat;

/// Settings shared by all commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: NodeConfig,
    pub output: OutputFormat,
    /// Run against a throwaway in-memory store instead of `data_dir`.
    pub memory: bool,
}

impl CommandContext {
    /// Open the node state, seeding a fresh store from the configured genesis.
    pub fn open_node(&self) -> Result<Node, Box<dyn std::error::Error>> {
        let genesis = self.config.load_genesis()?;
        let node = if self.memory {
            Node::open_memory(&genesis, self.config.blocks_per_day)?
        } else {
            Node::open_rocks(&self.config.db_path(), &genesis, self.config.blocks_per_day)?
        };
        Ok(node)
    }
}
