//! Core data models for the mine clicker.
//! `Game` owns the player state and is driven by the Yew reducer; persistence
//! happens outside of it, after each action.

use crate::catalog::{LOG_CAP, OreTable};
use crate::error::ActionError;
use crate::state::{self, MineReport};
use crate::util::clog;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OreType {
    pub id: &'static str,
    pub name: &'static str,
    /// Coins per unit when sold.
    pub value: u32,
    /// Drop probability weight.
    pub chance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolTier {
    pub id: &'static str,
    pub name: &'static str,
    /// Expected mining attempts per click (>= 1).
    pub power: f64,
    pub price: u32,
}

/// How mined ore turns into coins. Exactly one policy is active per game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardPolicy {
    /// Mining only fills the inventory; coins come from selling it.
    SellToEarn,
    /// Each mine action pays out immediately with a power bonus.
    MineToEarn,
}

impl RewardPolicy {
    pub fn allows_selling(self) -> bool {
        matches!(self, RewardPolicy::SellToEarn)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerState {
    pub balance: f64,
    /// Index into the tool catalog; never decreases.
    pub tier_index: usize,
    /// Ore id -> units held.
    pub inventory: BTreeMap<String, u64>,
    /// Oldest first, capped at `LOG_CAP`.
    pub log: Vec<String>,
}

impl PlayerState {
    pub fn fresh(ores: &OreTable) -> Self {
        let mut player = Self::default();
        player.ensure_ore_keys(ores);
        player
    }

    /// Adds a zero count for every catalog ore the inventory does not know yet.
    pub fn ensure_ore_keys(&mut self, ores: &OreTable) {
        for ore in ores.ores() {
            self.inventory.entry(ore.id.to_string()).or_insert(0);
        }
    }

    pub fn count(&self, ore_id: &str) -> u64 {
        self.inventory.get(ore_id).copied().unwrap_or(0)
    }

    /// Whether a deserialized state can be trusted against a catalog of `tool_count` tiers.
    pub fn is_consistent(&self, tool_count: usize) -> bool {
        self.balance.is_finite() && self.balance >= 0.0 && self.tier_index < tool_count
    }
}

#[derive(Clone)]
pub struct Game {
    pub player: PlayerState,
    pub policy: RewardPolicy,
    pub ores: Rc<OreTable>,
    pub tools: &'static [ToolTier],
    rng: StdRng,
}

impl Game {
    pub fn new(policy: RewardPolicy, ores: OreTable, tools: &'static [ToolTier], rng: StdRng) -> Self {
        let player = PlayerState::fresh(&ores);
        Self { player, policy, ores: Rc::new(ores), tools, rng }
    }

    /// Installs a loaded save, or keeps the defaults when there is none.
    pub fn with_player(mut self, loaded: Option<PlayerState>) -> Self {
        if let Some(mut player) = loaded {
            player.ensure_ore_keys(&self.ores);
            if player.log.len() > LOG_CAP {
                let excess = player.log.len() - LOG_CAP;
                player.log.drain(..excess);
            }
            self.player = player;
        }
        self
    }

    pub fn current_tool(&self) -> &'static ToolTier {
        let tools = self.tools;
        &tools[self.player.tier_index.min(tools.len() - 1)]
    }

    pub fn mine(&mut self, stamp: &str) -> MineReport {
        let tool = self.current_tool();
        state::mine(&mut self.player, tool, &self.ores, self.policy, &mut self.rng, stamp)
    }

    pub fn buy(&mut self, index: usize, stamp: &str) -> Result<&'static ToolTier, ActionError> {
        state::buy_tool(&mut self.player, self.tools, index, stamp)
    }

    pub fn sell_all(&mut self, stamp: &str) -> Result<u64, ActionError> {
        state::sell_all(&mut self.player, &self.ores, self.policy, stamp)
    }

    pub fn boot(&mut self, stamp: &str) {
        state::push_log(&mut self.player, stamp, "Game loaded. Happy mining!");
    }

    pub fn reset(&mut self, stamp: &str) {
        self.player = PlayerState::fresh(&self.ores);
        state::push_log(&mut self.player, stamp, "Progress reset.");
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    Mine { stamp: String },
    Buy { index: usize, stamp: String },
    SellAll { stamp: String },
    /// Dispatched once after the save has been loaded.
    Boot { stamp: String },
    Reset { stamp: String },
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Mine { stamp } => {
                let report = new.mine(&stamp);
                clog(&format!("mine: {} attempts, +{} coins", report.attempts, report.earned));
            }
            Buy { index, stamp } => match new.buy(index, &stamp) {
                Ok(tool) => clog(&format!("bought {}", tool.id)),
                Err(e) => clog(&format!("purchase rejected: {e}")),
            },
            SellAll { stamp } => match new.sell_all(&stamp) {
                Ok(total) => clog(&format!("sold inventory for {total}")),
                Err(e) => clog(&format!("sell rejected: {e}")),
            },
            Boot { stamp } => new.boot(&stamp),
            Reset { stamp } => new.reset(&stamp),
        }
        Rc::new(new)
    }
}
