// Mine action: attempt roll, ore resolution and payout
use super::ledger::push_log;
use crate::catalog::OreTable;
use crate::model::{OreType, PlayerState, RewardPolicy, ToolTier};
use crate::util::format_coins;
use rand::Rng;

/// What a single mine action produced.
#[derive(Clone, Debug, PartialEq)]
pub struct MineReport {
    pub attempts: u32,
    /// (ore id, units) in order of first appearance.
    pub drops: Vec<(&'static str, u32)>,
    /// Coins credited by this action (always 0 under `SellToEarn`).
    pub earned: f64,
}

/// `floor(power)` attempts plus one more with probability `frac(power)`.
/// Whole powers never consume a random draw.
pub fn roll_attempts(power: f64, rng: &mut impl Rng) -> u32 {
    let base = power.floor();
    let frac = power - base;
    let extra = if frac > 0.0 && rng.gen_range(0.0..1.0) < frac { 1 } else { 0 };
    base as u32 + extra
}

/// Payout multiplier applied to raw ore value under `MineToEarn`.
pub fn reward_multiplier(power: f64) -> f64 {
    power * 0.6 + 0.4
}

pub fn mine(
    player: &mut PlayerState,
    tool: &ToolTier,
    ores: &OreTable,
    policy: RewardPolicy,
    rng: &mut impl Rng,
    stamp: &str,
) -> MineReport {
    let attempts = roll_attempts(tool.power, rng);
    let mut drops: Vec<(&OreType, u32)> = Vec::new();
    for _ in 0..attempts {
        let ore = ores.pick(rng);
        let count = player.inventory.entry(ore.id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        match drops.iter_mut().find(|(o, _)| o.id == ore.id) {
            Some((_, n)) => *n += 1,
            None => drops.push((ore, 1)),
        }
    }

    let raw_value: u64 = drops.iter().map(|(o, n)| u64::from(o.value) * u64::from(*n)).sum();
    let earned = match policy {
        RewardPolicy::SellToEarn => 0.0,
        RewardPolicy::MineToEarn => raw_value as f64 * reward_multiplier(tool.power),
    };
    player.balance += earned;

    let summary = drops
        .iter()
        .map(|(o, n)| format!("{}×{}", o.name, n))
        .collect::<Vec<_>>()
        .join(", ");
    let text = match policy {
        RewardPolicy::SellToEarn => format!("Mined: {summary}. No coins credited, sell your ore!"),
        RewardPolicy::MineToEarn => format!("Mined: {summary} (+{} coins)", format_coins(earned)),
    };
    push_log(player, stamp, &text);

    MineReport {
        attempts,
        drops: drops.into_iter().map(|(o, n)| (o.id, n)).collect(),
        earned,
    }
}
