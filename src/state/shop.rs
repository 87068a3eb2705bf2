// Pickaxe shop: purchase rules and the rows shown in the purchase list
use super::ledger::push_log;
use crate::error::ActionError;
use crate::model::{PlayerState, ToolTier};
use crate::util::format_coins;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferStatus {
    /// Below the current tier.
    Owned,
    Current,
    /// Above the current tier and within the balance.
    Affordable,
    Locked,
}

impl OfferStatus {
    pub fn label(self) -> &'static str {
        match self {
            OfferStatus::Owned => "Owned",
            OfferStatus::Current => "Current",
            OfferStatus::Affordable => "Buy",
            OfferStatus::Locked => "Unavailable",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShopRow {
    pub index: usize,
    pub name: &'static str,
    pub power: f64,
    pub price: u32,
    pub status: OfferStatus,
}

pub fn offer_status(player: &PlayerState, tools: &[ToolTier], index: usize) -> OfferStatus {
    use std::cmp::Ordering::*;
    match index.cmp(&player.tier_index) {
        Less => OfferStatus::Owned,
        Equal => OfferStatus::Current,
        Greater => match tools.get(index) {
            Some(tool) if player.balance >= f64::from(tool.price) => OfferStatus::Affordable,
            _ => OfferStatus::Locked,
        },
    }
}

pub fn shop_rows(player: &PlayerState, tools: &[ToolTier]) -> Vec<ShopRow> {
    tools
        .iter()
        .enumerate()
        .map(|(index, tool)| ShopRow {
            index,
            name: tool.name,
            power: tool.power,
            price: tool.price,
            status: offer_status(player, tools, index),
        })
        .collect()
}

/// Upgrades to `index`. Rejections are logged and leave everything else unchanged.
pub fn buy_tool<'a>(
    player: &mut PlayerState,
    tools: &'a [ToolTier],
    index: usize,
    stamp: &str,
) -> Result<&'a ToolTier, ActionError> {
    let Some(tool) = tools.get(index) else {
        push_log(player, stamp, "No such pickaxe.");
        return Err(ActionError::UnknownTier(index));
    };
    if index <= player.tier_index {
        push_log(player, stamp, &format!("You already have a better or equal pickaxe than {}.", tool.name));
        return Err(ActionError::TierNotAbove { index, current: player.tier_index });
    }
    let price = f64::from(tool.price);
    if player.balance < price {
        push_log(
            player,
            stamp,
            &format!("Not enough coins for {}: need {}, have {}.", tool.name, tool.price, format_coins(player.balance)),
        );
        return Err(ActionError::InsufficientFunds { price: tool.price, balance: player.balance });
    }
    player.balance = (player.balance - price).max(0.0);
    player.tier_index = index;
    push_log(player, stamp, &format!("Bought {} for {} coins.", tool.name, tool.price));
    Ok(tool)
}
