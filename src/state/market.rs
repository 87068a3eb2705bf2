// Liquidation of the ore inventory
use super::ledger::push_log;
use crate::catalog::OreTable;
use crate::error::ActionError;
use crate::model::{PlayerState, RewardPolicy};

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryRow {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u64,
    pub value: u32,
}

/// Catalog order, including ores the player has none of.
pub fn inventory_rows(player: &PlayerState, ores: &OreTable) -> Vec<InventoryRow> {
    ores.ores()
        .iter()
        .map(|ore| InventoryRow { id: ore.id, name: ore.name, count: player.count(ore.id), value: ore.value })
        .collect()
}

/// Σ count × value over the catalog.
pub fn liquidation_value(player: &PlayerState, ores: &OreTable) -> u64 {
    ores.ores()
        .iter()
        .map(|ore| player.count(ore.id).saturating_mul(u64::from(ore.value)))
        .fold(0u64, u64::saturating_add)
}

/// Sells the whole inventory at catalog value and credits the total.
pub fn sell_all(
    player: &mut PlayerState,
    ores: &OreTable,
    policy: RewardPolicy,
    stamp: &str,
) -> Result<u64, ActionError> {
    if !policy.allows_selling() {
        push_log(player, stamp, "Selling is disabled: ore pays out when mined.");
        return Err(ActionError::SellingDisabled);
    }
    let total = liquidation_value(player, ores);
    for ore in ores.ores() {
        if let Some(count) = player.inventory.get_mut(ore.id) {
            *count = 0;
        }
    }
    if total == 0 {
        push_log(player, stamp, "Nothing to sell.");
        return Err(ActionError::NothingToSell);
    }
    player.balance += total as f64;
    push_log(player, stamp, &format!("Sold ore for {total} coins."));
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_ores;

    fn stocked() -> PlayerState {
        let mut p = PlayerState::fresh(&builtin_ores());
        p.balance = 2.5;
        p.inventory.insert("stone".into(), 10);
        p.inventory.insert("iron".into(), 3);
        p.inventory.insert("diamond".into(), 1);
        p
    }

    #[test]
    fn test_sell_all_credits_exact_total_and_zeroes_counts() {
        let ores = builtin_ores();
        let mut p = stocked();
        assert_eq!(liquidation_value(&p, &ores), 10 + 24 + 40);
        assert_eq!(sell_all(&mut p, &ores, RewardPolicy::SellToEarn, "t"), Ok(74));
        assert_eq!(p.balance, 76.5);
        assert!(p.inventory.values().all(|&c| c == 0));
        assert_eq!(p.log.last().map(String::as_str), Some("[t] Sold ore for 74 coins."));
    }

    #[test]
    fn test_second_sell_yields_nothing() {
        let ores = builtin_ores();
        let mut p = stocked();
        sell_all(&mut p, &ores, RewardPolicy::SellToEarn, "").unwrap();
        let balance = p.balance;
        assert_eq!(sell_all(&mut p, &ores, RewardPolicy::SellToEarn, ""), Err(ActionError::NothingToSell));
        assert_eq!(p.balance, balance);
        assert_eq!(p.log.last().map(String::as_str), Some("Nothing to sell."));
    }

    #[test]
    fn test_selling_is_refused_under_mine_to_earn() {
        let ores = builtin_ores();
        let mut p = stocked();
        let before = p.inventory.clone();
        assert_eq!(sell_all(&mut p, &ores, RewardPolicy::MineToEarn, ""), Err(ActionError::SellingDisabled));
        assert_eq!(p.inventory, before);
        assert_eq!(p.balance, 2.5);
    }

    #[test]
    fn test_inventory_rows_follow_catalog_order() {
        let ores = builtin_ores();
        let rows = inventory_rows(&stocked(), &ores);
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["stone", "coal", "iron", "gold", "diamond"]);
        assert_eq!(rows[2], InventoryRow { id: "iron", name: "Iron", count: 3, value: 8 });
    }
}
