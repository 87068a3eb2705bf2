//! Static game configuration: ore and pickaxe catalogs plus tuning constants.

use crate::error::CatalogError;
use crate::model::{OreType, RewardPolicy, ToolTier};
use rand::Rng;

/// localStorage key holding the serialized player state.
pub const STORAGE_KEY: &str = "minegame_v2_state";
/// Most recent event log entries kept in the save.
pub const LOG_CAP: usize = 200;
/// Event log entries shown in the log panel.
pub const LOG_VIEW: usize = 6;
/// Reward policy the browser build runs with.
pub const REWARD_POLICY: RewardPolicy = RewardPolicy::SellToEarn;

const CHANCE_TOLERANCE: f64 = 1e-4;

pub const ORE_DEFS: [OreType; 5] = [
    OreType { id: "stone", name: "Stone", value: 1, chance: 0.5 },
    OreType { id: "coal", name: "Coal", value: 3, chance: 0.3 },
    OreType { id: "iron", name: "Iron", value: 8, chance: 0.12 },
    OreType { id: "gold", name: "Gold", value: 15, chance: 0.06 },
    OreType { id: "diamond", name: "Diamond", value: 40, chance: 0.02 },
];

/// Ordered by increasing power and price. Tier 0 is owned from the start.
pub const TOOL_DEFS: [ToolTier; 5] = [
    ToolTier { id: "wood", name: "Wooden Pickaxe", power: 1.0, price: 0 },
    ToolTier { id: "stone", name: "Stone Pickaxe", power: 1.5, price: 50 },
    ToolTier { id: "iron", name: "Iron Pickaxe", power: 2.0, price: 150 },
    ToolTier { id: "gold", name: "Golden Pickaxe", power: 3.0, price: 400 },
    ToolTier { id: "diamond", name: "Diamond Pickaxe", power: 5.0, price: 1000 },
];

/// Ore catalog whose chances are guaranteed to sum to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct OreTable {
    ores: Vec<OreType>,
}

impl OreTable {
    /// Validates the catalog and renormalizes chances that drift from a total of 1.
    pub fn new(defs: &[OreType]) -> Result<Self, CatalogError> {
        if defs.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(bad) = defs.iter().find(|o| !o.chance.is_finite() || o.chance < 0.0) {
            return Err(CatalogError::InvalidChance(bad.id));
        }
        let sum: f64 = defs.iter().map(|o| o.chance).sum();
        if !(sum > 0.0 && sum.is_finite()) {
            return Err(CatalogError::NoWeight(sum));
        }
        let mut ores = defs.to_vec();
        if (sum - 1.0).abs() > CHANCE_TOLERANCE {
            for ore in &mut ores {
                ore.chance /= sum;
            }
        }
        Ok(Self { ores })
    }

    pub fn ores(&self) -> &[OreType] {
        &self.ores
    }

    pub fn get(&self, id: &str) -> Option<&OreType> {
        self.ores.iter().find(|o| o.id == id)
    }

    /// Inverse-CDF lookup: the first ore whose cumulative chance reaches `draw`.
    pub fn resolve(&self, draw: f64) -> &OreType {
        let mut acc = 0.0;
        for ore in &self.ores {
            acc += ore.chance;
            if draw <= acc {
                return ore;
            }
        }
        // cumulative sum can land just under 1.0
        &self.ores[self.ores.len() - 1]
    }

    /// Resolves one ore from a uniform draw in [0, 1).
    pub fn pick(&self, rng: &mut impl Rng) -> &OreType {
        self.resolve(rng.gen_range(0.0..1.0))
    }
}

/// The built-in ore table. Falls back to the raw catalog if validation ever fails.
pub fn builtin_ores() -> OreTable {
    OreTable::new(&ORE_DEFS).unwrap_or_else(|e| {
        crate::util::cwarn(&format!("ore catalog rejected: {e}"));
        OreTable { ores: ORE_DEFS.to_vec() }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const LOPSIDED: [OreType; 2] = [
        OreType { id: "a", name: "A", value: 1, chance: 3.0 },
        OreType { id: "b", name: "B", value: 2, chance: 1.0 },
    ];

    #[test]
    fn test_builtin_catalog_is_already_normalized() {
        let table = builtin_ores();
        assert_eq!(table.ores(), &ORE_DEFS);
        let sum: f64 = table.ores().iter().map(|o| o.chance).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_renormalizes_by_observed_sum() {
        let table = OreTable::new(&LOPSIDED).unwrap();
        assert!((table.ores()[0].chance - 0.75).abs() < 1e-12);
        assert!((table.ores()[1].chance - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_unusable_catalogs() {
        assert_eq!(OreTable::new(&[]), Err(CatalogError::Empty));
        let zero = [OreType { id: "z", name: "Z", value: 1, chance: 0.0 }];
        assert_eq!(OreTable::new(&zero), Err(CatalogError::NoWeight(0.0)));
        let negative = [
            OreType { id: "ok", name: "Ok", value: 1, chance: 1.0 },
            OreType { id: "neg", name: "Neg", value: 1, chance: -0.5 },
        ];
        assert_eq!(OreTable::new(&negative), Err(CatalogError::InvalidChance("neg")));
    }

    #[test]
    fn test_resolve_boundaries() {
        let table = builtin_ores();
        assert_eq!(table.resolve(0.0).id, "stone");
        assert_eq!(table.resolve(0.5).id, "stone");
        assert_eq!(table.resolve(0.51).id, "coal");
        assert_eq!(table.resolve(0.85).id, "iron");
        assert_eq!(table.resolve(0.95).id, "gold");
        assert_eq!(table.resolve(0.999).id, "diamond");
    }

    #[test]
    fn test_resolve_falls_back_to_last_entry() {
        // within tolerance, so no renormalization happens and the sum stays below 1
        let short = [
            OreType { id: "a", name: "A", value: 1, chance: 0.5 },
            OreType { id: "b", name: "B", value: 1, chance: 0.49995 },
        ];
        let table = OreTable::new(&short).unwrap();
        assert_eq!(table.resolve(0.99999).id, "b");
    }

    #[test]
    fn test_pick_frequencies_converge_to_chances() {
        let table = builtin_ores();
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let iterations = 100_000;
        let mut counts = [0u32; 5];
        for _ in 0..iterations {
            let ore = table.pick(&mut rng);
            let idx = ORE_DEFS.iter().position(|o| o.id == ore.id).unwrap();
            counts[idx] += 1;
        }
        for (ore, count) in ORE_DEFS.iter().zip(counts) {
            let freq = f64::from(count) / f64::from(iterations);
            assert!(
                (freq - ore.chance).abs() < 0.01,
                "{} frequency {} too far from {}",
                ore.id,
                freq,
                ore.chance
            );
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let table = builtin_ores();
        assert_eq!(table.get("gold").map(|o| o.value), Some(15));
        assert!(table.get("mithril").is_none());
    }
}
