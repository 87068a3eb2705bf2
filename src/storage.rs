//! Save/load of the player state. Storage is best-effort: anything unreadable is
//! treated as "no save" and the game starts from defaults.

use crate::model::PlayerState;
use crate::util::cwarn;

pub trait Store {
    fn load(&self) -> Option<PlayerState>;
    fn save(&self, player: &PlayerState);
    fn clear(&self);
}

/// Parses a save payload, rejecting anything inconsistent with `tool_count` tiers.
pub fn decode(raw: &str, tool_count: usize) -> Option<PlayerState> {
    match serde_json::from_str::<PlayerState>(raw) {
        Ok(player) if player.is_consistent(tool_count) => Some(player),
        Ok(player) => {
            cwarn(&format!(
                "discarding save: balance {} / tier {} out of range",
                player.balance, player.tier_index
            ));
            None
        }
        Err(e) => {
            cwarn(&format!("discarding unreadable save: {e}"));
            None
        }
    }
}

/// Browser `localStorage` under a fixed key.
pub struct LocalStore {
    key: &'static str,
    tool_count: usize,
}

impl LocalStore {
    pub fn new(key: &'static str, tool_count: usize) -> Self {
        Self { key, tool_count }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Store for LocalStore {
    fn load(&self) -> Option<PlayerState> {
        let raw = Self::storage()?.get_item(self.key).ok().flatten()?;
        decode(&raw, self.tool_count)
    }

    fn save(&self, player: &PlayerState) {
        if let Some(store) = Self::storage() {
            if let Ok(s) = serde_json::to_string(player) {
                let _ = store.set_item(self.key, &s);
            }
        }
    }

    fn clear(&self) {
        if let Some(store) = Self::storage() {
            let _ = store.remove_item(self.key);
        }
    }
}

/// In-memory store used in place of `localStorage` off the browser.
#[cfg(test)]
pub struct MemoryStore {
    slot: std::cell::RefCell<Option<String>>,
    tool_count: usize,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new(tool_count: usize) -> Self {
        Self { slot: std::cell::RefCell::new(None), tool_count }
    }

    pub fn put_raw(&self, raw: &str) {
        *self.slot.borrow_mut() = Some(raw.to_string());
    }
}

#[cfg(test)]
impl Store for MemoryStore {
    fn load(&self) -> Option<PlayerState> {
        let raw = self.slot.borrow().clone()?;
        decode(&raw, self.tool_count)
    }

    fn save(&self, player: &PlayerState) {
        if let Ok(s) = serde_json::to_string(player) {
            *self.slot.borrow_mut() = Some(s);
        }
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{TOOL_DEFS, builtin_ores};
    use crate::model::{Game, RewardPolicy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store() -> MemoryStore {
        MemoryStore::new(TOOL_DEFS.len())
    }

    #[test]
    fn test_saved_state_loads_back() {
        let s = store();
        let mut game = Game::new(RewardPolicy::SellToEarn, builtin_ores(), &TOOL_DEFS, StdRng::seed_from_u64(1));
        for _ in 0..30 {
            game.mine("t");
        }
        game.sell_all("t").unwrap();
        s.save(&game.player);
        assert_eq!(s.load(), Some(game.player.clone()));
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        assert_eq!(store().load(), None);
        let s = store();
        s.save(&PlayerState::default());
        s.clear();
        assert_eq!(s.load(), None);
    }

    #[test]
    fn test_corrupt_payloads_are_treated_as_absent() {
        let s = store();
        for raw in [
            "not json",
            "[1,2,3]",
            r#"{"balance":-4.0}"#,
            r#"{"tier_index":5}"#,
            r#"{"inventory":{"stone":-1}}"#,
            r#"{"log":"oops"}"#,
        ] {
            s.put_raw(raw);
            assert_eq!(s.load(), None, "accepted {raw}");
        }
    }

    #[test]
    fn test_partial_save_gets_defaults() {
        let s = store();
        s.put_raw(r#"{"balance":42.5,"inventory":{"gold":2}}"#);
        let game = Game::new(RewardPolicy::SellToEarn, builtin_ores(), &TOOL_DEFS, StdRng::seed_from_u64(1))
            .with_player(s.load());
        assert_eq!(game.player.balance, 42.5);
        assert_eq!(game.player.tier_index, 0);
        assert_eq!(game.player.count("gold"), 2);
        assert_eq!(game.player.count("stone"), 0);
        assert_eq!(game.player.inventory.len(), 5);
        assert!(game.player.log.is_empty());
    }
}
