pub mod ledger;
pub mod market;
pub mod mining;
pub mod shop;

pub use ledger::{push_log, recent};
pub use market::{InventoryRow, inventory_rows, sell_all};
pub use mining::{MineReport, mine};
pub use shop::{OfferStatus, ShopRow, buy_tool, shop_rows};
