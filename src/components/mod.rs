pub mod app;
pub mod controls_panel;
pub mod inventory_panel;
pub mod log_panel;
pub mod reset_modal;
pub mod shop_panel;
pub mod stats_panel;

pub use app::App;
