use super::{
    controls_panel::ControlsPanel, inventory_panel::InventoryPanel, log_panel::LogPanel,
    reset_modal::ResetModal, shop_panel::ShopPanel, stats_panel::StatsPanel,
};
use crate::catalog::{LOG_VIEW, REWARD_POLICY, STORAGE_KEY, TOOL_DEFS, builtin_ores};
use crate::model::{Game, GameAction};
use crate::state::market::liquidation_value;
use crate::state::{inventory_rows, recent, shop_rows};
use crate::storage::{LocalStore, Store};
use crate::util::{clock_stamp, seed_rng};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| LocalStore::new(STORAGE_KEY, TOOL_DEFS.len()));
    let game = {
        let store = store.clone();
        use_reducer(move || {
            Game::new(REWARD_POLICY, builtin_ores(), &TOOL_DEFS, seed_rng()).with_player(store.load())
        })
    };
    let saved = use_state_eq(|| false);
    let show_reset = use_state(|| false);

    // Announce the load once
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            game.dispatch(GameAction::Boot { stamp: clock_stamp() });
            || ()
        });
    }
    // Commit after every mutation
    {
        let store = store.clone();
        let saved = saved.clone();
        use_effect_with(game.player.clone(), move |player| {
            store.save(player);
            saved.set(true);
            || ()
        });
    }

    let on_mine = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Mine { stamp: clock_stamp() }))
    };
    let on_sell_all = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::SellAll { stamp: clock_stamp() }))
    };
    let on_buy = {
        let game = game.clone();
        Callback::from(move |index: usize| game.dispatch(GameAction::Buy { index, stamp: clock_stamp() }))
    };
    let open_reset = {
        let show_reset = show_reset.clone();
        Callback::from(move |_| show_reset.set(true))
    };
    let cancel_reset = {
        let show_reset = show_reset.clone();
        Callback::from(move |_| show_reset.set(false))
    };
    let confirm_reset = {
        let store = store.clone();
        let game = game.clone();
        let show_reset = show_reset.clone();
        Callback::from(move |_| {
            store.clear();
            game.dispatch(GameAction::Reset { stamp: clock_stamp() });
            show_reset.set(false);
        })
    };

    let player = &game.player;
    let tool = game.current_tool();
    let save_status = if *saved { "Autosave (saved)" } else { "Autosave" };

    html! {
        <div id="root" style="position:relative; min-height:100vh; background:#0d1117; color:#c9d1d9; padding:16px; box-sizing:border-box; display:flex; flex-wrap:wrap; gap:12px; align-items:flex-start;">
            <div style="display:flex; flex-direction:column; gap:12px;">
                <StatsPanel
                    balance={player.balance}
                    tool_name={tool.name}
                    tool_power={tool.power}
                    save_status={save_status}
                />
                <ControlsPanel
                    on_mine={on_mine}
                    on_sell_all={on_sell_all}
                    show_sell={game.policy.allows_selling()}
                    sell_value={liquidation_value(player, &game.ores)}
                    on_reset={open_reset}
                />
            </div>
            <InventoryPanel rows={inventory_rows(player, &game.ores)} />
            <ShopPanel rows={shop_rows(player, game.tools)} on_buy={on_buy} />
            <LogPanel entries={recent(player, LOG_VIEW).to_vec()} />
            <ResetModal show={*show_reset} on_cancel={cancel_reset} on_confirm={confirm_reset} />
        </div>
    }
}
