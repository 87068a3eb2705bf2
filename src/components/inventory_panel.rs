use crate::state::InventoryRow;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InventoryPanelProps {
    pub rows: Vec<InventoryRow>,
}

#[function_component]
pub fn InventoryPanel(props: &InventoryPanelProps) -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Inventory"}</div>
        { for props.rows.iter().map(|row| html! {
            <div key={row.id} style="display:flex; gap:8px; margin:3px 0; font-size:13px;">
                <span style="flex:1;">{ format!("{} × {}", row.name, row.count) }</span>
                <span style="opacity:0.7; font-variant-numeric:tabular-nums;">{ format!("{}🪙 each", row.value) }</span>
            </div>
        }) }
    </div>}
}
