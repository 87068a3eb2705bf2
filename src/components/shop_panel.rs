use crate::state::{OfferStatus, ShopRow};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopPanelProps {
    pub rows: Vec<ShopRow>,
    pub on_buy: Callback<usize>,
}

#[function_component]
pub fn ShopPanel(props: &ShopPanelProps) -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:260px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Pickaxes"}</div>
        { for props.rows.iter().map(|row| {
            let enabled = row.status == OfferStatus::Affordable;
            let onclick = {
                let cb = props.on_buy.clone();
                let index = row.index;
                Callback::from(move |_| cb.emit(index))
            };
            html! {
                <div key={row.index} style="display:flex; align-items:center; gap:8px; margin:4px 0; font-size:13px;">
                    <span style="flex:1;">{ format!("{} (×{}) · {}🪙", row.name, row.power, row.price) }</span>
                    <button disabled={!enabled} onclick={onclick} style="min-width:96px;">{ row.status.label() }</button>
                </div>
            }
        }) }
    </div>}
}
