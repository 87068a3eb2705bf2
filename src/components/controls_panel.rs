use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub on_mine: Callback<()>,
    pub on_sell_all: Callback<()>,
    /// Hidden when ore pays out on mining.
    pub show_sell: bool,
    pub sell_value: u64,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let mine_cb = {
        let cb = props.on_mine.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let sell_cb = {
        let cb = props.on_sell_all.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={mine_cb} style="font-size:18px; padding:12px 16px;">{"⛏ Mine"}</button>
        { if props.show_sell {
            html!{ <button onclick={sell_cb}>{ format!("Sell all ({} coins)", props.sell_value) }</button> }
        } else { html!{} } }
        <button onclick={reset_cb} style="background:#3b1d1d; border:1px solid #5d2d2d;">{"Reset Progress"}</button>
    </div>}
}
