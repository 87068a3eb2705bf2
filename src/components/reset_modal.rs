use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResetModalProps {
    pub show: bool,
    pub on_cancel: Callback<()>,
    pub on_confirm: Callback<()>,
}

#[function_component]
pub fn ResetModal(props: &ResetModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let cancel_cb = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let confirm_cb = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; inset:0; background:rgba(0,0,0,0.55); backdrop-filter:blur(2px); display:flex; align-items:center; justify-content:center; z-index:200;">
            <div style="width:360px; max-width:90%; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:18px 20px 16px 20px; display:flex; flex-direction:column; gap:14px;">
                <div style="font-size:16px; font-weight:600;">{"Reset Progress"}</div>
                <div style="font-size:13px; line-height:1.4; opacity:0.85;">
                    {"This will erase your coins, ore and pickaxes and delete the save. This cannot be undone. Are you sure you want to reset?"}
                </div>
                <div style="display:flex; gap:10px; justify-content:flex-end;">
                    <button onclick={cancel_cb} style="min-width:90px;">{"Cancel"}</button>
                    <button onclick={confirm_cb} style="min-width:110px; background:#b62324; border:1px solid #da3633;">{"Confirm Reset"}</button>
                </div>
            </div>
        </div>
    }
}
