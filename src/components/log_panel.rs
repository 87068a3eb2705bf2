use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LogPanelProps {
    pub entries: Vec<String>,
}

#[function_component]
pub fn LogPanel(props: &LogPanelProps) -> Html {
    html! {<div style="background:#1c2128; border:1px solid #30363d; border-radius:8px; padding:6px 8px; min-width:260px; font-size:12px; line-height:1.3;">
        { for props.entries.iter().map(|e| html!{ <div>{ e.clone() }</div> }) }
    </div>}
}
