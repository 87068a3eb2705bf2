mod catalog;
mod components;
mod error;
mod model;
mod state;
mod storage;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
