mod actions;
mod api;
mod components;
mod config;
mod model;
mod session;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
