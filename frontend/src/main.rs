use crate::app::App;

mod app;
mod components;
mod helpers;
mod logger;
mod routing;
mod services;
mod tops_sheet;

fn main() {
    logger::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
