use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod config;
mod decorations;
mod frame;
mod game;
mod orbit;
mod pick;
mod popup;
mod scene_builder;
mod starfield;
use game::PortfolioOrrery;

orrery_web::export_game!(PortfolioOrrery, "portfolio-orrery");
