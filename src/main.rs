mod app;
mod backend;
mod components;
mod config;
mod error;
mod image_pipeline;
mod message;
mod model;
mod utils;
mod views;

fn main() -> Result<(), error::StartupError> {
    app::run()
}
