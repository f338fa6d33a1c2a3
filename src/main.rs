// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::info;

use takeoff_sim::physic_engine::config::PhysicConfig;
use takeoff_sim::physic_engine::PhysicEngineTakeoff;
use takeoff_sim::renderer_engine::Renderer;
use takeoff_sim::utils::show_rust_core_dependencies;
use takeoff_sim::window_engine::{GlfwWindowEngine, WindowEngine};
use takeoff_sim::Simulator;

const WINDOW_WIDTH: i32 = 400;
const WINDOW_HEIGHT: i32 = 600;
const WINDOW_TITLE: &str = "Rocket Takeoff Simulation";
const TARGET_FPS: f32 = 60.0;

/// Main entry point for the Rocket Takeoff Simulation application.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Rocket Takeoff Simulation...");

    show_rust_core_dependencies();

    let physic_config = PhysicConfig::from_file("assets/config/physic.toml").unwrap_or_default();
    info!("Physic config loaded:\n{:#?}", physic_config);

    // --------------------------
    // Initialisation des moteurs
    // --------------------------
    // 1. Init Window & Context
    let window_engine = GlfwWindowEngine::init(WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE)?;

    // 2. Init Renderer (now that GL context is ready)
    let renderer_engine = Renderer::new(WINDOW_WIDTH, WINDOW_HEIGHT)?;

    let physic_engine = PhysicEngineTakeoff::new(&physic_config, (WINDOW_WIDTH, WINDOW_HEIGHT));

    // 3. Init Simulator
    let mut simulator = Simulator::new(renderer_engine, physic_engine, window_engine, TARGET_FPS);
    simulator.run()?;
    simulator.close();

    Ok(())
}
