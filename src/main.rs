//! Application entry point.

use log::{error, info};
use winit::event_loop::{ControlFlow, EventLoop};

use star_collector::{App, GameConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Logger initialized");

    let config = GameConfig::from_env();
    info!("Assets from {}", config.asset_dir.display());

    let event_loop = EventLoop::new().map_err(|e| {
        error!("Failed to create event loop: {:?}", e);
        e
    })?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config).map_err(|e| {
        error!("Failed to load levels: {}", e);
        e
    })?;
    if let Err(e) = event_loop.run_app(&mut app) {
        error!("Application error: {:?}", e);
        return Err(Box::new(e));
    }

    Ok(())
}
