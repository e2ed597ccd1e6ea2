// ============================================
// Main - Точка входа
// ============================================

use winit::event_loop::{ControlFlow, EventLoop};

use terra::core::{App, EngineConfig};

fn main() -> Result<(), winit::error::EventLoopError> {
    env_logger::init();

    let config = EngineConfig::load_or_default("terra.json");
    log::info!(
        "starting: seed {}, render distance {}",
        config.seed,
        config.render_distance
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)
}
