//! Headless simulation of a world running the openvox blocks.

use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod save;
pub mod sim;


pub fn main() {

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);
    if let Err(e) = ctrlc::set_handler(move || { let _ = stop_tx.try_send(()); }) {
        warn!("cannot set ctrl-c handler: {e}");
    }

    let mut sim = sim::Simulation::new(config::grave_config());
    sim.configure_table();

    let ticks = config::sim_ticks();
    info!("running simulation for {ticks} ticks");

    for tick in 0..ticks {

        if stop_rx.try_recv().is_ok() {
            info!("interrupted at tick {tick}");
            break;
        }

        if tick == ticks / 2 {
            sim.rob_grave();
        }

        sim.tick_padded();

    }

    info!("simulation stopped with {} entities", sim.world().get_entity_count());

    let path = config::save_path();
    match save::save(sim.world(), path) {
        Ok(count) => info!("saved {count} block entities to {}", path.display()),
        Err(e) => {
            error!("failed to save block entities to {}: {e}", path.display());
            std::process::exit(1);
        }
    }

    match save::load(sim.world_mut(), path) {
        Ok(count) => info!("reloaded {count} block entities from {}", path.display()),
        Err(e) => {
            error!("failed to reload block entities from {}: {e}", path.display());
            std::process::exit(1);
        }
    }

}
