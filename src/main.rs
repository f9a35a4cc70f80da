//! Rowboat - a headless sculling simulator
//!
//! Rows a single scull through a scripted stroke cycle at a fixed physics
//! rate and builds the surrounding procedural terrain.

use std::process::ExitCode;

use clap::Parser;

use rowboat::cli::Args;
use rowboat::sim::Simulation;
use rowboat::terrain::{self, export};
use rowboat::{config, Result};

fn run(args: &Args) -> Result<()> {
    let sim_config = args.resolve_config()?;

    if args.dump_config {
        println!("{}", config::to_ron(&sim_config)?);
        return Ok(());
    }

    if args.heightmap.is_some() || args.mesh_out.is_some() {
        let mesh = terrain::build_from_params(&sim_config.terrain);
        log::info!(
            "Terrain {}x{}: {} vertices, {} triangles",
            mesh.x_size,
            mesh.z_size,
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        if let Some(path) = &args.heightmap {
            export::write_heightmap_png(&mesh, path)?;
        }
        if let Some(path) = &args.mesh_out {
            export::write_mesh_buffers(&mesh, path)?;
        }
    }

    log::info!(
        "Rowing {:.1}s at {} spm ({} Hz ticks)",
        sim_config.duration_s,
        sim_config.stroke.rate_spm,
        sim_config.tick_hz
    );

    let mut sim = Simulation::new(sim_config)?;
    let summary = sim.run();

    println!("Ticks:          {}", summary.ticks);
    println!("Simulated:      {:.2} s", summary.simulated_s);
    println!("Distance:       {:.2} m", summary.distance_m);
    println!("Final speed:    {:.2} m/s", summary.final_speed_m_per_s);
    println!("Max speed:      {:.2} m/s", summary.max_speed_m_per_s);
    println!("Heading:        {:.2}°", summary.heading_deg);
    println!("Ground contacts: {}", summary.ground_contacts);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
