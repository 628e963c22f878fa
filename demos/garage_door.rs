//! Garage Door Controller
//!
//! This example runs the reference schedule through the door controller
//! and prints the resulting waveform.
//!
//! Key concepts:
//! - State advances by modular addition, not a transition table
//! - Outputs follow the register, so they lag the inputs by one cycle
//! - The sensor tripping while closing skips the door ahead to Opening
//!
//! Run with: cargo run --example garage_door
//! Set RUST_LOG=doorstep=debug to see every committed cycle.

use doorstep::core::State;
use doorstep::simulation::WaveformOptions;
use doorstep::SimulationConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doorstep=info")),
        )
        .init();

    println!("=== Garage Door Controller ===\n");

    let config = SimulationConfig::reference();
    for (name, pattern) in &config.signals {
        println!("  {name:<14} {pattern}");
    }
    println!();

    let trace = config.build()?.run()?;

    let states = trace.state_path();
    let path: Vec<&str> = states.iter().map(|s| s.name()).collect();
    println!("Register path: {}\n", path.join(" -> "));

    print!("{}", trace.render_waveform(&WaveformOptions::default()));

    println!("\nThe outputs are one cycle behind the inputs: at cycle 0 the button is");
    println!("pressed but the register still holds Closed, so the motor is pausing.");
    println!("The register only becomes Opening on the next clock edge.");

    println!("\n=== Example Complete ===");
    Ok(())
}
