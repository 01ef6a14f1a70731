use ljsim::{MemoryScene, Scenario, ScenarioConfig, Scene, Timers};
use ljsim::{bench_floor_gravity, bench_pairwise_step};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Print recorded (r, force) and (r, potential) samples as CSV
    #[arg(long)]
    dump_samples: bool,

    /// Run the step throughput benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_floor_gravity()?;
        bench_pairwise_step()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg, MemoryScene::new())?;

    let t_end = scenario.parameters.t_end;
    let mut timers = Timers::new();
    scenario.register_steps(&mut timers);
    log::info!("registered {} step callbacks", timers.len());

    let dispatched = timers.run_until(&mut scenario, t_end)?;
    log::info!("{} callbacks over {:.2}s simulated", dispatched, timers.clock());

    for body in &scenario.system.bodies {
        let position = scenario.scene.position(&body.handle)?;
        log::info!(
            "{}: position ({:.3}, {:.3}, {:.3}), velocity {:.3}, collided {}",
            body.name,
            position.x,
            position.y,
            position.z,
            body.velocity,
            body.collided
        );
    }

    if args.dump_samples {
        println!("r,force");
        for s in scenario.system.recorder.forces() {
            println!("{},{}", s.r, s.value);
        }
        println!("r,potential");
        for s in scenario.system.recorder.potentials() {
            println!("{},{}", s.r, s.value);
        }
    }

    Ok(())
}
