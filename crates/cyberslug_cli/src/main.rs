mod arena;
mod motion;

use anyhow::Context;
use arena::Arena;
use clap::Parser;
use cyberslug_agent::Agent;
use cyberslug_core::{OdorKind, Position, SlugConfig};
use motion::Kinematics;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the slug config file
    #[arg(short, long, default_value = "cyberslug.toml", env = "CYBERSLUG_CONFIG")]
    config: String,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// RNG seed for prey placement
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of Flab prey in the arena
    #[arg(long, default_value_t = 4)]
    flab: usize,

    /// Number of Hermi prey in the arena
    #[arg(long, default_value_t = 4)]
    hermi: usize,

    /// Arena side length
    #[arg(long, default_value_t = 600.0)]
    size: f64,

    /// Print the final agent snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let config = SlugConfig::load_or_default(&args.config);
    let mut agent = Agent::new(config).context("Invalid slug configuration")?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut arena = Arena::populate(args.size, args.size, args.flab, args.hermi, &mut rng);
    let start = Position::new(args.size / 2.0, args.size / 2.0, 0.0);
    let mut body = Kinematics::new(start, arena.width, arena.height);

    info!(
        "Simulating {} ticks: {} prey in a {}x{} arena (seed {})",
        args.ticks,
        arena.prey().len(),
        args.size,
        args.size,
        args.seed
    );

    for tick in 1..=args.ticks {
        let mouth_at = body.point();
        let signal = {
            let mouth = arena.mouth(mouth_at);
            agent
                .step(&arena, &mouth, &mut body)
                .with_context(|| format!("Tick {} failed", tick))?
        };
        arena.consume_near(mouth_at, &mut rng);

        if tick % 1000 == 0 {
            let state = agent.state();
            info!(
                "tick {}: nutrition={:.3} satiation={:.3} switch={:+.2} turn={:+.3} Vf={:.3} Vh={:.3}",
                tick,
                state.nutrition(),
                state.satiation(),
                state.appetite_switch(),
                signal.turn_cue,
                agent.learning().value(OdorKind::Flab),
                agent.learning().value(OdorKind::Hermi)
            );
        }
    }

    info!(
        "Done: travelled {:.1} units, ate {} Flab and {} Hermi",
        body.distance(),
        agent.feed_count(OdorKind::Flab),
        agent.feed_count(OdorKind::Hermi)
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&agent.snapshot())?);
    }

    Ok(())
}
