// Demonstration: run a baseline policy on Deep Sea Treasure and print metrics.
//
// Run from the repo root:
//   RUST_LOG=debug cargo run --example treasure_demo -- --map concave --policy random --episodes 20

use std::env;

use deep_sea_treasure::{
    DeepSeaTreasure, Direction, EnvConfig, EvaluationMetrics, MapChoice, Policy, RandomPolicy,
    ScriptedPolicy, TextRenderer,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let map = match arg_value(&args, "--map").unwrap_or("default") {
        "default" => MapChoice::Default,
        "concave" => MapChoice::Concave,
        other => {
            eprintln!("Unknown --map '{}'; expected 'default' or 'concave'.", other);
            std::process::exit(2);
        }
    };
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(25);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut policy: Box<dyn Policy> = match arg_value(&args, "--policy").unwrap_or("random") {
        "random" => Box::new(RandomPolicy::new(seed)),
        "dive" => Box::new(ScriptedPolicy::new(vec![
            Direction::Right,
            Direction::Right,
            Direction::Down,
        ])),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'random' or 'dive'.", other);
            std::process::exit(2);
        }
    };

    let mut env = match DeepSeaTreasure::new(EnvConfig::default().with_map(map)) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    print!("{}", TextRenderer::new(true).render(&env.snapshot()));

    match EvaluationMetrics::evaluate_default(&mut env, policy.as_mut(), episodes) {
        Ok(metrics) => {
            println!("Policy: {}", policy.name());
            println!("{}", metrics);
        }
        Err(e) => eprintln!("Evaluation failed: {e}"),
    }
    env.close();
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
