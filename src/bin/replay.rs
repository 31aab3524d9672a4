// Replays a recorded game history through the decision engine and dumps a
// per-week per-role CSV trace. Handy for tuning: change a constant, replay
// the same game, diff the traces.

use std::env;
use std::path::{Path, PathBuf};

use beerbot::engine::{self, EngineConfig};
use beerbot::io::history::load_history;
use beerbot::io::reporting::{write_decision_trace, DecisionTraceRow};
use beerbot::model::Role;

fn main() {
    let mut args = env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: replay <history.json> [trace.csv]");
        std::process::exit(2);
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("decision_trace.csv"));

    if let Err(e) = run(Path::new(&input), &output) {
        eprintln!("replay failed: {e}");
        std::process::exit(1);
    }
}

fn run(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let history = load_history(input)?;
    println!("Loaded {} weeks from {}", history.len(), input.display());

    let config = EngineConfig::default();
    let mut rows = Vec::with_capacity(history.len() * Role::ALL.len());

    // Re-decide every week the way the live service saw it: on the history
    // prefix up to and including that week.
    for n in 1..=history.len() {
        let prefix = &history[..n];
        let week = prefix[n - 1].week.get().max(n as u32);
        for role in Role::ALL {
            let decision = engine::decide_for_role(prefix, role, &config);
            rows.push(DecisionTraceRow::new(week, &decision));
        }
    }

    write_decision_trace(output, &rows)?;
    println!("Wrote {} trace rows to {}", rows.len(), output.display());
    Ok(())
}
