// ============================================================================
// Runner Demo
// ============================================================================
//
// Usage: cargo run --example runner [--features logging] -- [n]

use factorial_fanout::prelude::*;

#[cfg(feature = "logging")]
fn init_logging() {
    if let Err(e) = factorial_fanout::utils::init_logging(tracing::Level::DEBUG) {
        eprintln!("{}", e);
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() {
    init_logging();

    let n = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<i64>() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("invalid n {:?}: {}", arg, e);
                std::process::exit(2);
            },
        },
        None => 100,
    };

    println!("=== Factorial Strategies (n={}) ===\n", n);

    if let Err(e) = FactorialRunner::stdout().run_signed(n) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Same batched run, printing the value instead of the placeholder
    println!("\n=== Batched With Value Rendering ===");
    let batched = FactorialStrategyBuilder::new()
        .batched_default()
        .render_values()
        .build_stdout();

    match batched {
        Ok(strategy) => {
            let _ = strategy.factorial_signed(n.min(30));
        },
        Err(e) => eprintln!("{}", e),
    }
}
