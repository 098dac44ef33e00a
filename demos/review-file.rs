use std::{env, fs, process};

use redline_text::{ChangeId, Decision, FieldReview, render_word_diff};
use tracing_subscriber::EnvFilter;

/// Reviews the changes turning one file into another, accepting the changes
/// listed on the command line and declining the rest.
///
/// Run it with:
/// `cargo run --example review-file current.txt proposed.txt [accepted change ids...]`
///
/// Set `RUST_LOG=redline_text=debug` to see what the engine is doing.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: review-file <current> <proposed> [accepted change ids...]");
        process::exit(1);
    }

    let current = read(&args[1]);
    let proposed = read(&args[2]);

    let accepted = args[3..]
        .iter()
        .map(|id| {
            id.parse::<usize>().unwrap_or_else(|e| {
                eprintln!("Invalid change id {id}: {e}");
                process::exit(1);
            })
        })
        .collect::<Vec<_>>();

    let mut review = FieldReview::new(current, proposed);

    eprintln!("{} change(s) proposed:", review.change_count());
    for (id, before, after) in review.changes() {
        eprintln!("  {id}: {before:?} -> {after:?}");
    }

    for index in 0..review.change_count() {
        let decision = if accepted.contains(&index) {
            Decision::Accept
        } else {
            Decision::Decline
        };

        if let Err(e) = review.decide(ChangeId(index), decision) {
            eprintln!("Error deciding change {index}: {e}");
            process::exit(1);
        }
    }

    eprintln!("{}", render_word_diff(&review.fragments()));
    print!("{}", review.merged_text());
}

fn read(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(1);
    })
}
