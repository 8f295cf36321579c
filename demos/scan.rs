//! Identify candidate strings against every registered scheme.
//!
//! Run with: `cargo run --example scan -- US0378331005 GB82WEST12345698765432`

use pruefziffer::registry::{Outcome, scan};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<String> = if args.is_empty() {
        [
            "US0378331005",
            "GB82WEST12345698765432",
            "979-0-2600-0043-8",
            "4111111111111112",
            "not-an-identifier",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else {
        args
    };

    for input in &inputs {
        let verdicts = scan(input);

        // most specific first: the registry orders generic algorithms
        // last, so the first conformant verdict wins
        let best = verdicts
            .iter()
            .find(|v| v.outcome == Outcome::Conformant)
            .or_else(|| {
                verdicts
                    .iter()
                    .find(|v| matches!(v.outcome, Outcome::NonConformant { .. }))
            });

        match best {
            Some(v) if v.outcome == Outcome::Conformant => {
                println!("{input}\t{}, conformant", v.name);
            }
            Some(v) => match &v.outcome {
                Outcome::NonConformant { expected: Some(e) } => {
                    println!("{input}\t{}, not conformant, check should be {e}", v.name);
                }
                _ => println!("{input}\t{}, not conformant", v.name),
            },
            None => println!("{input}\tunknown"),
        }
    }
}
