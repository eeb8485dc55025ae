// Requires the `rand` feature.

use likeness::prelude::*;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (samples, length, edits) = if args.len() == 4 {
        (args[1].parse().unwrap(), args[2].parse().unwrap(), args[3].parse().unwrap())
    } else {
        println!("Usage:\n\t{} <samples> <length> <edits>\n\nSetting to: 4 20 3", &args[0]);
        (4, 20, 3)
    };

    const ALPHA: &[u8] = b"AGTCN";
    for seed in 0..samples {
        let original = rand_sequence(ALPHA, length, seed);
        let mutated = rand_edits(&original, ALPHA, edits, seed);
        println!(
            "{}\t{}\t{}\t{:.2}",
            String::from_utf8_lossy(&original),
            String::from_utf8_lossy(&mutated),
            levenshtein(&original, &mutated),
            window_similarity(&original, &mutated, Window::new(3).unwrap_or_fail()),
        );
    }
}
