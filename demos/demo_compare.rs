use likeness::prelude::*;
use std::env;

// Compares two sequences with every score. The window length defaults to 5
// and can be given as a third argument.

fn main() {
    let args: Vec<String> = env::args().collect();

    let (s1, s2, window) = match args.as_slice() {
        [_, s1, s2] => (s1.as_str(), s2.as_str(), Window::default()),
        [_, s1, s2, window] => {
            let length = window.parse::<usize>().unwrap_or_else(|e| {
                eprintln!("Error: invalid window length '{window}'\n\n{e}");
                std::process::exit(1);
            });
            (s1.as_str(), s2.as_str(), Window::new(length).unwrap_or_die("Cannot use this window"))
        }
        _ => {
            println!("Usage:\n\t{} <first> <second> [window]\n\nComparing the example pair.", &args[0]);
            ("GGCCACAGGATTGAG", "GGCCACAGTATTAG", Window::default())
        }
    };

    let weights = AlignmentWeights::new(1.0, -1.0, -1.0).unwrap_or_fail();

    println!("Levenshtein distance:\t{}", s1.edit_distance(s2));
    println!("Alignment score:\t{}", s1.global_alignment_score(s2, weights));
    println!("Window similarity:\t{:.2}", s1.window_similarity(s2, window));
    println!("Window occurrences:\t{}", s1.window_occurrences(s2, window));
}
