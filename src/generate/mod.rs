use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a reproducible random sequence of `length` bytes drawn uniformly
/// from `alpha`.
///
/// ## Panics
///
/// Panics if `alpha` is empty and `length` is nonzero.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| pick(&mut rng, alpha)).collect()
}

/// Copies `seq` and applies `edits` random single-byte substitutions,
/// insertions, or deletions drawn from `alpha`. The Levenshtein distance
/// between `seq` and the result is at most `edits`, which makes the pair
/// useful for checking distance and similarity scores.
///
/// Deletions and substitutions on an empty sequence become insertions.
///
/// ```
/// # use likeness::{distance::levenshtein, generate::{rand_edits, rand_sequence}};
/// let original = rand_sequence(b"ACGT", 50, 7);
/// let mutated = rand_edits(&original, b"ACGT", 3, 7);
/// assert!(levenshtein(&original, &mutated) <= 3);
/// ```
///
/// ## Panics
///
/// Panics if `alpha` is empty and an insertion or substitution is drawn.
#[must_use]
pub fn rand_edits(seq: &[u8], alpha: &[u8], edits: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    let mut out = seq.to_vec();

    for _ in 0..edits {
        match rng.next_u32() % 3 {
            0 if !out.is_empty() => {
                let i = index(&mut rng, out.len());
                out[i] = pick(&mut rng, alpha);
            }
            1 if !out.is_empty() => {
                let i = index(&mut rng, out.len());
                out.remove(i);
            }
            _ => {
                let i = index(&mut rng, out.len() + 1);
                let b = pick(&mut rng, alpha);
                out.insert(i, b);
            }
        }
    }

    out
}

#[inline]
fn index(rng: &mut Xoshiro256PlusPlus, len: usize) -> usize {
    rng.next_u32() as usize % len
}

#[inline]
fn pick(rng: &mut Xoshiro256PlusPlus, alpha: &[u8]) -> u8 {
    alpha[index(rng, alpha.len())]
}
