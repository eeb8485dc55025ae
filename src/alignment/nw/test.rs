use super::*;
use crate::{alignment::WeightError, distance::levenshtein};

fn edit_weights() -> AlignmentWeights {
    AlignmentWeights::new(0.0, -1.0, -1.0).unwrap()
}

#[test]
fn default_weights_score_identical_sequences_by_length() {
    let seqs: [&[u8]; 3] = [b"a", b"abc", b"GGCCACAGGATTGAG"];
    for s in seqs {
        assert_eq!(needleman_wunsch_score(s, s, AlignmentWeights::default()), s.len() as f64);
    }
    assert_eq!(needleman_wunsch_score(b"abc", b"abc", AlignmentWeights::default()), 3.0);
}

#[test]
fn empty_operands_accumulate_gaps() {
    let weights = AlignmentWeights::new(1.0, -1.0, -2.0).unwrap();
    assert_eq!(needleman_wunsch_score::<u8>(b"", b"", weights), 0.0);
    assert_eq!(needleman_wunsch_score(b"ACGT", b"", weights), -8.0);
    assert_eq!(needleman_wunsch_score(b"", b"AC", weights), -4.0);
    assert_eq!(needleman_wunsch_score(b"ACGT", b"", AlignmentWeights::default()), 0.0);
}

#[test]
fn classic_example() {
    let weights = AlignmentWeights::new(1.0, -1.0, -1.0).unwrap();
    assert_eq!(needleman_wunsch_score(b"GATTACA", b"GCATGCU", weights), 0.0);
    assert_eq!(needleman_wunsch_score(b"GCATGCU", b"GATTACA", weights), 0.0);
}

#[test]
fn mismatch_versus_gaps() {
    // A mismatch of -3 is worse than two gaps of -1
    let weights = AlignmentWeights::new(2.0, -3.0, -1.0).unwrap();
    assert_eq!(needleman_wunsch_score(b"AXC", b"AYC", weights), 2.0);

    let weights = AlignmentWeights::new(2.0, -1.0, -1.0).unwrap();
    assert_eq!(needleman_wunsch_score(b"AXC", b"AYC", weights), 3.0);
}

#[test]
fn default_weights_give_longest_common_subsequence() {
    let weights = AlignmentWeights::default();
    assert_eq!(needleman_wunsch_score(b"ABCBDAB", b"BDCABA", weights), 4.0);
    assert_eq!(needleman_wunsch_score(b"AGGTAB", b"GXTXAYB", weights), 4.0);
    assert_eq!(needleman_wunsch_score(b"abc", b"xyz", weights), 0.0);
}

#[test]
fn edit_weights_negate_levenshtein() {
    let pairs: [(&[u8], &[u8]); 4] = [
        (b"kitten", b"sitting"),
        (b"", b"abc"),
        (b"flaw", b"lawn"),
        (b"GATTACA", b"GCATGCU"),
    ];

    for (s1, s2) in pairs {
        assert_eq!(needleman_wunsch_score(s1, s2, edit_weights()), -(levenshtein(s1, s2) as f64));
    }
}

#[test]
fn table_base_cases() {
    let weights = AlignmentWeights::new(1.0, 0.0, -0.25).unwrap();
    let table = needleman_wunsch_table(b"abc", b"ab", weights);
    assert_eq!((table.rows(), table.cols()), (4, 3));

    for i in 0..table.rows() {
        assert_eq!(table[(i, 0)], -0.25 * i as f64);
    }
    for j in 0..table.cols() {
        assert_eq!(table[(0, j)], -0.25 * j as f64);
    }
}

#[test]
fn weight_validation() {
    assert_eq!(
        AlignmentWeights::new(1.0, f64::INFINITY, 0.0),
        Err(WeightError::NonFinite("mismatch"))
    );
    assert_eq!(
        AlignmentWeights::default().with_gap(f64::NAN),
        Err(WeightError::NonFinite("gap"))
    );
    assert_eq!(
        WeightError::NonFinite("matching").to_string(),
        "The matching weight must be a finite number!"
    );

    let weights = AlignmentWeights::default()
        .with_matching(3.0)
        .and_then(|w| w.with_mismatch(-2.0))
        .unwrap();
    assert_eq!((weights.matching(), weights.mismatch(), weights.gap()), (3.0, -2.0, 0.0));
}

#[cfg(feature = "rand")]
#[test]
fn edit_weights_negate_levenshtein_random() {
    use crate::generate::{rand_edits, rand_sequence};

    for seed in 0..25 {
        let s1 = rand_sequence(b"ACGT", 20, seed);
        let s2 = rand_edits(&s1, b"ACGT", 5, seed);
        assert_eq!(needleman_wunsch_score(&s1, &s2, edit_weights()), -(levenshtein(&s1, &s2) as f64));
    }
}
