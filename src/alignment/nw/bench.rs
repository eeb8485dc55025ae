extern crate test;
use super::*;
use crate::test_data::{READ_1, READ_2};
use test::Bencher;

#[bench]
fn nw_score_default_weights(b: &mut Bencher) {
    b.iter(|| needleman_wunsch_score(READ_1, READ_2, AlignmentWeights::DEFAULT));
}

#[bench]
fn nw_score_penalized(b: &mut Bencher) {
    let weights = AlignmentWeights::new(2.0, -1.0, -2.0).unwrap();
    b.iter(|| needleman_wunsch_score(READ_1, READ_2, weights));
}
