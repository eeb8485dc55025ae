extern crate test;
use super::*;
use crate::test_data::{READ_1, READ_2};
use test::Bencher;

#[bench]
fn levenshtein_reads(b: &mut Bencher) {
    b.iter(|| levenshtein(READ_1, READ_2));
}

#[bench]
fn levenshtein_reads_as_chars(b: &mut Bencher) {
    let c1: Vec<char> = READ_1.iter().copied().map(char::from).collect();
    let c2: Vec<char> = READ_2.iter().copied().map(char::from).collect();
    b.iter(|| levenshtein(&c1, &c2));
}
