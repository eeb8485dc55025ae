extern crate test;
use super::*;
use crate::{
    data::windows::Window,
    test_data::{READ_1, READ_2},
};
use test::Bencher;

#[bench]
fn window_occurrences_default(b: &mut Bencher) {
    b.iter(|| window_occurrence_score(READ_1, READ_2, Window::DEFAULT));
}

#[bench]
fn kmp_count_single_pattern(b: &mut Bencher) {
    let matcher = KmpMatcher::new(&READ_1[20..32]);
    b.iter(|| matcher.count_in(READ_2));
}
