use super::*;

#[test]
fn window_validation() {
    assert_eq!(Window::new(0), Err(WindowError::Zero));
    assert_eq!(Window::try_from(3).map(Window::get), Ok(3));
    assert_eq!(Window::default().get(), 5);
    assert_eq!(usize::from(Window::DEFAULT), 5);
    assert_eq!(WindowError::Zero.to_string(), "The window length must be at least 1!");
}

#[test]
fn truncation_only_affects_single_element_windows() {
    let seq = b"GATTACA";

    for length in 2..=seq.len() {
        let window = Window::new(length).unwrap();
        let expected: Vec<_> = seq.windows(length).collect();
        let found: Vec<_> = truncated_windows(seq, window).collect();
        assert_eq!(expected, found, "window length {length}");
    }

    let one = Window::new(1).unwrap();
    let found: Vec<_> = truncated_windows(seq, one).collect();
    assert_eq!(found.len(), seq.len() - 1);
    assert_eq!(found.last(), Some(&&b"C"[..]));
}

#[test]
fn short_sequences_yield_nothing() {
    let window = Window::new(4).unwrap();
    assert_eq!(truncated_windows(b"abc", window).count(), 0);
    assert_eq!(truncated_windows::<u8>(b"", window).count(), 0);
    assert_eq!(truncated_windows(b"a", Window::new(1).unwrap()).count(), 0);
}

#[test]
fn window_set_deduplicates() {
    let window = Window::new(2).unwrap();
    let set = WindowSet::from_sequence(b"aaaa", window);
    assert_eq!(set.len(), 1);
    assert!(set.contains(b"aa"));
    assert_eq!(set.window(), window);

    let set = WindowSet::from_sequence(b"abcabc", Window::new(3).unwrap());
    let mut windows: Vec<_> = set.into_iter().collect();
    windows.sort_unstable();
    assert_eq!(windows, [&b"abc"[..], &b"bca"[..], &b"cab"[..]]);
}

#[test]
fn window_set_never_holds_short_windows() {
    let window = Window::new(3).unwrap();
    let set = WindowSet::from_sequence(b"ACGTTGCA", window);
    assert!(!set.is_empty());
    assert!(set.iter().all(|w| w.len() == 3));

    let empty = WindowSet::from_sequence(b"AC", window);
    assert!(empty.is_empty());
}

#[test]
fn shared_windows() {
    let window = Window::new(2).unwrap();
    let night = WindowSet::from_sequence(b"night", window);
    let nacht = WindowSet::from_sequence(b"nacht", window);
    assert_eq!(night.shared_count(&nacht), 1);
    assert_eq!(nacht.shared_count(&night), 1);
    assert_eq!(night.shared_count(&night), 4);
}
