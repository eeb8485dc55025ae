use crate::data::matrices::ScoreTable;

/// Calculates the Levenshtein distance: the minimum number of single-element
/// insertions, deletions, or substitutions needed to transform `s1` into
/// `s2`.
///
/// Elements only need to be comparable for equality. For byte strings the
/// distance is over bytes (code units); pass `&[char]` for distances over
/// Unicode scalar values.
///
/// ## Complexity
///
/// For lengths $m$ and $n$:
///
/// - Time: $O(mn)$
/// - Space: $O(mn)$, see [`ScoreTable`]
///
/// ## Example
///
/// ```
/// use likeness::distance::levenshtein;
///
/// assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
/// assert_eq!(levenshtein(b"", b"abc"), 3);
///
/// let s1: Vec<char> = "café".chars().collect();
/// let s2: Vec<char> = "cafe".chars().collect();
/// assert_eq!(levenshtein(&s1, &s2), 1);
/// ```
#[inline]
#[must_use]
pub fn levenshtein<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    // Shortcut for the empty operands, which skips the table entirely
    if s1.is_empty() {
        return s2.len();
    } else if s2.is_empty() {
        return s1.len();
    }

    levenshtein_table(s1, s2).last().unwrap_or_default()
}

/// Computes the full Levenshtein [`ScoreTable`] for `s1` (rows) and `s2`
/// (columns). Cell $(i, j)$ holds the distance between `s1[..i]` and
/// `s2[..j]`, so the bottom-right cell is [`levenshtein`].
///
/// ## Example
///
/// ```
/// use likeness::distance::levenshtein_table;
///
/// let table = levenshtein_table(b"ab", b"b");
/// assert_eq!(table.row(0), &[0, 1]);
/// assert_eq!(table.row(2), &[2, 1]);
/// assert_eq!(table.last(), Some(1));
/// ```
#[must_use]
pub fn levenshtein_table<T: PartialEq>(s1: &[T], s2: &[T]) -> ScoreTable<usize> {
    let mut table = ScoreTable::for_operands(s1.len(), s2.len());
    fill_levenshtein(&mut table, s1, s2);
    table
}

#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn fill_levenshtein<T: PartialEq>(table: &mut ScoreTable<usize>, s1: &[T], s2: &[T]) {
    // Base cases: transforming a prefix into the empty sequence costs its
    // length
    for i in 1..=s1.len() {
        table[(i, 0)] = i;
    }
    for j in 1..=s2.len() {
        table[(0, j)] = j;
    }

    for (i, a) in s1.iter().enumerate() {
        let i = i + 1;
        for (j, b) in s2.iter().enumerate() {
            let j = j + 1;
            let deletion = table[(i - 1, j)] + 1;
            let insertion = table[(i, j - 1)] + 1;
            let diagonal = table[(i - 1, j - 1)] + usize::from(a != b);
            table[(i, j)] = deletion.min(insertion).min(diagonal);
        }
    }
}
