//! Bounded Levenshtein distance over Unicode scalar values.

/// Edit distance between `a` and `b`, or `None` once it is certain to exceed
/// `max_distance`.
pub fn bounded_levenshtein(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut row = Vec::new();
    bounded_levenshtein_chars(&a, &b, max_distance, &mut row)
}

/// Single-row DP over char slices, reusing `row` between calls.
///
/// The minimum of a finished row never decreases in later rows, so once it
/// passes `max_distance` the final cell cannot come back under it.
pub(crate) fn bounded_levenshtein_chars(
    a: &[char],
    b: &[char],
    max_distance: usize,
    row: &mut Vec<usize>,
) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max_distance {
        return None;
    }

    row.clear();
    row.extend(0..=b.len());

    for (i, &ca) in a.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
            row_min = row_min.min(row[j + 1]);
        }
        if row_min > max_distance {
            return None;
        }
    }

    let distance = row[b.len()];
    (distance <= max_distance).then_some(distance)
}
