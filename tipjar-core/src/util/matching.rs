use std::cmp::min;

// Levenshtein distance realistically captures typos: adding one
// character in between, deleting one character and changing one
// character are all counted as distance 1.

/// Case-insensitive edit distance between two strings.
///
/// Classic dynamic-programming algorithm over characters, O(|a|*|b|)
/// time and space. Both inputs are lower-cased before comparison.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let s: Vec<char> = a.to_lowercase().chars().collect();
    let t: Vec<char> = b.to_lowercase().chars().collect();

    let max_s = s.len() + 1;
    let max_t = t.len() + 1;

    // d[i][j] holds the distance between the first i characters of s
    // and the first j characters of t.
    let mut d = vec![vec![0; max_t]; max_s];

    // Source prefixes are transformed into the empty string by
    // dropping all characters.
    for (i, row) in d.iter_mut().enumerate().take(max_s).skip(1) {
        row[0] = i;
    }

    // Target prefixes are reached from the empty source prefix by
    // inserting every character.
    for j in 1..max_t {
        d[0][j] = j;
    }

    for j in 1..max_t {
        for i in 1..max_s {
            let substitution_cost = usize::from(s[i - 1] != t[j - 1]);
            d[i][j] = min3(
                d[i - 1][j] + 1,                     // deletion
                d[i][j - 1] + 1,                     // insertion
                d[i - 1][j - 1] + substitution_cost, // substitution
            );
        }
    }

    d[max_s - 1][max_t - 1]
}

fn min3(s: usize, t: usize, u: usize) -> usize {
    if s <= t {
        min(s, u)
    } else {
        min(t, u)
    }
}
