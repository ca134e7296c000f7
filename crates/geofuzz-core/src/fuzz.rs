//! Fuzzy string similarity used by the matcher.
//!
//! The score of a (query, name) pair is the maximum of three sub-scores:
//! - `ratio`: Levenshtein similarity of the full strings
//! - `partial_ratio`: best ratio of the shorter string against every
//!   equally long window of the longer one ("petersburg" inside
//!   "saint petersburg")
//! - `token_set_ratio`: order- and duplicate-insensitive token comparison
//!   ("york new" vs "new york")
//!
//! Sub-scores are in `[0, 1]`. Partial and token scores are weighted down
//! so that only identical strings reach the top of the scale.

/// Weight applied to `partial_ratio`.
pub const PARTIAL_WEIGHT: f64 = 0.9;
/// Weight applied to `partial_ratio` when one string is at least
/// [`LONG_LENGTH_RATIO`] times longer than the other.
pub const PARTIAL_WEIGHT_LONG: f64 = 0.6;
pub const LONG_LENGTH_RATIO: f64 = 8.0;
/// Weight applied to `token_set_ratio`.
pub const TOKEN_WEIGHT: f64 = 0.95;
/// Highest score a non-identical pair can receive; 100 is reserved for exact matches.
pub const MAX_FUZZY_SCORE: u8 = 99;

/// Levenshtein distance over char slices (two-row DP).
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return if a.is_empty() && b.is_empty() { 1.0 } else { 0.0 };
    }
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if shorter.len() == longer.len() {
        return ratio_chars(shorter, longer);
    }
    let mut best = 0.0f64;
    for window in longer.windows(shorter.len()) {
        best = best.max(ratio_chars(shorter, window));
        if best >= 1.0 {
            break;
        }
    }
    best
}

/// Sorted, de-duplicated whitespace tokens.
fn token_set(s: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}

fn join_parts(head: &str, tail: &[&str]) -> String {
    let tail = tail.join(" ");
    match (head.is_empty(), tail.is_empty()) {
        (_, true) => head.to_owned(),
        (true, false) => tail,
        (false, false) => format!("{head} {tail}"),
    }
}

/// `t1` and `t2` must be sorted and duplicate-free.
fn token_set_ratio_sorted<A: AsRef<str>, B: AsRef<str>>(t1: &[A], t2: &[B]) -> f64 {
    if t1.is_empty() && t2.is_empty() {
        return 1.0;
    }
    if t1.is_empty() || t2.is_empty() {
        return 0.0;
    }

    let (mut i, mut j) = (0, 0);
    let mut sect: Vec<&str> = Vec::new();
    let mut diff1: Vec<&str> = Vec::new();
    let mut diff2: Vec<&str> = Vec::new();
    while i < t1.len() && j < t2.len() {
        let (x, y) = (t1[i].as_ref(), t2[j].as_ref());
        match x.cmp(y) {
            std::cmp::Ordering::Equal => {
                sect.push(x);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                diff1.push(x);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                diff2.push(y);
                j += 1;
            }
        }
    }
    diff1.extend(t1[i..].iter().map(AsRef::as_ref));
    diff2.extend(t2[j..].iter().map(AsRef::as_ref));

    let sect = sect.join(" ");
    let combined1 = join_parts(&sect, &diff1);
    let combined2 = join_parts(&sect, &diff2);

    let mut best = ratio(&combined1, &combined2);
    if !sect.is_empty() {
        best = best.max(ratio(&sect, &combined1)).max(ratio(&sect, &combined2));
    }
    best
}

fn partial_weight(len_a: usize, len_b: usize) -> f64 {
    let (short, long) = (len_a.min(len_b).max(1), len_a.max(len_b));
    if long as f64 / short as f64 >= LONG_LENGTH_RATIO {
        PARTIAL_WEIGHT_LONG
    } else {
        PARTIAL_WEIGHT
    }
}

/// Levenshtein similarity of the full strings, `1 - dist / max_len`.
///
/// ```
/// use geofuzz_core::fuzz::ratio;
/// assert_eq!(ratio("kazan", "kazan"), 1.0);
/// assert_eq!(ratio("kazan", "kasan"), 0.8);
/// ```
pub fn ratio(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    ratio_chars(&a, &b)
}

/// Best substring alignment ratio (unweighted).
///
/// ```
/// use geofuzz_core::fuzz::partial_ratio;
/// assert_eq!(partial_ratio("petersburg", "saint petersburg"), 1.0);
/// ```
pub fn partial_ratio(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    partial_ratio_chars(&a, &b)
}

/// Token-set ratio (unweighted): ignores word order and repeated words.
///
/// ```
/// use geofuzz_core::fuzz::token_set_ratio;
/// assert_eq!(token_set_ratio("york new new", "new york"), 1.0);
/// ```
pub fn token_set_ratio(s1: &str, s2: &str) -> f64 {
    token_set_ratio_sorted(&token_set(s1), &token_set(s2))
}

/// The combined 0–100 score of two already normalized strings.
pub fn score(query: &str, candidate: &str) -> u8 {
    Scorer::new(query).score(candidate)
}

/// A query prepared once and scored against many candidates.
///
/// The matcher builds one `Scorer` per query so the query's chars and
/// tokens are not recomputed for every name in the candidate pool.
#[derive(Debug, Clone)]
pub struct Scorer {
    query: String,
    chars: Vec<char>,
    tokens: Vec<String>,
}

impl Scorer {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_owned(),
            chars: query.chars().collect(),
            tokens: token_set(query).into_iter().map(str::to_owned).collect(),
        }
    }

    /// Maximum of the three (weighted) sub-scores, in `[0, 1]`.
    pub fn similarity(&self, candidate: &str) -> f64 {
        let cand: Vec<char> = candidate.chars().collect();

        let full = ratio_chars(&self.chars, &cand);
        let partial = partial_ratio_chars(&self.chars, &cand)
            * partial_weight(self.chars.len(), cand.len());
        let tokens = token_set_ratio_sorted(&self.tokens, &token_set(candidate)) * TOKEN_WEIGHT;

        full.max(partial).max(tokens)
    }

    /// 0–100 score; 100 only when the strings are identical.
    pub fn score(&self, candidate: &str) -> u8 {
        if self.query == candidate {
            return crate::model::EXACT_SCORE;
        }
        let scaled = (self.similarity(candidate) * 100.0).round() as u8;
        scaled.min(MAX_FUZZY_SCORE)
    }
}
