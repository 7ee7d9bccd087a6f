use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::app::types::Entry;

/// Free-text stage of the finder. Implementations return the matching
/// entries ordered by their own relevance; callers do not re-rank them.
pub trait FuzzySearch {
    fn search(&self, entries: &[Entry], query: &str) -> Vec<Entry>;
}

/// Fuzzy matcher over title, description and tags.
///
/// An entry's relevance is its best field score divided by the score the
/// query earns against itself. Entries below `1.0 - threshold` are dropped,
/// except fields that contain the query outright. With a non-zero threshold
/// one swapped pair of neighbouring characters still counts as outright.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NucleoSearch {
    threshold: f64,
}

impl NucleoSearch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0) }
    }

    fn min_relevance(&self) -> f64 {
        1.0 - self.threshold
    }
}

impl Default for NucleoSearch {
    fn default() -> Self {
        Self::new(0.3)
    }
}

fn score(haystack: &str, pattern: &Pattern, matcher: &mut Matcher, buf: &mut Vec<char>) -> Option<u32> {
    pattern.score(Utf32Str::new(haystack, buf), matcher)
}

/// The lowercased query plus, when typos are allowed, every spelling with
/// one adjacent pair swapped.
fn spellings(query: &str, allow_swap: bool) -> Vec<String> {
    let lowered = query.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut out = vec![lowered];
    if allow_swap {
        for i in 1..chars.len() {
            if chars[i - 1] != chars[i] {
                let mut swapped = chars.clone();
                swapped.swap(i - 1, i);
                out.push(swapped.into_iter().collect());
            }
        }
    }
    out
}

fn contains_any(field: &str, spellings: &[String]) -> bool {
    let field = field.to_lowercase();
    spellings.iter().any(|s| field.contains(s.as_str()))
}

fn fields(entry: &Entry) -> impl Iterator<Item = &str> {
    [entry.title.as_str(), entry.description.as_str()]
        .into_iter()
        .chain(entry.tags.iter().map(String::as_str))
}

impl FuzzySearch for NucleoSearch {
    fn search(&self, entries: &[Entry], query: &str) -> Vec<Entry> {
        let query = query.trim();
        if query.is_empty() {
            return entries.to_vec();
        }
        let pattern = Pattern::new(query, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy);
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();
        let ideal = score(query, &pattern, &mut matcher, &mut buf).unwrap_or(0);
        let spellings = spellings(query, self.threshold > 0.0);
        let min = self.min_relevance();

        let mut ranked: Vec<(f64, &Entry)> = entries
            .iter()
            .filter_map(|entry| {
                let best = fields(entry)
                    .filter_map(|field| {
                        let relevance = score(field, &pattern, &mut matcher, &mut buf).map(|best| {
                            if ideal == 0 { 1.0 } else { (best as f64 / ideal as f64).min(1.0) }
                        });
                        match relevance {
                            Some(r) if r >= min => Some(r),
                            _ if contains_any(field, &spellings) => Some(relevance.unwrap_or(0.0).max(min)),
                            _ => None,
                        }
                    })
                    .max_by(f64::total_cmp)?;
                Some((best, entry))
            })
            .collect();
        // stable: equal relevance keeps catalog order
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.into_iter().map(|(_, entry)| entry.clone()).collect()
    }
}
