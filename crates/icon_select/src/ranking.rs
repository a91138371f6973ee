//! Fuzzy ordering of search hits.
//!
//! Candidates must contain the query as a substring once both sides are lower-cased and
//! stripped of diacritics; the survivors are scored with `frizbee` and listed best first.

use frizbee::{match_list, Config};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Lower-cases `text` and drops combining marks, so `Résumé` folds to `resume`.
pub fn fold_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn match_config() -> Config {
    Config {
        prefilter: false,
        max_typos: None,
        sort: false,
        ..Config::default()
    }
}

/// Returns the items whose key contains `query`, ordered by match score.
///
/// Ties keep the folded key in ascending order, then the input order. An empty query
/// matches nothing; callers that want "no filter" should skip ranking.
pub fn rank_items<T, F>(items: &[T], query: &str, key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let needle = fold_key(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<(usize, String)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (index, fold_key(key(item))))
        .filter(|(_, folded)| folded.contains(&needle))
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let haystacks: Vec<&str> = candidates.iter().map(|(_, folded)| folded.as_str()).collect();
    let mut scores = vec![0u16; candidates.len()];
    for entry in match_list(&needle, &haystacks, &match_config()) {
        if let Some(score) = scores.get_mut(entry.index as usize) {
            *score = entry.score;
        }
    }

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .cmp(&scores[a])
            .then_with(|| candidates[a].1.cmp(&candidates[b].1))
    });
    order
        .into_iter()
        .map(|slot| items[candidates[slot].0].clone())
        .collect()
}
