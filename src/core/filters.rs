//! Record predicates, search and ranking over a [`Dataset`].
//!
//! A *selection* is a list of row indices into the dataset, kept in
//! ascending (original) order. Filters narrow a selection; [`rank`] orders
//! one by a stat and cuts it to size.
//!
//! # Matching rules
//!
//! - Text filters compare accent-folded, lower-cased keys
//!   (see [`crate::core::normalize`]), either as a substring or as a whole.
//! - Position filters match a code exactly within the player's list, so
//!   `LW` does not pick up `LWB` players.
//! - Range filters are inclusive on both ends.

use crate::{
    cli::types::{Position, RatingRange, SortKey},
    core::normalize::fold,
    dataset::{Dataset, Player, SearchKeys},
};
use std::{cmp::Reverse, fmt};
use tracing::debug;

/// How a text filter compares against a folded key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextQuery {
    /// Whole-value match, ignoring accents and case.
    Exact(String),
    /// Substring match, ignoring accents and case.
    Contains(String),
}

impl TextQuery {
    pub fn matches(&self, folded_key: &str) -> bool {
        self.folded().matches_folded(folded_key)
    }

    /// Same query with its text folded once, for matching many keys.
    fn folded(&self) -> Self {
        match self {
            TextQuery::Exact(q) => TextQuery::Exact(fold(q)),
            TextQuery::Contains(q) => TextQuery::Contains(fold(q)),
        }
    }

    fn matches_folded(&self, folded_key: &str) -> bool {
        match self {
            TextQuery::Exact(q) => folded_key == q,
            TextQuery::Contains(q) => folded_key.contains(q.as_str()),
        }
    }

    fn text(&self) -> &str {
        match self {
            TextQuery::Exact(q) | TextQuery::Contains(q) => q,
        }
    }
}

/// A single predicate over a player record.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerFilter {
    /// Substring of the long name.
    Name(String),
    Club(TextQuery),
    League(TextQuery),
    Country(TextQuery),
    Position(Position),
    Age(RatingRange),
    Potential(RatingRange),
    Overall(RatingRange),
}

/// Menu option a filter belongs to. The interactive refinement menu
/// disables an option once it has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKind {
    Name,
    Club,
    Country,
    Potential,
    Age,
    Position,
}

impl PlayerFilter {
    pub fn kind(&self) -> FilterKind {
        match self {
            PlayerFilter::Name(_) => FilterKind::Name,
            PlayerFilter::Club(_) | PlayerFilter::League(_) => FilterKind::Club,
            PlayerFilter::Country(_) => FilterKind::Country,
            PlayerFilter::Position(_) => FilterKind::Position,
            PlayerFilter::Age(_) => FilterKind::Age,
            PlayerFilter::Potential(_) | PlayerFilter::Overall(_) => FilterKind::Potential,
        }
    }

    pub fn matches(&self, player: &Player, keys: &SearchKeys) -> bool {
        self.folded().matches_folded(player, keys)
    }

    /// Same filter with any query text folded, so matching a whole
    /// selection folds the query once instead of once per row.
    fn folded(&self) -> Self {
        match self {
            PlayerFilter::Name(q) => PlayerFilter::Name(fold(q)),
            PlayerFilter::Club(q) => PlayerFilter::Club(q.folded()),
            PlayerFilter::League(q) => PlayerFilter::League(q.folded()),
            PlayerFilter::Country(q) => PlayerFilter::Country(q.folded()),
            other => other.clone(),
        }
    }

    fn matches_folded(&self, player: &Player, keys: &SearchKeys) -> bool {
        match self {
            PlayerFilter::Name(q) => keys.name.contains(q.as_str()),
            PlayerFilter::Club(q) => q.matches_folded(&keys.club),
            PlayerFilter::League(q) => q.matches_folded(&keys.league),
            PlayerFilter::Country(q) => q.matches_folded(&keys.country),
            PlayerFilter::Position(pos) => keys.positions.contains(pos),
            PlayerFilter::Age(range) => range.contains(player.age),
            PlayerFilter::Potential(range) => range.contains(player.potential),
            PlayerFilter::Overall(range) => range.contains(player.overall),
        }
    }
}

impl fmt::Display for PlayerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerFilter::Name(q) => write!(f, "name ~ {}", q),
            PlayerFilter::Club(q) => write!(f, "club ~ {}", q.text()),
            PlayerFilter::League(q) => write!(f, "league ~ {}", q.text()),
            PlayerFilter::Country(q) => write!(f, "country ~ {}", q.text()),
            PlayerFilter::Position(p) => write!(f, "position = {}", p),
            PlayerFilter::Age(r) => write!(f, "age in {}", r),
            PlayerFilter::Potential(r) => write!(f, "potential in {}", r),
            PlayerFilter::Overall(r) => write!(f, "overall in {}", r),
        }
    }
}

/// Rows matching every filter, in original order. No filters selects all.
pub fn search(dataset: &Dataset, filters: &[PlayerFilter]) -> Vec<usize> {
    let filters: Vec<PlayerFilter> = filters.iter().map(PlayerFilter::folded).collect();
    let selection: Vec<usize> = (0..dataset.len())
        .filter(|&i| {
            let (player, keys) = (dataset.player(i), dataset.keys(i));
            filters.iter().all(|f| f.matches_folded(player, keys))
        })
        .collect();
    debug!(filters = filters.len(), matched = selection.len(), "search");
    selection
}

/// Rows matching any one of `filters`, in original order.
pub fn search_any(dataset: &Dataset, filters: &[PlayerFilter]) -> Vec<usize> {
    let filters: Vec<PlayerFilter> = filters.iter().map(PlayerFilter::folded).collect();
    (0..dataset.len())
        .filter(|&i| {
            let (player, keys) = (dataset.player(i), dataset.keys(i));
            filters.iter().any(|f| f.matches_folded(player, keys))
        })
        .collect()
}

/// Narrow `selection` by one more filter, keeping its order.
pub fn refine(dataset: &Dataset, selection: &[usize], filter: &PlayerFilter) -> Vec<usize> {
    let folded = filter.folded();
    let narrowed: Vec<usize> = selection
        .iter()
        .copied()
        .filter(|&i| folded.matches_folded(dataset.player(i), dataset.keys(i)))
        .collect();
    debug!(%filter, before = selection.len(), after = narrowed.len(), "refine");
    narrowed
}

/// Value a record is ranked by, `None` when it lacks the stat.
pub fn sort_value(player: &Player, key: SortKey) -> Option<i16> {
    match key {
        SortKey::Overall => Some(i16::from(player.overall)),
        SortKey::Potential => Some(i16::from(player.potential)),
        SortKey::Passing => player.passing.map(i16::from),
        SortKey::Age => Some(i16::from(player.age)),
        SortKey::Gap => Some(player.gap()),
    }
}

/// How many rows of `selection` have a value for `key`, i.e. can be ranked.
pub fn rankable(dataset: &Dataset, selection: &[usize], key: SortKey) -> usize {
    selection
        .iter()
        .filter(|&&i| sort_value(dataset.player(i), key).is_some())
        .count()
}

/// Top `limit` rows of `selection`, descending by `key`.
///
/// Rows without a value for `key` are dropped. The sort is stable over the
/// selection sorted by row index, so equal values keep original order.
pub fn rank(dataset: &Dataset, selection: &[usize], key: SortKey, limit: usize) -> Vec<usize> {
    let mut scored: Vec<(usize, i16)> = selection
        .iter()
        .filter_map(|&i| sort_value(dataset.player(i), key).map(|v| (i, v)))
        .collect();
    scored.sort_by_key(|&(i, _)| i);
    scored.sort_by_key(|&(_, v)| Reverse(v));
    scored.into_iter().take(limit).map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
long_name,player_positions,overall,potential,age,club_name,league_name,nationality_name,passing
José Gaya,LB,83,84,26,Valencia CF,Spain Primera Division,Spain,77
Jose Sá,GK,80,83,28,Wolverhampton Wanderers,English Premier League,Portugal,
Ansu Fati,\"LW, ST\",76,90,18,FC Barcelona,Spain Primera Division,Spain,70
Alphonso Davies,\"LWB, LB\",82,89,20,FC Bayern München,German 1. Bundesliga,Canada,73
Pedri,\"CM, CAM\",81,91,18,FC Barcelona,Spain Primera Division,Spain,80
Papa Guinea,CB,70,72,25,Some Club,Other League,Guinea-Bissau,60
Old Guinea,CB,70,70,33,Some Club,Other League,Guinea,55
";

    fn sample() -> Dataset {
        Dataset::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_name_substring_ignores_accents_and_case() {
        let ds = sample();
        let hits = search(&ds, &[PlayerFilter::Name("JOSÉ".to_string())]);
        assert_eq!(hits, vec![0, 1]);
        let hits = search(&ds, &[PlayerFilter::Name("jose".to_string())]);
        assert_eq!(hits, vec![0, 1]);
        let hits = search(&ds, &[PlayerFilter::Name("münchen".to_string())]);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_filter_list_selects_everything() {
        let ds = sample();
        assert_eq!(search(&ds, &[]), ds.all());
    }

    #[test]
    fn test_text_query_exact_vs_contains() {
        let ds = sample();
        let exact = search(&ds, &[PlayerFilter::Country(TextQuery::Exact("guinea".into()))]);
        assert_eq!(exact, vec![6]);
        let contains = search(&ds, &[PlayerFilter::Country(TextQuery::Contains("guinea".into()))]);
        assert_eq!(contains, vec![5, 6]);
        let club = search(&ds, &[PlayerFilter::Club(TextQuery::Contains("munchen".into()))]);
        assert_eq!(club, vec![3]);
    }

    #[test]
    fn test_position_is_exact_code() {
        let ds = sample();
        let lw = search(&ds, &[PlayerFilter::Position(Position::LW)]);
        assert_eq!(lw, vec![2]);
        let lb = search(&ds, &[PlayerFilter::Position(Position::LB)]);
        assert_eq!(lb, vec![0, 3]);
    }

    #[test]
    fn test_range_filters_are_inclusive() {
        let ds = sample();
        let young = search(&ds, &[PlayerFilter::Age(RatingRange::new(18, 20))]);
        assert_eq!(young, vec![2, 3, 4]);
        let pot = search(&ds, &[PlayerFilter::Potential(RatingRange::new(89, 90))]);
        assert_eq!(pot, vec![2, 3]);
        for i in pot {
            let p = ds.player(i).potential;
            assert!((89..=90).contains(&p));
        }
    }

    #[test]
    fn test_filters_combine_with_and() {
        let ds = sample();
        let hits = search(
            &ds,
            &[
                PlayerFilter::League(TextQuery::Exact("Spain Primera Division".into())),
                PlayerFilter::Age(RatingRange::new(15, 20)),
            ],
        );
        assert_eq!(hits, vec![2, 4]);
    }

    #[test]
    fn test_search_any() {
        let ds = sample();
        let hits = search_any(
            &ds,
            &[
                PlayerFilter::Name("pedri".into()),
                PlayerFilter::Name("davies".into()),
            ],
        );
        assert_eq!(hits, vec![3, 4]);
    }

    #[test]
    fn test_refine_keeps_order() {
        let ds = sample();
        let spain = search(&ds, &[PlayerFilter::Country(TextQuery::Exact("Spain".into()))]);
        assert_eq!(spain, vec![0, 2, 4]);
        let refined = refine(&ds, &spain, &PlayerFilter::Club(TextQuery::Exact("FC Barcelona".into())));
        assert_eq!(refined, vec![2, 4]);
    }

    #[test]
    fn test_rank_descending_with_stable_ties() {
        let ds = sample();
        // Overall: 83, 80, 76, 82, 81, 70, 70
        let ranked = rank(&ds, &ds.all(), SortKey::Overall, 10);
        assert_eq!(ranked, vec![0, 3, 4, 1, 2, 5, 6]);
    }

    #[test]
    fn test_rank_limit_and_unsorted_selection() {
        let ds = sample();
        let ranked = rank(&ds, &[6, 5, 2], SortKey::Overall, 2);
        // 5 and 6 tie on 70; original order puts 5 first
        assert_eq!(ranked, vec![2, 5]);
    }

    #[test]
    fn test_rank_drops_missing_values() {
        let ds = sample();
        let ranked = rank(&ds, &ds.all(), SortKey::Passing, 10);
        assert!(!ranked.contains(&1));
        assert_eq!(ranked[0], 4);
    }

    #[test]
    fn test_rank_by_gap() {
        let ds = sample();
        let ranked = rank(&ds, &ds.all(), SortKey::Gap, 3);
        // Gaps: Fati 14, Pedri 10, Davies 7
        assert_eq!(ranked, vec![2, 4, 3]);
    }

    #[test]
    fn test_filter_kind() {
        assert_eq!(PlayerFilter::League(TextQuery::Exact("x".into())).kind(), FilterKind::Club);
        assert_eq!(PlayerFilter::Age(RatingRange::new(15, 20)).kind(), FilterKind::Age);
        assert_eq!(PlayerFilter::Position(Position::GK).kind(), FilterKind::Position);
    }

    #[test]
    fn test_filter_display() {
        let f = PlayerFilter::Potential(RatingRange::new(80, 90));
        assert_eq!(f.to_string(), "potential in 80-90");
    }

    #[test]
    fn test_query_text_folded_once_up_front() {
        let filter = PlayerFilter::Club(TextQuery::Contains("MÜNCHEN".into()));
        assert_eq!(
            filter.folded(),
            PlayerFilter::Club(TextQuery::Contains("munchen".into()))
        );
        assert_eq!(
            PlayerFilter::Name("JOSÉ".into()).folded(),
            PlayerFilter::Name("jose".into())
        );
        let age = PlayerFilter::Age(RatingRange::new(18, 20));
        assert_eq!(age.folded(), age);

        // The public predicate and the batch path agree.
        let ds = sample();
        let by_predicate: Vec<usize> = (0..ds.len())
            .filter(|&i| filter.matches(ds.player(i), ds.keys(i)))
            .collect();
        assert_eq!(search(&ds, &[filter]), by_predicate);
        assert_eq!(by_predicate, vec![3]);
    }

    #[test]
    fn test_rankable_counts_rows_with_a_value() {
        let ds = sample();
        let all = ds.all();
        assert_eq!(rankable(&ds, &all, SortKey::Overall), 7);
        assert_eq!(rankable(&ds, &all, SortKey::Passing), 6);
        assert_eq!(rankable(&ds, &[1], SortKey::Passing), 0);
    }
}
