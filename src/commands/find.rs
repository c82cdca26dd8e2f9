//! Non-interactive search from command-line filters.

use std::io::Write;

use tracing::info;

use crate::{
    cli::types::{Position, RatingRange, SortKey, AGE_BOUNDS, RATING_BOUNDS},
    core::filters::{rank, rankable, refine, search_any, PlayerFilter, TextQuery},
    dataset::Dataset,
    models::output::PlayerSummary,
    Result,
};

use super::common::{write_results, RESULT_LIMIT};

/// Filters and output options for [`handle_find`].
///
/// Names and positions are any-of lists; every other filter must also hold.
#[derive(Debug, Clone, Default)]
pub struct FindParams {
    pub names: Vec<String>,
    pub club: Option<String>,
    pub league: Option<String>,
    pub country: Option<String>,
    pub positions: Vec<Position>,
    pub age: Option<RatingRange>,
    pub potential: Option<RatingRange>,
    pub overall: Option<RatingRange>,
    pub sort: SortKey,
    pub limit: Option<usize>,
    pub as_json: bool,
    pub ascii: bool,
}

impl FindParams {
    /// Filters that must all match, after checking range bounds.
    pub fn required_filters(&self) -> Result<Vec<PlayerFilter>> {
        let mut filters = Vec::new();
        if let Some(club) = &self.club {
            filters.push(PlayerFilter::Club(TextQuery::Contains(club.clone())));
        }
        if let Some(league) = &self.league {
            filters.push(PlayerFilter::League(TextQuery::Contains(league.clone())));
        }
        if let Some(country) = &self.country {
            filters.push(PlayerFilter::Country(TextQuery::Contains(country.clone())));
        }
        if let Some(age) = self.age {
            filters.push(PlayerFilter::Age(age.validate("age", AGE_BOUNDS)?));
        }
        if let Some(potential) = self.potential {
            filters.push(PlayerFilter::Potential(
                potential.validate("potential", RATING_BOUNDS)?,
            ));
        }
        if let Some(overall) = self.overall {
            filters.push(PlayerFilter::Overall(
                overall.validate("overall", RATING_BOUNDS)?,
            ));
        }
        Ok(filters)
    }
}

/// Matching rows in original order.
pub fn find_players(dataset: &Dataset, params: &FindParams) -> Result<Vec<usize>> {
    let required = params.required_filters()?;

    let mut selection = if params.names.is_empty() {
        dataset.all()
    } else {
        let names: Vec<PlayerFilter> = params
            .names
            .iter()
            .map(|n| PlayerFilter::Name(n.clone()))
            .collect();
        search_any(dataset, &names)
    };

    if !params.positions.is_empty() {
        selection.retain(|&i| {
            let keys = dataset.keys(i);
            params.positions.iter().any(|p| keys.positions.contains(p))
        });
    }

    for filter in &required {
        selection = refine(dataset, &selection, filter);
    }
    Ok(selection)
}

/// Run the search and print cards (or JSON) for the top of the result.
pub fn handle_find<W: Write>(
    dataset: &Dataset,
    params: &FindParams,
    out: &mut W,
) -> Result<Vec<PlayerSummary>> {
    let selection = find_players(dataset, params)?;
    let limit = params.limit.unwrap_or(RESULT_LIMIT);
    // Rows without a value for the sort key (no passing for goalkeepers)
    // cannot be ranked and are not reported.
    let pool = rankable(dataset, &selection, params.sort);
    info!(matched = selection.len(), pool, limit, sort = %params.sort, "find");

    let summaries: Vec<PlayerSummary> = rank(dataset, &selection, params.sort, limit)
        .into_iter()
        .enumerate()
        .map(|(n, i)| PlayerSummary::new(n + 1, dataset.player(i), dataset.keys(i)))
        .collect();

    if params.as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
    } else if pool == 0 {
        writeln!(out, "[X] No players found")?;
    } else {
        writeln!(out, "[OK] Found {} players", pool)?;
        write_results(out, dataset, &selection, params.sort, limit, params.ascii)?;
    }
    Ok(summaries)
}
