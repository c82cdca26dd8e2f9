//! "Top N" player reports.
//!
//! Each report ranks a pool of players by one stat, prints a fixed-width
//! table and a detail block per player, and exports the rows to CSV.
//!
//! | Report | Pool | Ranked by | Extra analysis |
//! |---|---|---|---|
//! | `passers` | everyone with a passing value | passing | none |
//! | `potential` | everyone | potential | 5 biggest potential/overall gaps |
//! | `potential-u20` | age < 20 | potential | gap ranking and averages |

use std::{
    cmp::Reverse,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    cli::types::{RatingRange, ReportKind, SortKey},
    core::{
        filters::{rank, search, PlayerFilter},
        normalize::display_text,
    },
    dataset::Dataset,
    error::ScoutError,
    models::output::ReportRow,
    Result,
};

use super::common::{rule, truncate, write_banner};

/// Default number of players per report.
pub const DEFAULT_TOP_N: usize = 10;

/// Players younger than this qualify for the under-20 report.
pub const U20_AGE_LIMIT: u8 = 20;

/// How many gap leaders the potential report lists.
const GAP_LEADERS: usize = 5;

const NAME_WIDTH: usize = 20;
const CLUB_WIDTH: usize = 20;
const COUNTRY_WIDTH: usize = 11;

/// Options for [`handle_top`].
#[derive(Debug, Clone)]
pub struct TopParams {
    pub report: ReportKind,
    pub limit: usize,
    /// Export path; defaults to `top_<N>_<report>.csv` in the working directory.
    pub out: Option<PathBuf>,
    pub export: bool,
    pub as_json: bool,
    pub ascii: bool,
}

impl TopParams {
    pub fn new(report: ReportKind) -> Self {
        Self {
            report,
            limit: DEFAULT_TOP_N,
            out: None,
            export: true,
            as_json: false,
            ascii: false,
        }
    }

    pub fn export_path(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| {
            PathBuf::from(format!("top_{}_{}.csv", self.limit, self.report.file_stem()))
        })
    }
}

/// Build the rows of a report without printing anything.
pub fn build_report(dataset: &Dataset, report: ReportKind, limit: usize) -> Result<Vec<ReportRow>> {
    let metric = report.metric();
    if metric == SortKey::Passing && !dataset.has_column("passing") {
        return Err(ScoutError::MissingColumn {
            column: "passing".to_string(),
        });
    }

    let pool = match report {
        ReportKind::PotentialU20 => search(
            dataset,
            &[PlayerFilter::Age(RatingRange::new(0, U20_AGE_LIMIT - 1))],
        ),
        ReportKind::Passers | ReportKind::Potential => dataset.all(),
    };

    Ok(rank(dataset, &pool, metric, limit)
        .into_iter()
        .enumerate()
        .filter_map(|(n, i)| ReportRow::new(n + 1, dataset.player(i), metric))
        .collect())
}

/// Run a report: print it (text or JSON) and export it unless disabled.
pub fn handle_top<W: Write>(
    dataset: &Dataset,
    params: &TopParams,
    out: &mut W,
) -> Result<Vec<ReportRow>> {
    let rows = build_report(dataset, params.report, params.limit)?;

    if params.as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else {
        write_report(dataset, params, &rows, out)?;
    }

    if params.export {
        let path = params.export_path();
        export_csv(&path, params.report, &rows)?;
        info!(path = %path.display(), rows = rows.len(), "report exported");
        if !params.as_json {
            writeln!(out, "[OK] Data saved as '{}'", path.display())?;
        }
    }
    Ok(rows)
}

/// Write report rows as CSV with a `short_name, club_name, nationality_name,
/// <metric>, overall, age` header.
pub fn export_csv(path: &Path, report: ReportKind, rows: &[ReportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "short_name",
        "club_name",
        "nationality_name",
        metric_column(report),
        "overall",
        "age",
    ])?;
    for row in rows {
        writer.write_record(row.export_record())?;
    }
    writer.flush()?;
    Ok(())
}

fn metric_column(report: ReportKind) -> &'static str {
    match report.metric() {
        SortKey::Passing => "passing",
        _ => "potential",
    }
}

fn metric_label(report: ReportKind) -> &'static str {
    match report.metric() {
        SortKey::Passing => "Passing",
        _ => "Potential",
    }
}

fn write_report<W: Write>(
    dataset: &Dataset,
    params: &TopParams,
    rows: &[ReportRow],
    out: &mut W,
) -> Result<()> {
    let report = params.report;
    let ascii = params.ascii;
    let title = match report {
        ReportKind::Passers => format!("TOP {} PLAYERS BY PASSING", params.limit),
        ReportKind::Potential => format!("TOP {} PLAYERS BY POTENTIAL", params.limit),
        ReportKind::PotentialU20 => format!(
            "TOP {} PLAYERS BY POTENTIAL (AGE < {})",
            params.limit, U20_AGE_LIMIT
        ),
    };
    write_banner(out, &title)?;
    writeln!(out, "\n[OK] Data loaded: {} players", dataset.len())?;

    if report == ReportKind::PotentialU20 {
        let under = search(
            dataset,
            &[PlayerFilter::Age(RatingRange::new(0, U20_AGE_LIMIT - 1))],
        );
        writeln!(
            out,
            "[INFO] Players under {}: {} players",
            U20_AGE_LIMIT,
            under.len()
        )?;
    }

    if rows.is_empty() {
        writeln!(out, "\n[X] No players qualify for this report")?;
        return Ok(());
    }

    write_table(report, rows, ascii, out)?;

    match report {
        ReportKind::PotentialU20 => write_banner(out, "PLAYER DETAILS - FUTURE STARS")?,
        _ => write_banner(out, "PLAYER DETAILS")?,
    }
    for row in rows {
        write_details(report, row, ascii, out)?;
    }

    match report {
        ReportKind::Passers => {}
        ReportKind::Potential => write_gap_leaders(rows, GAP_LEADERS, ascii, out)?,
        ReportKind::PotentialU20 => {
            write_growth_ranking(rows, ascii, out)?;
            write_statistics(rows, out)?;
        }
    }
    Ok(())
}

fn write_table<W: Write>(
    report: ReportKind,
    rows: &[ReportRow],
    ascii: bool,
    out: &mut W,
) -> Result<()> {
    let label = metric_label(report);
    let metric_width = label.len().max(7);
    let header = format!(
        "Rank | {:<nw$} | {:<cw$} | {:<kw$} | {:>mw$} | Overall |  Age",
        "Name",
        "Club",
        "Country",
        label,
        nw = NAME_WIDTH,
        cw = CLUB_WIDTH,
        kw = COUNTRY_WIDTH,
        mw = metric_width,
    );
    writeln!(out, "\n{}", header)?;
    writeln!(out, "{}", "-".repeat(header.chars().count()))?;

    for row in rows {
        let name = truncate(&display_text(&row.short_name, ascii), NAME_WIDTH);
        let club = truncate(&display_text(&row.club_name, ascii), CLUB_WIDTH);
        let country = truncate(&display_text(&row.nationality_name, ascii), COUNTRY_WIDTH);
        writeln!(
            out,
            "{:>2}.  | {:<nw$} | {:<cw$} | {:<kw$} | {:>mw$} | {:>7} | {:>4}",
            row.rank,
            name,
            club,
            country,
            row.value,
            row.overall,
            row.age,
            nw = NAME_WIDTH,
            cw = CLUB_WIDTH,
            kw = COUNTRY_WIDTH,
            mw = metric_width,
        )?;
    }
    Ok(())
}

fn write_details<W: Write>(
    report: ReportKind,
    row: &ReportRow,
    ascii: bool,
    out: &mut W,
) -> Result<()> {
    let name = display_text(&row.short_name, ascii);
    match report {
        ReportKind::PotentialU20 => {
            writeln!(out, "\n{}. {} (Age: {} years)", row.rank, name, row.age)?
        }
        _ => writeln!(out, "\n{}. {}", row.rank, name)?,
    }
    writeln!(out, "   Club: {}", display_text(&row.club_name, ascii))?;
    writeln!(
        out,
        "   Country: {}",
        display_text(&row.nationality_name, ascii)
    )?;
    writeln!(out, "   {}: {}", metric_label(report), row.value)?;
    match report {
        ReportKind::PotentialU20 => {
            writeln!(out, "   Current Overall: {}", row.overall)?;
            writeln!(out, "   Growth Potential: +{} points", row.gap)?;
        }
        _ => {
            writeln!(out, "   Overall Rating: {}", row.overall)?;
            writeln!(out, "   Age: {} years", row.age)?;
        }
    }
    Ok(())
}

/// Rows reordered by gap, largest first; ties keep report order.
pub fn by_gap(rows: &[ReportRow]) -> Vec<&ReportRow> {
    let mut sorted: Vec<&ReportRow> = rows.iter().collect();
    sorted.sort_by_key(|r| Reverse(r.gap));
    sorted
}

fn write_gap_leaders<W: Write>(
    rows: &[ReportRow],
    count: usize,
    ascii: bool,
    out: &mut W,
) -> Result<()> {
    write_banner(out, "ADDITIONAL ANALYSIS")?;
    writeln!(
        out,
        "\nPlayers with the largest potential vs overall gap (high prospects):"
    )?;
    writeln!(out, "\nPlayers who have not reached their potential yet:")?;
    for (n, row) in by_gap(rows).into_iter().take(count).enumerate() {
        writeln!(
            out,
            "{}. {} - Gap: {} points",
            n + 1,
            display_text(&row.short_name, ascii),
            row.gap
        )?;
    }
    Ok(())
}

fn write_growth_ranking<W: Write>(rows: &[ReportRow], ascii: bool, out: &mut W) -> Result<()> {
    write_banner(out, "ADDITIONAL ANALYSIS")?;
    writeln!(out, "\nFuture stars with the most room to grow:")?;
    for (n, row) in by_gap(rows).into_iter().enumerate() {
        writeln!(
            out,
            "\n{}. {} ({} years)",
            n + 1,
            display_text(&row.short_name, ascii),
            row.age
        )?;
        writeln!(out, "   Club: {}", display_text(&row.club_name, ascii))?;
        writeln!(out, "   Potential: {}", row.value)?;
        writeln!(out, "   Current Overall: {}", row.overall)?;
        writeln!(out, "   Can grow: +{} points!", row.gap)?;
    }
    Ok(())
}

/// Mean age, potential, overall and gap over `rows`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportAverages {
    pub age: f64,
    pub potential: f64,
    pub overall: f64,
    pub gap: f64,
}

impl ReportAverages {
    pub fn of(rows: &[ReportRow]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let n = rows.len() as f64;
        let mean = |f: fn(&ReportRow) -> f64| rows.iter().map(f).sum::<f64>() / n;
        Some(Self {
            age: mean(|r| f64::from(r.age)),
            potential: mean(|r| f64::from(r.potential)),
            overall: mean(|r| f64::from(r.overall)),
            gap: mean(|r| f64::from(r.gap)),
        })
    }
}

fn write_statistics<W: Write>(rows: &[ReportRow], out: &mut W) -> Result<()> {
    let Some(avg) = ReportAverages::of(rows) else {
        return Ok(());
    };
    write_banner(out, "STATISTICS")?;
    writeln!(out, "Average Age: {:.1} years", avg.age)?;
    writeln!(out, "Average Potential: {:.1}", avg.potential)?;
    writeln!(out, "Average Overall: {:.1}", avg.overall)?;
    writeln!(out, "Average Growth Potential: {:.1} points", avg.gap)?;
    writeln!(out, "{}", rule('='))?;
    Ok(())
}
