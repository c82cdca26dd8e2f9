//! Console formatting shared across commands.

use std::io::{self, Write};

use crate::{
    cli::types::SortKey,
    core::{
        filters::{rank, rankable},
        normalize::display_text,
    },
    dataset::{Dataset, Player},
};

/// Width of banners and separators.
pub const RULE_WIDTH: usize = 60;

/// Players shown right after a search.
pub const PREVIEW_LIMIT: usize = 10;

/// Players shown for final and range results.
pub const RESULT_LIMIT: usize = 20;

pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

/// Title framed by `=` rules, preceded by a blank line.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", rule('='))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule('='))
}

/// Cut `s` to at most `max` characters.
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

pub fn write_player_card<W: Write>(out: &mut W, player: &Player, ascii: bool) -> io::Result<()> {
    writeln!(out, "\nName: {}", display_text(&player.long_name, ascii))?;
    writeln!(out, "Age: {} years", player.age)?;
    writeln!(
        out,
        "Positions: {}",
        display_text(&player.player_positions, ascii)
    )?;
    writeln!(
        out,
        "Overall: {} | Potential: {}",
        player.overall, player.potential
    )?;
    writeln!(out, "Club: {}", display_text(player.club(), ascii))?;
    writeln!(
        out,
        "Country: {}",
        display_text(&player.nationality_name, ascii)
    )?;
    writeln!(out, "{}", rule('-'))
}

/// Print the top `limit` of `selection` ranked by `key`, then how many were
/// left out. Rows without a value for `key` are not counted.
pub fn write_results<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    selection: &[usize],
    key: SortKey,
    limit: usize,
    ascii: bool,
) -> io::Result<()> {
    let pool = rankable(dataset, selection, key);
    if pool == 0 {
        return writeln!(out, "[X] No players found");
    }

    writeln!(out, "\n{}", rule('-'))?;
    for i in rank(dataset, selection, key, limit) {
        write_player_card(out, dataset.player(i), ascii)?;
    }

    if pool > limit {
        writeln!(
            out,
            "\n... and {} more players (showing top {})",
            pool - limit,
            limit
        )?;
    }
    Ok(())
}
