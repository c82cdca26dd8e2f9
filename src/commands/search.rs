//! Interactive menu-driven player search.
//!
//! A [`Session`] reads answers line by line from any `BufRead` and writes to
//! any `Write`, so the whole dialogue can be scripted in tests. Bad input
//! never ends the session: it prints a message and abandons the current
//! action. End of input leaves the session cleanly.

use std::{
    collections::BTreeSet,
    fmt::Display,
    io::{BufRead, Write},
};

use tracing::info;

use crate::{
    cli::types::{Position, RatingRange, SortKey, AGE_BOUNDS, RATING_BOUNDS},
    core::{
        filters::{refine, search, FilterKind, PlayerFilter, TextQuery},
        normalize::display_text,
    },
    dataset::{Dataset, Stat},
    Result,
};

use super::common::{write_banner, write_results, rule, PREVIEW_LIMIT, RESULT_LIMIT};

/// One interactive session over a loaded dataset.
pub struct Session<'a, R, W> {
    dataset: &'a Dataset,
    input: R,
    out: W,
    ascii: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(dataset: &'a Dataset, input: R, out: W, ascii: bool) -> Self {
        Self {
            dataset,
            input,
            out,
            ascii,
        }
    }

    /// Main menu loop; returns on `0` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_main_menu()?;
            let Some(choice) = self.prompt("\nEnter your choice (1-6, or 0 to exit): ")? else {
                break;
            };

            match choice.as_str() {
                "0" => {
                    writeln!(self.out, "\nThank you for using fifa-scout!")?;
                    break;
                }
                "1" => self.search_by_name()?,
                "2" => self.search_by_club()?,
                "3" => self.search_by_country()?,
                "4" => self.search_by_potential()?,
                "5" => self.search_by_age()?,
                "6" => self.search_by_position()?,
                _ => writeln!(
                    self.out,
                    "\n[X] Invalid choice! Enter a number 1-6, or 0."
                )?,
            }

            if self.prompt("\nPress Enter to continue...")?.is_none() {
                break;
            }
        }
        Ok(())
    }

    fn show_main_menu(&mut self) -> Result<()> {
        write_banner(&mut self.out, "         FIFA PLAYER SEARCH")?;
        writeln!(self.out, "\nChoose a search option:")?;
        writeln!(self.out, "1. Search by player name")?;
        writeln!(self.out, "2. Search by club")?;
        writeln!(self.out, "3. Search by country")?;
        writeln!(self.out, "4. Search by potential (range)")?;
        writeln!(self.out, "5. Search by age (range)")?;
        writeln!(self.out, "6. Search by position")?;
        writeln!(self.out, "0. Exit")?;
        writeln!(self.out, "{}", rule('='))?;
        Ok(())
    }

    fn search_by_name(&mut self) -> Result<()> {
        write_banner(&mut self.out, "SEARCH PLAYERS BY NAME")?;
        let Some(name) = self.prompt("\nEnter the player name to search for: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.out, "[X] Name cannot be empty!")?;
            return Ok(());
        }

        let results = search(self.dataset, &[PlayerFilter::Name(name.clone())]);
        if results.is_empty() {
            writeln!(self.out, "\n[X] No players named {} found", name)?;
            return Ok(());
        }

        writeln!(self.out, "\n[OK] Found {} players", results.len())?;
        self.show_preview_and_offer_refinement(results, FilterKind::Name)
    }

    fn search_by_club(&mut self) -> Result<()> {
        write_banner(&mut self.out, "SEARCH PLAYERS BY CLUB")?;
        let all = self.dataset.all();
        let leagues = self.dataset.leagues(&all);
        self.write_numbered("Leagues", &leagues)?;

        let Some(choice) = self.read_number("\nPick a league number (or 0 to type a club name): ")?
        else {
            return Ok(());
        };

        let (filter, club) = if choice == 0 {
            let Some(club) = self.prompt("\nEnter the club name to search for: ")? else {
                return Ok(());
            };
            if club.is_empty() {
                writeln!(self.out, "[X] Club name cannot be empty!")?;
                return Ok(());
            }
            (PlayerFilter::Club(TextQuery::Contains(club.clone())), club)
        } else if let Some(league) = leagues.get(choice - 1) {
            let clubs = self.dataset.clubs_in_league(&all, league);
            let title = format!("Clubs in {}", display_text(league, self.ascii));
            let Some(club) = self.pick(&title, &clubs, "\nPick a club number: ")? else {
                return Ok(());
            };
            (PlayerFilter::Club(TextQuery::Exact(club.clone())), club)
        } else {
            writeln!(self.out, "[X] Invalid choice!")?;
            return Ok(());
        };

        let club = display_text(&club, self.ascii).into_owned();
        let results = search(self.dataset, &[filter]);
        if results.is_empty() {
            writeln!(self.out, "\n[X] No players from club {} found", club)?;
            return Ok(());
        }

        writeln!(
            self.out,
            "\n[OK] Found {} players from club {}",
            results.len(),
            club
        )?;
        self.show_preview_and_offer_refinement(results, FilterKind::Club)
    }

    fn search_by_country(&mut self) -> Result<()> {
        write_banner(&mut self.out, "SEARCH PLAYERS BY COUNTRY")?;
        let countries = self.dataset.nationalities(&self.dataset.all());
        let Some(country) = self.pick("Countries", &countries, "\nPick a country number: ")?
        else {
            return Ok(());
        };

        let results = search(
            self.dataset,
            &[PlayerFilter::Country(TextQuery::Exact(country.clone()))],
        );
        let country = display_text(&country, self.ascii).into_owned();
        if results.is_empty() {
            writeln!(self.out, "\n[X] No players from {} found", country)?;
            return Ok(());
        }

        writeln!(
            self.out,
            "\n[OK] Found {} players from {}",
            results.len(),
            country
        )?;
        self.show_preview_and_offer_refinement(results, FilterKind::Country)
    }

    fn search_by_potential(&mut self) -> Result<()> {
        write_banner(&mut self.out, "SEARCH PLAYERS BY POTENTIAL")?;
        let all = self.dataset.all();
        let Some(range) = self.read_range("Potential", &all, Stat::Potential, RATING_BOUNDS)? else {
            return Ok(());
        };

        let results = search(self.dataset, &[PlayerFilter::Potential(range)]);
        if results.is_empty() {
            writeln!(self.out, "\n[X] No players with potential {}", range)?;
            return Ok(());
        }
        writeln!(
            self.out,
            "\n[OK] Found {} players with potential {}:",
            results.len(),
            range
        )?;
        write_results(
            &mut self.out,
            self.dataset,
            &results,
            SortKey::Potential,
            RESULT_LIMIT,
            self.ascii,
        )?;
        Ok(())
    }

    fn search_by_age(&mut self) -> Result<()> {
        write_banner(&mut self.out, "SEARCH PLAYERS BY AGE")?;
        let all = self.dataset.all();
        let Some(range) = self.read_range("Age", &all, Stat::Age, AGE_BOUNDS)? else {
            return Ok(());
        };

        let results = search(self.dataset, &[PlayerFilter::Age(range)]);
        if results.is_empty() {
            writeln!(self.out, "\n[X] No players aged {} years", range)?;
            return Ok(());
        }
        writeln!(
            self.out,
            "\n[OK] Found {} players aged {} years:",
            results.len(),
            range
        )?;
        write_results(
            &mut self.out,
            self.dataset,
            &results,
            SortKey::Overall,
            RESULT_LIMIT,
            self.ascii,
        )?;
        Ok(())
    }

    fn search_by_position(&mut self) -> Result<()> {
        write_banner(&mut self.out, "SEARCH PLAYERS BY POSITION")?;
        let positions = self.dataset.positions(&self.dataset.all());
        let Some(position) = self.pick("Positions", &positions, "\nPick a position number: ")?
        else {
            return Ok(());
        };

        let results = search(self.dataset, &[PlayerFilter::Position(position)]);
        if results.is_empty() {
            writeln!(self.out, "\n[X] No players playing {}", position)?;
            return Ok(());
        }
        writeln!(
            self.out,
            "\n[OK] Found {} players playing {}:",
            results.len(),
            position
        )?;
        write_results(
            &mut self.out,
            self.dataset,
            &results,
            SortKey::Overall,
            RESULT_LIMIT,
            self.ascii,
        )?;
        Ok(())
    }

    fn show_preview_and_offer_refinement(
        &mut self,
        results: Vec<usize>,
        used: FilterKind,
    ) -> Result<()> {
        write_results(
            &mut self.out,
            self.dataset,
            &results,
            SortKey::Overall,
            PREVIEW_LIMIT,
            self.ascii,
        )?;
        if results.len() > PREVIEW_LIMIT {
            writeln!(self.out, "\n[TIP] Use filters to narrow down the results")?;
        }

        let answer = self.prompt("\nWould you like to add filters? (y/n): ")?;
        if answer.map(|a| a.to_lowercase()) == Some("y".to_string()) {
            let final_results = self.refine(&results, BTreeSet::from([used]))?;
            write_banner(&mut self.out, "FINAL RESULTS")?;
            write_results(
                &mut self.out,
                self.dataset,
                &final_results,
                SortKey::Overall,
                RESULT_LIMIT,
                self.ascii,
            )?;
        }
        Ok(())
    }

    /// Refinement menu over `current`. Returns the narrowed selection, or
    /// `current` itself if a filter leaves nothing.
    pub fn refine(
        &mut self,
        current: &[usize],
        mut disabled: BTreeSet<FilterKind>,
    ) -> Result<Vec<usize>> {
        let mut results = current.to_vec();
        loop {
            self.show_filter_menu(&disabled)?;
            let Some(choice) = self.prompt("\nChoose a filter (1-6, or 0 to go back): ")? else {
                return Ok(results);
            };

            let kind = match choice.as_str() {
                "0" => return Ok(results),
                "6" => {
                    write_results(
                        &mut self.out,
                        self.dataset,
                        &results,
                        SortKey::Overall,
                        RESULT_LIMIT,
                        self.ascii,
                    )?;
                    if self
                        .prompt("\nPress Enter to return to the filter menu...")?
                        .is_none()
                    {
                        return Ok(results);
                    }
                    continue;
                }
                "1" => Some(FilterKind::Club),
                "2" => Some(FilterKind::Country),
                "3" => Some(FilterKind::Potential),
                "4" => Some(FilterKind::Age),
                "5" => Some(FilterKind::Position),
                _ => None,
            };

            match kind.filter(|k| !disabled.contains(k)) {
                Some(kind) => {
                    if let Some(filter) = self.choose_filter(kind, &results)? {
                        info!(%filter, "refinement applied");
                        results = refine(self.dataset, &results, &filter);
                        writeln!(
                            self.out,
                            "[OK] {} filter applied. Remaining: {} players",
                            filter_label(kind),
                            results.len()
                        )?;
                        disabled.insert(kind);
                    }
                }
                None => writeln!(self.out, "[X] Invalid choice or option already used!")?,
            }

            writeln!(self.out, "\n[INFO] Current results: {} players", results.len())?;
            if results.is_empty() {
                writeln!(
                    self.out,
                    "[X] No results left after filtering. Restoring previous results."
                )?;
                return Ok(current.to_vec());
            }
        }
    }

    fn show_filter_menu(&mut self, disabled: &BTreeSet<FilterKind>) -> Result<()> {
        write_banner(&mut self.out, "      ADDITIONAL FILTERS")?;
        writeln!(self.out, "Choose a filter option:")?;
        let options = [
            (FilterKind::Club, "1. Filter by club"),
            (FilterKind::Country, "2. Filter by country"),
            (FilterKind::Potential, "3. Filter by potential (range)"),
            (FilterKind::Age, "4. Filter by age (range)"),
            (FilterKind::Position, "5. Filter by position"),
        ];
        for (kind, label) in options {
            if !disabled.contains(&kind) {
                writeln!(self.out, "{}", label)?;
            }
        }
        writeln!(self.out, "6. View current results")?;
        writeln!(self.out, "0. Back to main menu")?;
        writeln!(self.out, "{}", rule('='))?;
        Ok(())
    }

    /// Ask for the details of a refinement filter, drawing choices from
    /// `results`. `None` when the user's answer was unusable.
    fn choose_filter(
        &mut self,
        kind: FilterKind,
        results: &[usize],
    ) -> Result<Option<PlayerFilter>> {
        let filter = match kind {
            FilterKind::Club => {
                let leagues = self.dataset.leagues(results);
                let clubs = if leagues.is_empty() {
                    self.dataset.clubs(results)
                } else {
                    let Some(league) = self.pick("Leagues", &leagues, "\nPick a league number: ")?
                    else {
                        return Ok(None);
                    };
                    self.dataset.clubs_in_league(results, &league)
                };
                self.pick("Clubs", &clubs, "\nPick a club number: ")?
                    .map(|club| PlayerFilter::Club(TextQuery::Exact(club)))
            }
            FilterKind::Country => {
                let countries = self.dataset.nationalities(results);
                self.pick("Countries", &countries, "\nPick a country number: ")?
                    .map(|c| PlayerFilter::Country(TextQuery::Exact(c)))
            }
            FilterKind::Potential => self
                .read_range(
                    "Potential in current results",
                    results,
                    Stat::Potential,
                    RATING_BOUNDS,
                )?
                .map(PlayerFilter::Potential),
            FilterKind::Age => self
                .read_range("Age in current results", results, Stat::Age, AGE_BOUNDS)?
                .map(PlayerFilter::Age),
            FilterKind::Position => {
                let positions: Vec<Position> = self.dataset.positions(results);
                self.pick("Positions", &positions, "\nPick a position number: ")?
                    .map(PlayerFilter::Position)
            }
            FilterKind::Name => None,
        };
        Ok(filter)
    }

    /// Show the stat's bounds over `selection`, then ask for a min and max.
    fn read_range(
        &mut self,
        heading: &str,
        selection: &[usize],
        stat: Stat,
        bounds: (u8, u8),
    ) -> Result<Option<RatingRange>> {
        if let Some((lowest, highest)) = self.dataset.bounds(selection, stat) {
            writeln!(self.out, "\n{}:", heading)?;
            writeln!(self.out, "[Lowest: {}]", lowest)?;
            writeln!(self.out, "[Highest: {}]", highest)?;
        }

        let field = heading
            .split_whitespace()
            .next()
            .unwrap_or(heading)
            .to_lowercase();
        let Some(lo) = self.prompt(&format!("\nMinimum {}: ", field))? else {
            return Ok(None);
        };
        let Some(hi) = self.prompt(&format!("Maximum {}: ", field))? else {
            return Ok(None);
        };

        let (Ok(lo), Ok(hi)) = (lo.parse::<i64>(), hi.parse::<i64>()) else {
            writeln!(self.out, "[X] Invalid input! Enter numbers only.")?;
            return Ok(None);
        };

        match RatingRange::within(&field, lo, hi, bounds) {
            Ok(range) => Ok(Some(range)),
            Err(e) => {
                writeln!(self.out, "[X] {}", e)?;
                Ok(None)
            }
        }
    }

    /// Print `items` numbered from 1 and let the user pick one.
    fn pick<T: Clone + Display>(
        &mut self,
        title: &str,
        items: &[T],
        question: &str,
    ) -> Result<Option<T>> {
        self.write_numbered(title, items)?;
        let Some(choice) = self.read_number(question)? else {
            return Ok(None);
        };
        match choice.checked_sub(1).and_then(|i| items.get(i)) {
            Some(item) => Ok(Some(item.clone())),
            None => {
                writeln!(self.out, "[X] Invalid choice!")?;
                Ok(None)
            }
        }
    }

    fn write_numbered<T: Display>(&mut self, title: &str, items: &[T]) -> Result<()> {
        writeln!(self.out, "\n{}:", title)?;
        for (i, item) in items.iter().enumerate() {
            let text = item.to_string();
            writeln!(self.out, "{}. {}", i + 1, display_text(&text, self.ascii))?;
        }
        Ok(())
    }

    /// `None` on end of input or a non-numeric answer (which is reported).
    fn read_number(&mut self, question: &str) -> Result<Option<usize>> {
        let Some(answer) = self.prompt(question)? else {
            return Ok(None);
        };
        match answer.parse::<usize>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                writeln!(self.out, "[X] Enter a number!")?;
                Ok(None)
            }
        }
    }

    /// Write `question`, read one trimmed line. `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn filter_label(kind: FilterKind) -> &'static str {
    match kind {
        FilterKind::Name => "Name",
        FilterKind::Club => "Club",
        FilterKind::Country => "Country",
        FilterKind::Potential => "Potential",
        FilterKind::Age => "Age",
        FilterKind::Position => "Position",
    }
}
