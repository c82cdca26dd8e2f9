//! Integration tests for command handlers

use std::io::Write;

use fifa_scout::{
    commands::{
        find::{handle_find, FindParams},
        load_dataset, resolve_data_path,
        search::Session,
        top::{handle_top, TopParams},
    },
    Dataset, Position, RatingRange, ReportKind, ScoutError, SortKey,
};
use tempfile::NamedTempFile;

const PLAYERS_CSV: &str = "\
sofifa_id,player_url,short_name,long_name,player_positions,overall,potential,value_eur,age,club_name,league_name,nationality_name,preferred_foot,passing
158023,/player/158023,L. Messi,Lionel Andrés Messi Cuccittini,\"RW, ST, CF\",93,93,78000000,34,Paris Saint-Germain,French Ligue 1,Argentina,Left,91
188545,/player/188545,R. Lewandowski,Robert Lewandowski,ST,92,92,119500000,32,FC Bayern München,German 1. Bundesliga,Poland,Right,79
231747,/player/231747,K. Mbappé,Kylian Mbappé Lottin,\"ST, LW\",91,95,194000000,22,Paris Saint-Germain,French Ligue 1,France,Right,80
200389,/player/200389,J. Oblak,Jan Oblak,GK,91,93,112000000,28,Atlético de Madrid,Spain Primera Division,Slovenia,Right,
251854,/player/251854,Pedri,Pedro González López,\"CM, CAM\",81,91,70500000,18,FC Barcelona,Spain Primera Division,Spain,Right,80
256630,/player/256630,F. Wirtz,Florian Wirtz,\"CAM, LM\",79,89,53000000,18,Bayer 04 Leverkusen,German 1. Bundesliga,Germany,Right,78
239085,/player/239085,E. Haaland,Erling Braut Haaland,ST,88,93,137500000,20,Borussia Dortmund,German 1. Bundesliga,Norway,Left,66
";

fn dataset_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PLAYERS_CSV.as_bytes()).unwrap();
    file
}

fn load() -> (NamedTempFile, Dataset) {
    let file = dataset_file();
    let path = resolve_data_path(Some(file.path().to_path_buf())).unwrap();
    let dataset = load_dataset(&path).unwrap();
    (file, dataset)
}

#[test]
fn test_load_full_export_ignores_extra_columns() {
    let (_file, ds) = load();
    assert_eq!(ds.len(), 7);
    assert!(ds.has_column("passing"));
    assert_eq!(ds.player(1).club(), "FC Bayern München");
}

#[test]
fn test_find_by_accented_club() {
    let (_file, ds) = load();
    let params = FindParams {
        club: Some("munchen".to_string()),
        ..FindParams::default()
    };
    let mut out = Vec::new();
    let summaries = handle_find(&ds, &params, &mut out).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "Robert Lewandowski");
}

#[test]
fn test_find_strikers_by_potential() {
    let (_file, ds) = load();
    let params = FindParams {
        positions: vec![Position::ST],
        potential: Some(RatingRange::new(93, 99)),
        sort: SortKey::Potential,
        ..FindParams::default()
    };
    let mut out = Vec::new();
    let summaries = handle_find(&ds, &params, &mut out).unwrap();
    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Kylian Mbappé Lottin",
            "Lionel Andrés Messi Cuccittini",
            "Erling Braut Haaland"
        ]
    );
}

#[test]
fn test_find_invalid_potential_range() {
    let (_file, ds) = load();
    let params = FindParams {
        potential: Some(RatingRange::new(90, 80)),
        ..FindParams::default()
    };
    let result = handle_find(&ds, &params, &mut Vec::new());
    assert!(matches!(result, Err(ScoutError::InvalidRange { .. })));
}

#[test]
fn test_top_potential_u20_export() {
    let (_file, ds) = load();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("u20.csv");
    let params = TopParams {
        out: Some(path.clone()),
        ..TopParams::new(ReportKind::PotentialU20)
    };

    let mut out = Vec::new();
    let rows = handle_top(&ds, &params, &mut out).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.short_name.as_str()).collect();
    assert_eq!(names, vec!["Pedri", "F. Wirtz"]);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 3);
    assert!(written.starts_with("short_name,club_name,nationality_name,potential,overall,age"));
}

#[test]
fn test_top_passers() {
    let (_file, ds) = load();
    let params = TopParams {
        export: false,
        limit: 2,
        ..TopParams::new(ReportKind::Passers)
    };
    let mut out = Vec::new();
    let rows = handle_top(&ds, &params, &mut out).unwrap();
    assert_eq!(rows[0].short_name, "L. Messi");
    assert_eq!(rows[1].short_name, "K. Mbappé");

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("TOP 2 PLAYERS BY PASSING"));
    assert!(out.contains("Passing: 91"));
}

#[test]
fn test_interactive_session_end_to_end() {
    let (_file, ds) = load();
    // Name search, skip refinement, continue, exit
    let script = "1\nhaaland\nn\n\n0\n";
    let mut out = Vec::new();
    Session::new(&ds, script.as_bytes(), &mut out, false)
        .run()
        .unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("[OK] Found 1 players"));
    assert!(out.contains("Name: Erling Braut Haaland"));
    assert!(out.contains("Club: Borussia Dortmund"));
    assert!(out.contains("Thank you for using fifa-scout!"));
}
