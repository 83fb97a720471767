use crate::swiss::{PairingRecord, StandingRecord};

pub fn standings_table(standings: &[StandingRecord]) -> String {
    let name_width = column_width(standings.iter().map(|s| s.name.as_str()), "Name");
    let mut out = format!(
        "{:>6}  {:<name_width$}  {:>4}  {:>7}\n",
        "Id", "Name", "Wins", "Matches"
    );

    for s in standings {
        out.push_str(&format!(
            "{:>6}  {:<name_width$}  {:>4}  {:>7}\n",
            s.id, s.name, s.wins, s.matches_played
        ));
    }
    out
}

pub fn pairings_table(pairings: &[PairingRecord]) -> String {
    if pairings.is_empty() {
        return String::new();
    }

    let name_width = column_width(pairings.iter().map(|p| p.name1.as_str()), "Player");
    let mut out = format!(
        "{:>3}  {:>6} {:<name_width$}      {:>6} {}\n",
        "#", "Id", "Player", "Id", "Opponent"
    );

    for (round_match, p) in pairings.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:>6} {:<name_width$}  vs  {:>6} {}\n",
            round_match + 1,
            p.id1,
            p.name1,
            p.id2,
            p.name2
        ));
    }
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}
