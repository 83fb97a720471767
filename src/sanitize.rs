use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Result, TournamentError};
use crate::swiss::PlayerId;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalizes a free-text player name before it is stored.
///
/// Whitespace runs collapse to a single space and HTML-significant
/// characters are escaped as entities.
pub fn sanitize_name(raw: &str) -> Result<String> {
    let collapsed = WHITESPACE_RUN.replace_all(raw.trim(), " ");
    if collapsed.is_empty() {
        return Err(TournamentError::InvalidName);
    }
    Ok(escape_html(&collapsed))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Parses a player id supplied as text (CLI argument, URL segment).
pub fn parse_player_id(raw: &str) -> Result<PlayerId> {
    let id = raw
        .trim()
        .parse::<PlayerId>()
        .map_err(|_| TournamentError::InvalidId(raw.to_string()))?;
    validate_player_id(id)
}

pub fn validate_player_id(id: PlayerId) -> Result<PlayerId> {
    if id <= 0 {
        return Err(TournamentError::InvalidId(id.to_string()));
    }
    Ok(id)
}
