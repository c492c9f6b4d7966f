use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Line grammar: `<home name> <home score>,<away name> <away score>`.
pub const RECORD_PATTERN: &str = r"^(\D*) (\d+),(\D*) (\d+)$";

static RECORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(RECORD_PATTERN).expect("record pattern is valid"));
static NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w ,]+").expect("noise pattern is valid"));
static SPACING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("spacing pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unusable record: '{0}'")]
    Unusable(String),
    #[error("invalid record format: '{0}' does not match {RECORD_PATTERN}")]
    InvalidFormat(String),
}

/// The four trimmed capture groups of a record that matched the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatch {
    pub home_name: String,
    pub home_score: String,
    pub away_name: String,
    pub away_score: String,
}

/// Lenient clean-up applied before matching when strict parsing is off.
///
/// Punctuation becomes a space, whitespace and underscore runs collapse to a
/// single space, and the ends are trimmed. Letter case is left alone, so
/// `FC Awesome` stays `FC Awesome`.
pub fn normalize_record(record: &str) -> String {
    let cleaned = NOISE_RE.replace_all(record, " ");
    let collapsed = SPACING_RE.replace_all(&cleaned, " ");
    collapsed.trim().to_string()
}

pub fn match_record(record: &str, strict: bool) -> Result<RecordMatch, RecordError> {
    let record = if strict {
        record.to_string()
    } else {
        normalize_record(record)
    };

    if record.is_empty() {
        return Err(RecordError::Unusable(record));
    }

    let Some(out) = RECORD_RE.captures(&record).map(|caps| {
        let group = |idx: usize| {
            caps.get(idx)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        };
        RecordMatch {
            home_name: group(1),
            home_score: group(2),
            away_name: group(3),
            away_score: group(4),
        }
    }) else {
        return Err(RecordError::InvalidFormat(record));
    };
    // `\D*` admits an empty name; a team always has one.
    if out.home_name.is_empty() || out.away_name.is_empty() {
        return Err(RecordError::InvalidFormat(record));
    }
    // Strict records must already be in normalized form.
    if strict && !(is_canonical_name(&out.home_name) && is_canonical_name(&out.away_name)) {
        return Err(RecordError::InvalidFormat(record));
    }
    Ok(out)
}

fn is_canonical_name(name: &str) -> bool {
    normalize_record(name) == name
}
