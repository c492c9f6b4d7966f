use crate::fixtures::ParseStats;
use crate::ranking::RankedEntry;

pub fn points_label(points: u64) -> &'static str {
    if points == 1 { "pt" } else { "pts" }
}

/// `<rank>. <team>, <points> pt|pts`, one line per entry.
pub fn standings_lines(entries: &[RankedEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            format!(
                "{}. {}, {} {}",
                e.rank,
                e.team,
                e.points,
                points_label(e.points)
            )
        })
        .collect()
}

pub fn standings_json(entries: &[RankedEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

pub fn stats_table(stats: &ParseStats) -> String {
    let headers = ["Imported", "Processed", "Failed"];
    let values = [
        stats.read.to_string(),
        stats.parsed.to_string(),
        stats.error.to_string(),
    ];
    let widths: Vec<usize> = headers
        .iter()
        .zip(values.iter())
        .map(|(h, v)| h.len().max(v.len()))
        .collect();

    let rule = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let rule = format!("+{rule}+");
    let header_row = headers
        .iter()
        .zip(widths.iter())
        .map(|(h, &w)| format!(" {h:<w$} "))
        .collect::<Vec<_>>()
        .join("|");
    let value_row = values
        .iter()
        .zip(widths.iter())
        .map(|(v, &w)| format!(" {v:>w$} "))
        .collect::<Vec<_>>()
        .join("|");

    [
        rule.clone(),
        format!("|{header_row}|"),
        rule.clone(),
        format!("|{value_row}|"),
        rule,
    ]
    .join("\n")
}
