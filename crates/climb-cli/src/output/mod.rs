use climb_core::{Attempt, Climb, ClimbStore};
use serde::Serialize;

use crate::cli::OutputFormat;

pub mod table;

const HEADERS: [&str; 7] = [
    "name", "location", "comments", "type", "grade", "stars", "attempts",
];

/// Render the whole collection in the requested format.
pub fn render_climbs(
    store: &ClimbStore,
    format: OutputFormat,
    max_width: Option<usize>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(store, max_width)),
        OutputFormat::Json => {
            let views = store.iter().map(ClimbView::from).collect::<Vec<_>>();
            Ok(serde_json::to_string_pretty(&views)?)
        }
    }
}

/// Terminal width from `COLUMNS`, ignored when implausibly small.
pub fn term_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

fn render_table(store: &ClimbStore, max_width: Option<usize>) -> String {
    if store.is_empty() {
        return String::from("(no climbs)");
    }

    let rows = store.iter().map(climb_row).collect::<Vec<_>>();
    let layout = table::TableLayout::new(&HEADERS, &rows, max_width);

    let mut lines = Vec::with_capacity(2 + rows.len() + store.attempt_count());
    lines.push(layout.header_line());
    lines.push(layout.divider());
    for (climb, row) in store.iter().zip(&rows) {
        lines.push(layout.row_line(row));
        for (number, attempt) in climb.attempts().iter().enumerate() {
            lines.push(attempt_line(number + 1, attempt));
        }
    }
    lines.join("\n")
}

fn climb_row(climb: &Climb) -> Vec<String> {
    vec![
        climb.name().to_string(),
        climb.location().to_string(),
        climb.comments().to_string(),
        climb.climb_type().to_string(),
        climb.grade_label().to_string(),
        climb.stars().to_string(),
        climb.attempts().len().to_string(),
    ]
}

fn attempt_line(number: usize, attempt: &Attempt) -> String {
    let mut line = format!(
        "  [{number}]: {}, {}, {}",
        attempt.date, attempt.style, attempt.performance
    );
    if !attempt.comments.is_empty() {
        line.push_str(", ");
        line.push_str(&attempt.comments);
    }
    line
}

/// JSON shape for `print --format json`: labels instead of table indices.
#[derive(Debug, Serialize)]
struct ClimbView<'a> {
    name: &'a str,
    location: &'a str,
    #[serde(rename = "type")]
    climb_type: &'static str,
    grade: &'static str,
    stars: u8,
    comments: &'a str,
    attempts: Vec<AttemptView<'a>>,
}

#[derive(Debug, Serialize)]
struct AttemptView<'a> {
    date: String,
    style: &'static str,
    performance: &'static str,
    comments: &'a str,
}

impl<'a> From<&'a Climb> for ClimbView<'a> {
    fn from(climb: &'a Climb) -> Self {
        Self {
            name: climb.name(),
            location: climb.location(),
            climb_type: climb.climb_type().as_str(),
            grade: climb.grade_label(),
            stars: climb.stars().get(),
            comments: climb.comments(),
            attempts: climb
                .attempts()
                .iter()
                .map(|attempt| AttemptView {
                    date: attempt.date.to_string(),
                    style: attempt.style.as_str(),
                    performance: attempt.performance.as_str(),
                    comments: &attempt.comments,
                })
                .collect(),
        }
    }
}
