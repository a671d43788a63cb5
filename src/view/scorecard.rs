use crate::model::{HoleScore, RoundRecord, ScoreDisplay, format_round_duration};
use chrono::Duration as ChronoDuration;
use maud::{DOCTYPE, Markup, html};

pub fn score_with_shape(score: i32, disp: ScoreDisplay) -> Markup {
    let shape = match disp {
        ScoreDisplay::Condor | ScoreDisplay::Albatross | ScoreDisplay::Eagle => "◆",
        ScoreDisplay::Birdie | ScoreDisplay::Par => "●",
        _ => "▲",
    };

    html! {
        span class=(disp.css_class()) { (shape) " " (score) }
    }
}

fn hole_cell(hole: &HoleScore) -> Markup {
    match (hole.strokes, hole.score_display()) {
        (Some(strokes), Some(disp)) => score_with_shape(strokes, disp),
        _ => html! { span class="unplayed" { "-" } },
    }
}

fn format_index(index: Option<f64>) -> String {
    index.map_or_else(|| "N/A".to_string(), |i| format!("{i:.1}"))
}

#[must_use]
pub fn render_round_table(record: &RoundRecord) -> Markup {
    html! {
        table class="scorecard-table" data-completed=(record.completed_at.to_rfc3339()) {
            thead {
                tr {
                    th colspan="4" class="topheader" {
                        (record.tee_set) " tees, "
                        (record.completed_at.format("%Y-%m-%d"))
                    }
                }
                tr {
                    th { "Hole" }
                    th { "Par" }
                    th { "Strokes" }
                    th { "Adj." }
                }
            }
            tbody {
                @for hole in &record.holes {
                    tr class="scorecard-row" data-hole=(hole.hole_number) {
                        td { (hole.hole_number) }
                        td { (hole.par) }
                        td { (hole_cell(hole)) }
                        td { @if let Some(adj) = hole.adjusted_strokes { (adj) } @else { "-" } }
                    }
                }
                tr class="scorecard-total" {
                    td colspan="2" { "Gross / Adjusted" }
                    td { (record.gross_score) }
                    td { (record.adjusted_gross_score) }
                }
                tr class="scorecard-differential" {
                    td colspan="3" { "Differential" }
                    td { (format!("{:.1}", record.differential)) }
                }
            }
        }
        p class="round-duration" {
            "Round time: " (format_round_duration(ChronoDuration::minutes(record.duration_minutes)))
        }
    }
}

/// Full page listing a player's rounds, most recent first.
#[must_use]
pub fn render_scorecard_page(
    player: &str,
    history: &[RoundRecord],
    handicap_index: Option<f64>,
) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Scorecards: " (player) }
            }
            body {
                h2 class="player" { (player) }
                p class="handicap-index" { "Handicap index: " (format_index(handicap_index)) }
                @if history.is_empty() {
                    p class="no-rounds" { "No rounds recorded yet." }
                }
                @for record in history {
                    (render_round_table(record))
                }
            }
        }
    }
}
