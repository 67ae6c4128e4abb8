use serde::Serialize;

use crate::domain::{BoardAggregate, CardAggregate, EstimateRange};

/// Write-back instructions for one card or issue row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRender {
    pub key: String,
    pub title: String,
    pub badges: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnRender {
    pub key: String,
    pub name: String,
    pub total: String,
    pub cards: Vec<CardRender>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardRender {
    pub columns: Vec<ColumnRender>,
    pub total: String,
}

pub fn render_card_badge(consumed: f64, estimated: EstimateRange) -> String {
    let consumed_badge = (consumed != 0.0)
        .then(|| format!(r#"<div class="badge badge-consumed">{}</div>"#, consumed));
    let estimated_badge = (!estimated.is_zero())
        .then(|| format!(r#"<div class="badge badge-estimated">{}</div>"#, estimated));

    match (consumed_badge, estimated_badge) {
        (Some(consumed), Some(estimated)) => format!("{} {}", consumed, estimated),
        (Some(badge), None) | (None, Some(badge)) => badge,
        (None, None) => String::new(),
    }
}

pub fn render_column_total(consumed: f64, estimated: EstimateRange) -> String {
    format!(
        r#"<span class="color-consumed">{}</span> <span class="color-estimated">{}</span>"#,
        consumed, estimated
    )
}

/// Board header totals. An open range also shows its midpoint.
pub fn render_board_total(consumed: f64, estimated: EstimateRange) -> String {
    let average = if estimated.is_range() {
        format!(r#" <span class="point-average">~{}</span>"#, estimated.midpoint())
    } else {
        String::new()
    };

    format!(
        concat!(
            r#"<span class="color-consumed"><span class="point">{}</span> consumed</span> "#,
            r#"<span class="color-estimated"><span class="point">{}</span> scheduled{}</span>"#,
        ),
        consumed, estimated, average
    )
}

pub fn render_card(card: &CardAggregate) -> CardRender {
    CardRender {
        key: card.key.clone(),
        title: card.title.clone(),
        badges: render_card_badge(card.annotation.consumed, card.annotation.estimated),
    }
}

pub fn render_board(board: &BoardAggregate) -> BoardRender {
    let columns = board
        .columns
        .iter()
        .map(|column| ColumnRender {
            key: column.key.clone(),
            name: column.name.clone(),
            total: render_column_total(column.totals.consumed, column.totals.estimated),
            cards: column.cards.iter().map(render_card).collect(),
        })
        .collect();

    BoardRender {
        columns,
        total: render_board_total(board.totals.consumed, board.totals.estimated),
    }
}
