use crate::domain::{
    BoardAggregate, CardAggregate, CardSnapshot, ColumnAggregate, ColumnSnapshot,
    ExclusionPolicy, ExportRecord, Totals,
};

use super::annotation_parser;

/// Parse one card and strip its title.
pub fn annotate_card(card: &CardSnapshot) -> CardAggregate {
    let parsed = annotation_parser::parse(&card.title, &card.labels);

    CardAggregate {
        key: card.key.clone(),
        id: card.identifier(),
        title: parsed.title,
        url: card.url.clone(),
        annotation: parsed.annotation,
    }
}

/// Sum one column. Excluded columns keep their consumed points but never
/// contribute to estimates.
pub fn aggregate_column(column: &ColumnSnapshot, policy: &ExclusionPolicy) -> ColumnAggregate {
    let excluded = policy.is_excluded(&column.name);
    let cards: Vec<CardAggregate> = column.cards.iter().map(annotate_card).collect();

    let totals = cards
        .iter()
        .fold(Totals::default(), |totals, card| {
            totals.add(&card.annotation, !excluded)
        });

    ColumnAggregate {
        key: column.key.clone(),
        name: column.name.clone(),
        excluded,
        totals,
        cards,
    }
}

/// Aggregate a whole board snapshot from scratch.
pub fn aggregate(columns: &[ColumnSnapshot], policy: &ExclusionPolicy) -> BoardAggregate {
    let columns: Vec<ColumnAggregate> = columns
        .iter()
        .map(|column| aggregate_column(column, policy))
        .collect();

    let totals = columns
        .iter()
        .fold(Totals::default(), |totals, column| totals.merge(&column.totals));

    let records = columns.iter().flat_map(export_records).collect();

    BoardAggregate {
        columns,
        totals,
        records,
    }
}

/// Issue-list rows carry no labels and have no totals.
pub fn annotate_issues(issues: &[CardSnapshot]) -> Vec<CardAggregate> {
    issues
        .iter()
        .map(|issue| {
            annotate_card(&CardSnapshot {
                labels: Vec::new(),
                ..issue.clone()
            })
        })
        .collect()
}

fn export_records(column: &ColumnAggregate) -> impl Iterator<Item = ExportRecord> + '_ {
    column.cards.iter().map(move |card| ExportRecord {
        column: column.name.clone(),
        id: card.id.clone(),
        title: card.title.clone(),
        url: card.url.clone().unwrap_or_else(|| "/".to_string()),
        min_estimate: card.annotation.estimated.min,
        max_estimate: card.annotation.estimated.max,
        consumed: card.annotation.consumed,
    })
}
