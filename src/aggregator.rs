use crate::schema::{
    AggregatedRow, CategoryTag, Entry, Totals, TOTALS_CATEGORY, TOTAL_ASSETS_LABEL,
    TOTAL_EQUITY_LABEL, TOTAL_LIABILITIES_EQUITY_LABEL, TOTAL_LIABILITIES_LABEL,
};
use log::debug;
use std::collections::BTreeMap;

/// Sum entries into top-level totals, classifying each entry once.
///
/// `equity_raw` is the plain sum of equity-classified entries; callers
/// needing the accounting identity use `Totals::reconciled_equity()`.
pub fn compute_totals(entries: &[Entry]) -> Totals {
    let mut totals = Totals {
        assets: 0.0,
        liabilities: 0.0,
        equity_raw: 0.0,
    };

    for entry in entries {
        match CategoryTag::classify(&entry.category) {
            CategoryTag::Asset => totals.assets += entry.value,
            CategoryTag::Liability => totals.liabilities += entry.value,
            CategoryTag::Equity => totals.equity_raw += entry.value,
            CategoryTag::Unclassified => {}
        }
    }

    totals
}

/// Group entries by exact (category, kind) pair and append the four
/// synthetic `"TOTALES"` rows in fixed order.
///
/// Grouped rows are ordered category-then-kind; the ordering is stable
/// within a call and independent of entry order. Pure over its input.
pub fn aggregate(entries: &[Entry]) -> Vec<AggregatedRow> {
    aggregate_with_observer(entries, None)
}

/// Same as [`aggregate`], invoking the observer exactly once with the
/// final rows for instrumentation.
pub fn aggregate_with_observer(
    entries: &[Entry],
    observer: Option<&dyn Fn(&[AggregatedRow])>,
) -> Vec<AggregatedRow> {
    let mut groups: BTreeMap<(String, String), f64> = BTreeMap::new();
    for entry in entries {
        *groups
            .entry((entry.category.clone(), entry.kind.clone()))
            .or_insert(0.0) += entry.value;
    }

    let totals = compute_totals(entries);
    debug!(
        "Aggregated {} entries into {} groups (assets={}, liabilities={}, equity_raw={})",
        entries.len(),
        groups.len(),
        totals.assets,
        totals.liabilities,
        totals.equity_raw
    );

    let mut rows: Vec<AggregatedRow> = groups
        .into_iter()
        .map(|((category, kind), value)| AggregatedRow {
            category,
            kind,
            value,
        })
        .collect();

    // The generic summary table reports the raw patrimonio sum, not the
    // reconciled equity.
    let summary = [
        (TOTAL_ASSETS_LABEL, totals.assets),
        (TOTAL_LIABILITIES_LABEL, totals.liabilities),
        (TOTAL_EQUITY_LABEL, totals.equity_raw),
        (
            TOTAL_LIABILITIES_EQUITY_LABEL,
            totals.liabilities_plus_equity_raw(),
        ),
    ];
    for (label, value) in summary {
        rows.push(AggregatedRow {
            category: TOTALS_CATEGORY.to_string(),
            kind: label.to_string(),
            value,
        });
    }

    if let Some(callback) = observer {
        callback(&rows);
    }

    rows
}
