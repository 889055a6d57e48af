use crate::error::{BalanceReportError, Result};
use crate::schema::{is_current, AggregatedRow, CategoryTag, RatioSet, RatioValue};
use crate::utils::round2;
use log::debug;

/// Compute the three solvency/liquidity ratios from aggregated rows.
///
/// The synthetic `"TOTALES"` rows classify as `Unclassified` and are
/// skipped, so passing the full aggregator output is fine. A non-positive
/// denominator yields the `NotComputable` sentinel rather than an error;
/// malformed rows (non-finite values) fail with `RatioComputation` and no
/// partial set is returned.
pub fn evaluate(rows: &[AggregatedRow]) -> Result<RatioSet> {
    let mut assets = 0.0;
    let mut liabilities = 0.0;
    let mut equity_raw = 0.0;
    let mut current_assets = 0.0;
    let mut current_liabilities = 0.0;

    for row in rows {
        if !row.value.is_finite() {
            return Err(BalanceReportError::RatioComputation(format!(
                "row '{} / {}' has non-finite value {}",
                row.category, row.kind, row.value
            )));
        }

        let tag = CategoryTag::classify(&row.category);
        match tag {
            CategoryTag::Asset => assets += row.value,
            CategoryTag::Liability => liabilities += row.value,
            CategoryTag::Equity => equity_raw += row.value,
            CategoryTag::Unclassified => continue,
        }

        if is_current(&row.category) {
            match tag {
                CategoryTag::Asset => current_assets += row.value,
                CategoryTag::Liability => current_liabilities += row.value,
                _ => {}
            }
        }
    }

    let endeudamiento = ratio_or_sentinel(liabilities, assets);
    let liquidez = ratio_or_sentinel(current_assets, current_liabilities);
    let solvencia = ratio_or_sentinel(equity_raw, assets);

    debug!(
        "Ratios: endeudamiento={:?}, liquidez={:?}, solvencia={:?}",
        endeudamiento, liquidez, solvencia
    );

    Ok(RatioSet {
        endeudamiento,
        liquidez,
        solvencia,
    })
}

/// Divide and round to 2 decimals when the denominator is positive,
/// otherwise report the "not computable" sentinel.
fn ratio_or_sentinel(numerator: f64, denominator: f64) -> RatioValue {
    if denominator > 0.0 {
        RatioValue::Computed(round2(numerator / denominator))
    } else {
        RatioValue::NotComputable
    }
}
