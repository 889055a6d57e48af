//! # Balance Report Builder
//!
//! A library for turning labeled financial entries into a balance sheet
//! summary with solvency/liquidity ratios, a severity-tagged diagnosis
//! and a formatted two-sheet report.
//!
//! ## Core Concepts
//!
//! - **Entry**: one labeled line item `(categoria, tipo, valor)`; category
//!   labels classify by localized substring ("activos", "pasivos",
//!   "patrimonio", "corrientes")
//! - **Aggregation**: entries grouped by exact (category, kind) pair plus
//!   four synthetic `"TOTALES"` rows
//! - **Reconciled Equity**: the accounting identity is enforced by
//!   construction; downstream totals recompute equity as
//!   Assets - Liabilities rather than trusting the raw patrimonio sum
//! - **Diagnosis**: deterministic verdicts per ratio, each tagged
//!   Positive/Warning/Neutral so any presentation layer can color them
//!
//! ## Example
//!
//! ```rust,ignore
//! use balance_report_builder::*;
//! use chrono::NaiveDate;
//!
//! let entries = vec![
//!     Entry::new("Activos Corrientes", "Caja", 100.0),
//!     Entry::new("Activos Corrientes", "Bancos", 50.0),
//!     Entry::new("Pasivos Corrientes", "Proveedores", 60.0),
//! ];
//!
//! let analysis = analyze_entries(&entries)?;
//! export_report(
//!     "ACME S.A.",
//!     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//!     &analysis,
//!     Path::new("balance.txt"),
//! )?;
//! ```

pub mod aggregator;
pub mod diagnosis;
pub mod error;
pub mod ingestion;
pub mod ratios;
pub mod report;
pub mod schema;
pub mod utils;

pub use aggregator::{aggregate, aggregate_with_observer, compute_totals};
pub use diagnosis::narrate;
pub use error::{BalanceReportError, Result};
pub use ingestion::{coerce_value, entries_from_records};
pub use ratios::evaluate;
pub use report::{Report, Sheet};
pub use schema::*;
pub use utils::*;

use chrono::NaiveDate;
use log::{debug, info};
use std::path::Path;

/// Everything derived from one set of entries: the aggregated ledger, the
/// reconciled totals, the ratio set and the diagnosis. Transient; created
/// and consumed within a single computation.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceAnalysis {
    pub rows: Vec<AggregatedRow>,
    pub totals: Totals,
    pub ratios: RatioSet,
    pub diagnosis: Diagnosis,
}

/// Run the full computation pipeline over an immutable snapshot of
/// entries: aggregate, evaluate ratios, narrate.
///
/// The diagnosis preamble carries the reconciled totals (equity recomputed
/// as assets - liabilities).
pub fn analyze_entries(entries: &[Entry]) -> Result<BalanceAnalysis> {
    info!("Analyzing {} entries", entries.len());

    let rows = aggregate(entries);
    let totals = compute_totals(entries);
    let ratios = evaluate(&rows)?;
    let diagnosis = narrate(&ratios, Some(&totals));

    debug!(
        "Analysis complete: {} rows, assets={}, liabilities={}",
        rows.len(),
        totals.assets,
        totals.liabilities
    );

    Ok(BalanceAnalysis {
        rows,
        totals,
        ratios,
        diagnosis,
    })
}

/// Render an analysis into the two-sheet report and persist it with a
/// single write.
pub fn export_report(
    company_name: &str,
    as_of: NaiveDate,
    analysis: &BalanceAnalysis,
    output: &Path,
) -> Result<()> {
    let report = Report::build(
        company_name,
        as_of,
        &analysis.rows,
        Some(&analysis.ratios),
        Some(&analysis.diagnosis),
    )?;
    report.write_to(output)
}
