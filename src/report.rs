use crate::error::{BalanceReportError, Result};
use crate::schema::{AggregatedRow, Diagnosis, RatioSet};
use crate::utils::{format_amount, title_case};
use chrono::NaiveDate;
use log::info;
use std::fs;
use std::path::Path;

const CATEGORY_WIDTH: usize = 30;
const KIND_WIDTH: usize = 40;
const VALUE_WIDTH: usize = 20;
const TABLE_WIDTH: usize = CATEGORY_WIDTH + KIND_WIDTH + VALUE_WIDTH;

const LEDGER_SHEET: &str = "Balance General";
const DIAGNOSIS_SHEET: &str = "Diagnóstico";

/// One logical sheet of the rendered document.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub lines: Vec<String>,
}

/// The full two-sheet report, built entirely in memory so persisting is a
/// single write with no partially-written output on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sheets: Vec<Sheet>,
}

impl Report {
    /// Build the report document: ledger table plus optional ratios and
    /// diagnosis blocks on the first sheet, and a plain-text diagnosis
    /// sheet when a diagnosis is supplied.
    pub fn build(
        company_name: &str,
        as_of: NaiveDate,
        rows: &[AggregatedRow],
        ratios: Option<&RatioSet>,
        diagnosis: Option<&Diagnosis>,
    ) -> Result<Self> {
        for row in rows {
            if !row.value.is_finite() {
                return Err(BalanceReportError::Render(format!(
                    "row '{} / {}' has non-finite value {}",
                    row.category, row.kind, row.value
                )));
            }
        }

        let mut sheets = vec![ledger_sheet(company_name, as_of, rows, ratios, diagnosis)];
        if let Some(diagnosis) = diagnosis {
            sheets.push(diagnosis_sheet(diagnosis));
        }

        Ok(Self { sheets })
    }

    /// Render the document as plain text, sheets separated by a banner.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, sheet) in self.sheets.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("===== {} =====\n", sheet.name));
            for line in &sheet.lines {
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }
        out
    }

    /// Persist the document with a single write.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let text = self.to_text();
        fs::write(path, text)?;
        info!("Report written to {}", path.display());
        Ok(())
    }
}

fn ledger_sheet(
    company_name: &str,
    as_of: NaiveDate,
    rows: &[AggregatedRow],
    ratios: Option<&RatioSet>,
    diagnosis: Option<&Diagnosis>,
) -> Sheet {
    let mut lines = Vec::new();

    lines.push(center(&format!("Balance General - {}", company_name)));
    lines.push(center(&format!("Al {}", as_of.format("%Y-%m-%d"))));
    lines.push(String::new());

    lines.push(format!(
        "{:<cat$}{:<kind$}{:>val$}",
        "Categoría",
        "Tipo",
        "Valor",
        cat = CATEGORY_WIDTH,
        kind = KIND_WIDTH,
        val = VALUE_WIDTH
    ));
    lines.push("-".repeat(TABLE_WIDTH));

    let mut current_category = String::new();
    for row in rows {
        let category = title_case(&row.category);
        let kind = title_case(&row.kind);

        // Category is printed once per group and suppressed on the
        // group's remaining rows.
        if !category.is_empty() && category != current_category {
            lines.push(category.clone());
            current_category = category;
        }

        lines.push(format!(
            "{:<cat$}{:<kind$}{:>val$}",
            "",
            kind,
            format_amount(row.value),
            cat = CATEGORY_WIDTH,
            kind = KIND_WIDTH,
            val = VALUE_WIDTH
        ));
    }

    if let Some(ratios) = ratios {
        lines.push(String::new());
        lines.push("Ratios Financieros".to_string());
        let named = [
            ("Endeudamiento", ratios.endeudamiento),
            ("Liquidez", ratios.liquidez),
            ("Solvencia", ratios.solvencia),
        ];
        for (name, value) in named {
            lines.push(format!(
                "{:<label$}{:>val$}",
                name,
                format!("{:.2}", value.reported()),
                label = CATEGORY_WIDTH + KIND_WIDTH,
                val = VALUE_WIDTH
            ));
        }
    }

    if let Some(diagnosis) = diagnosis {
        lines.push(String::new());
        lines.push("Diagnóstico Financiero".to_string());
        for line in diagnosis.plain_lines() {
            lines.push(line.to_string());
        }
    }

    Sheet {
        name: LEDGER_SHEET.to_string(),
        lines,
    }
}

fn diagnosis_sheet(diagnosis: &Diagnosis) -> Sheet {
    let mut lines = Vec::new();
    lines.push("Análisis Financiero".to_string());
    lines.push(String::new());
    for line in diagnosis.plain_lines() {
        lines.push(line.to_string());
    }

    Sheet {
        name: DIAGNOSIS_SHEET.to_string(),
        lines,
    }
}

fn center(text: &str) -> String {
    format!("{:^width$}", text, width = TABLE_WIDTH)
}
