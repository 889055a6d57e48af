use crate::schema::{Diagnosis, RatioSet, RatioValue, Severity, Statement, Totals};
use crate::utils::format_money;

/// Map ratios (and optionally the reconciled totals) into an ordered,
/// severity-tagged diagnosis. Pure and deterministic; the statement text
/// is plain (icons included), the severity tag is what presentation
/// layers color on.
pub fn narrate(ratios: &RatioSet, totals: Option<&Totals>) -> Diagnosis {
    let mut statements = Vec::new();

    if let Some(totals) = totals {
        // The preamble reports the reconciled equity (assets - liabilities),
        // not the raw patrimonio sum shown in the ledger table.
        let preamble = [
            ("Total Activos", totals.assets),
            ("Total Pasivos", totals.liabilities),
            ("Total Patrimonio", totals.reconciled_equity()),
            ("Total Pasivos + Patrimonio", totals.liabilities_plus_equity()),
        ];
        for (label, value) in preamble {
            statements.push(Statement::new(
                format!("📊 {}: {}", label, format_money(value)),
                Severity::Neutral,
            ));
        }
        statements.push(Statement::new("", Severity::Neutral));
    }

    statements.push(debt_statement(ratios.endeudamiento));
    statements.push(liquidity_statement(ratios.liquidez));
    statements.push(solvency_statement(ratios.solvencia));

    Diagnosis { statements }
}

fn debt_statement(ratio: RatioValue) -> Statement {
    match ratio {
        RatioValue::NotComputable => Statement::new(
            "⚠️ Endeudamiento no calculable (falta de datos).",
            Severity::Neutral,
        ),
        RatioValue::Computed(v) if v < 0.5 => Statement::new(
            "✅ Bajo endeudamiento (solidez financiera).",
            Severity::Positive,
        ),
        RatioValue::Computed(_) => Statement::new(
            "⚠️ Endeudamiento alto (riesgo financiero).",
            Severity::Warning,
        ),
    }
}

fn liquidity_statement(ratio: RatioValue) -> Statement {
    match ratio {
        RatioValue::Computed(v) if v > 1.0 => Statement::new(
            format!("✅ Liquidez adecuada ({:.2}).", v),
            Severity::Positive,
        ),
        RatioValue::Computed(v) if v == 0.0 => Statement::new(
            "⚠️ Liquidez no calculable (falta de datos).",
            Severity::Neutral,
        ),
        RatioValue::NotComputable => Statement::new(
            "⚠️ Liquidez no calculable (falta de datos).",
            Severity::Neutral,
        ),
        RatioValue::Computed(v) => Statement::new(
            format!("⚠️ Liquidez baja ({:.2}).", v),
            Severity::Warning,
        ),
    }
}

fn solvency_statement(ratio: RatioValue) -> Statement {
    match ratio {
        RatioValue::Computed(v) if v > 0.0 => Statement::new(
            format!("✅ Solvencia positiva ({:.2}).", v),
            Severity::Positive,
        ),
        RatioValue::Computed(v) if v == 0.0 => Statement::new(
            "⚠️ Solvencia no calculable (falta de datos).",
            Severity::Neutral,
        ),
        RatioValue::NotComputable => Statement::new(
            "⚠️ Solvencia no calculable (falta de datos).",
            Severity::Neutral,
        ),
        RatioValue::Computed(v) => Statement::new(
            format!("⚠️ Solvencia negativa ({:.2}).", v),
            Severity::Warning,
        ),
    }
}
