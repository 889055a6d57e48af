use serde::{Deserialize, Serialize};

/// Reserved category for the four synthetic summary rows.
pub const TOTALS_CATEGORY: &str = "TOTALES";

pub const TOTAL_ASSETS_LABEL: &str = "Total Activos";
pub const TOTAL_LIABILITIES_LABEL: &str = "Total Pasivos";
pub const TOTAL_EQUITY_LABEL: &str = "Total Patrimonio";
pub const TOTAL_LIABILITIES_EQUITY_LABEL: &str = "Total Pasivos + Patrimonio";

/// One labeled financial line item, supplied fresh per computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "valor")]
    pub value: f64,
}

impl Entry {
    pub fn new(category: impl Into<String>, kind: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            kind: kind.into(),
            value,
        }
    }
}

/// Closed classification of an entry's category label.
///
/// Labels are matched case-insensitively against the localized substrings
/// "activos", "pasivos" and "patrimonio". Anything else (including the
/// reserved "TOTALES" category) is `Unclassified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryTag {
    Asset,
    Liability,
    Equity,
    Unclassified,
}

impl CategoryTag {
    pub fn classify(category: &str) -> Self {
        let lower = category.to_lowercase();
        if lower.contains("activos") {
            Self::Asset
        } else if lower.contains("pasivos") {
            Self::Liability
        } else if lower.contains("patrimonio") {
            Self::Equity
        } else {
            Self::Unclassified
        }
    }
}

/// Whether a category label denotes a current (short-term) position.
pub fn is_current(category: &str) -> bool {
    category.to_lowercase().contains("corrientes")
}

/// One row of the aggregated ledger: the summed value of all entries
/// sharing a (category, kind) pair, or one of the synthetic totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "valor")]
    pub value: f64,
}

/// Top-level totals over a set of entries.
///
/// `equity_raw` is the sum of entries classified as Equity. The reconciled
/// equity used for the accounting identity is a different quantity,
/// `reconciled_equity()` = assets - liabilities; both are kept because the
/// ledger table reports the raw sum while the diagnosis preamble reports
/// the reconciled one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub assets: f64,
    pub liabilities: f64,
    pub equity_raw: f64,
}

impl Totals {
    pub fn reconciled_equity(&self) -> f64 {
        self.assets - self.liabilities
    }

    /// Always equals `assets` by construction.
    pub fn liabilities_plus_equity(&self) -> f64 {
        self.liabilities + self.reconciled_equity()
    }

    pub fn liabilities_plus_equity_raw(&self) -> f64 {
        self.liabilities + self.equity_raw
    }
}

/// A ratio is either a computed value (rounded to 2 decimals) or the
/// "not computable" sentinel used when the denominator is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RatioValue {
    Computed(f64),
    NotComputable,
}

impl RatioValue {
    /// The numeric value reported downstream; the sentinel reports 0.0.
    pub fn reported(&self) -> f64 {
        match self {
            Self::Computed(v) => *v,
            Self::NotComputable => 0.0,
        }
    }

    pub fn is_computable(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    pub endeudamiento: RatioValue,
    pub liquidez: RatioValue,
    pub solvencia: RatioValue,
}

/// Severity tag carried by each diagnostic statement so presentation
/// layers can pick colors/icons without re-deriving verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Positive,
    Warning,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    pub severity: Severity,
}

impl Statement {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// Ordered sequence of annotated diagnostic statements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnosis {
    pub statements: Vec<Statement>,
}

impl Diagnosis {
    /// The statement texts stripped of severity, in order.
    pub fn plain_lines(&self) -> Vec<&str> {
        self.statements.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_localized_labels() {
        assert_eq!(CategoryTag::classify("Activos Corrientes"), CategoryTag::Asset);
        assert_eq!(CategoryTag::classify("PASIVOS NO CORRIENTES"), CategoryTag::Liability);
        assert_eq!(CategoryTag::classify("patrimonio neto"), CategoryTag::Equity);
        assert_eq!(CategoryTag::classify("TOTALES"), CategoryTag::Unclassified);
        assert_eq!(CategoryTag::classify(""), CategoryTag::Unclassified);
    }

    #[test]
    fn test_is_current() {
        assert!(is_current("Activos Corrientes"));
        assert!(is_current("pasivos corrientes"));
        assert!(!is_current("Activos Fijos"));
    }

    #[test]
    fn test_totals_identity() {
        let totals = Totals {
            assets: 150.0,
            liabilities: 60.0,
            equity_raw: 42.0,
        };
        assert_eq!(totals.reconciled_equity(), 90.0);
        assert_eq!(totals.liabilities_plus_equity(), totals.assets);
        assert_eq!(totals.liabilities_plus_equity_raw(), 102.0);
    }

    #[test]
    fn test_ratio_sentinel_reports_zero() {
        assert_eq!(RatioValue::NotComputable.reported(), 0.0);
        assert!(!RatioValue::NotComputable.is_computable());
        assert_eq!(RatioValue::Computed(2.5).reported(), 2.5);
    }

    #[test]
    fn test_entry_serde_uses_localized_column_names() {
        let entry = Entry::new("Activos Corrientes", "Caja", 100.0);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("categoria"));
        assert!(json.contains("tipo"));
        assert!(json.contains("valor"));

        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
