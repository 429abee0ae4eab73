use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical key for one of the nine screenable metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    MarketCap,
    PeRatio,
    Roe,
    DebtToEquity,
    DividendYield,
    RevenueGrowth,
    EpsGrowth,
    CurrentRatio,
    GrossMargin,
}

/// Alias table for fuzzy field resolution, probed front to back against the
/// normalized user label. Ordered by descending alias length so that a more
/// specific alias always wins over a shorter one contained in it (e.g.
/// "grossmargin" before "margin", "dividend" before "de").
const FIELD_ALIASES: &[(&str, FieldKey)] = &[
    ("marketcapitalization", FieldKey::MarketCap),
    ("pricetoearnings", FieldKey::PeRatio),
    ("returnonequity", FieldKey::Roe),
    ("revenuegrowth", FieldKey::RevenueGrowth),
    ("dividendyield", FieldKey::DividendYield),
    ("debttoequity", FieldKey::DebtToEquity),
    ("currentratio", FieldKey::CurrentRatio),
    ("grossmargin", FieldKey::GrossMargin),
    ("marketcap", FieldKey::MarketCap),
    ("epsgrowth", FieldKey::EpsGrowth),
    ("dividend", FieldKey::DividendYield),
    ("peratio", FieldKey::PeRatio),
    ("current", FieldKey::CurrentRatio),
    ("revenue", FieldKey::RevenueGrowth),
    ("market", FieldKey::MarketCap),
    ("margin", FieldKey::GrossMargin),
    ("yield", FieldKey::DividendYield),
    ("gross", FieldKey::GrossMargin),
    ("mcap", FieldKey::MarketCap),
    ("debt", FieldKey::DebtToEquity),
    ("roe", FieldKey::Roe),
    ("eps", FieldKey::EpsGrowth),
    ("pe", FieldKey::PeRatio),
    ("de", FieldKey::DebtToEquity),
];

impl FieldKey {
    /// All nine canonical fields, in schema order.
    pub const ALL: [FieldKey; 9] = [
        FieldKey::MarketCap,
        FieldKey::PeRatio,
        FieldKey::Roe,
        FieldKey::DebtToEquity,
        FieldKey::DividendYield,
        FieldKey::RevenueGrowth,
        FieldKey::EpsGrowth,
        FieldKey::CurrentRatio,
        FieldKey::GrossMargin,
    ];

    /// Human-readable display label, as shown in query error messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::MarketCap => "Market Cap",
            FieldKey::PeRatio => "P/E Ratio",
            FieldKey::Roe => "ROE",
            FieldKey::DebtToEquity => "Debt to Equity",
            FieldKey::DividendYield => "Dividend Yield",
            FieldKey::RevenueGrowth => "Revenue Growth",
            FieldKey::EpsGrowth => "EPS Growth",
            FieldKey::CurrentRatio => "Current Ratio",
            FieldKey::GrossMargin => "Gross Margin",
        }
    }

    /// Comma-separated list of all display labels, for error messages.
    pub fn labels_joined() -> String {
        Self::ALL
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve a loosely-written field label ("P/E", "mcap", "Gross Margin")
    /// to its canonical key. The label is lowercased and stripped of every
    /// non-alphanumeric character, then matched against the alias table by
    /// substring containment, longest alias first. On failure the normalized
    /// form is returned for use in error messages.
    pub fn resolve(raw: &str) -> Result<FieldKey, String> {
        let normalized: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        for (alias, field) in FIELD_ALIASES {
            if normalized.contains(alias) {
                return Ok(*field);
            }
        }

        Err(normalized)
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FieldKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_resolves_to_its_field() {
        for (alias, field) in FIELD_ALIASES {
            assert_eq!(FieldKey::resolve(alias), Ok(*field), "alias {}", alias);
        }
    }

    #[test]
    fn test_resolve_loose_labels() {
        assert_eq!(FieldKey::resolve("Market Cap"), Ok(FieldKey::MarketCap));
        assert_eq!(FieldKey::resolve("mcap"), Ok(FieldKey::MarketCap));
        assert_eq!(FieldKey::resolve("P/E"), Ok(FieldKey::PeRatio));
        assert_eq!(FieldKey::resolve("p-e ratio"), Ok(FieldKey::PeRatio));
        assert_eq!(FieldKey::resolve("ROE"), Ok(FieldKey::Roe));
        assert_eq!(FieldKey::resolve("Return on Equity"), Ok(FieldKey::Roe));
        assert_eq!(FieldKey::resolve("DE"), Ok(FieldKey::DebtToEquity));
        assert_eq!(FieldKey::resolve("yield"), Ok(FieldKey::DividendYield));
    }

    #[test]
    fn test_overlapping_aliases_prefer_most_specific() {
        // "margin" alone is gross margin, and "gross margin" must not be
        // shadowed by the shorter alias.
        assert_eq!(FieldKey::resolve("margin"), Ok(FieldKey::GrossMargin));
        assert_eq!(FieldKey::resolve("Gross Margin"), Ok(FieldKey::GrossMargin));
        // "dividend" contains "de"; longest-first probing must pick the
        // dividend aliases, not debt-to-equity.
        assert_eq!(
            FieldKey::resolve("Dividend Yield"),
            Ok(FieldKey::DividendYield)
        );
        assert_eq!(FieldKey::resolve("dividend"), Ok(FieldKey::DividendYield));
    }

    #[test]
    fn test_resolve_failure_returns_normalized_form() {
        assert_eq!(FieldKey::resolve("Foo Bar!"), Err("foobar".to_string()));
        assert_eq!(FieldKey::resolve(""), Err(String::new()));
    }

    #[test]
    fn test_labels_joined_lists_all_nine() {
        let joined = FieldKey::labels_joined();
        for field in FieldKey::ALL {
            assert!(joined.contains(field.label()));
        }
    }
}
