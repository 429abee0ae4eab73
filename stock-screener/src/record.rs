use serde::{Deserialize, Serialize};
use stock_query::FieldKey;

/// One security's canonical numeric attribute set. The ticker identifies the
/// record and is never filtered on; every metric is optional because source
/// data may lack a value for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub ticker: String,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub roe: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub eps_growth: Option<f64>,
    pub current_ratio: Option<f64>,
    pub gross_margin: Option<f64>,
}

impl StockRecord {
    /// Look up a metric by canonical field key.
    pub fn get(&self, field: FieldKey) -> Option<f64> {
        match field {
            FieldKey::MarketCap => self.market_cap,
            FieldKey::PeRatio => self.pe_ratio,
            FieldKey::Roe => self.roe,
            FieldKey::DebtToEquity => self.debt_to_equity,
            FieldKey::DividendYield => self.dividend_yield,
            FieldKey::RevenueGrowth => self.revenue_growth,
            FieldKey::EpsGrowth => self.eps_growth,
            FieldKey::CurrentRatio => self.current_ratio,
            FieldKey::GrossMargin => self.gross_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_covers_every_field() {
        let record = StockRecord {
            id: 1,
            ticker: "ACME".to_string(),
            market_cap: Some(120.5),
            pe_ratio: Some(18.2),
            roe: Some(14.0),
            debt_to_equity: Some(0.6),
            dividend_yield: Some(2.1),
            revenue_growth: Some(7.3),
            eps_growth: Some(5.9),
            current_ratio: Some(1.8),
            gross_margin: Some(42.0),
        };
        assert_eq!(record.get(FieldKey::MarketCap), Some(120.5));
        assert_eq!(record.get(FieldKey::PeRatio), Some(18.2));
        assert_eq!(record.get(FieldKey::Roe), Some(14.0));
        assert_eq!(record.get(FieldKey::DebtToEquity), Some(0.6));
        assert_eq!(record.get(FieldKey::DividendYield), Some(2.1));
        assert_eq!(record.get(FieldKey::RevenueGrowth), Some(7.3));
        assert_eq!(record.get(FieldKey::EpsGrowth), Some(5.9));
        assert_eq!(record.get(FieldKey::CurrentRatio), Some(1.8));
        assert_eq!(record.get(FieldKey::GrossMargin), Some(42.0));
    }

    #[test]
    fn test_missing_metrics_default_to_none() {
        let record = StockRecord {
            ticker: "EMPTY".to_string(),
            ..Default::default()
        };
        for field in FieldKey::ALL {
            assert_eq!(record.get(field), None);
        }
    }
}
