use crate::domain::model::{CarRecord, GdpRecord, RawGdpRecord};
use crate::utils::error::{EtlError, Result};

/// Rounds to `decimals` places by scaling, rounding half to even, and scaling back.
/// This is numpy's `around`, which the price and GDP figures were always rounded with.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

pub fn round_prices(records: &mut [CarRecord], decimals: u32) {
    for record in records.iter_mut() {
        record.price = round_to(record.price, decimals);
    }
}

/// Parses a GDP cell such as `"1,234,567"` (USD millions).
pub fn parse_millions(raw: &str) -> Result<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|e| EtlError::parse("GDP_USD_millions", format!("'{}': {}", raw, e)))
}

pub fn millions_to_billions(raw: &RawGdpRecord) -> Result<GdpRecord> {
    let millions = parse_millions(&raw.gdp_usd_millions)?;
    Ok(GdpRecord {
        country: raw.country.clone(),
        gdp_usd_billions: round_to(millions / 1000.0, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(12345.6789, 2), 12345.68);
        assert_eq!(round_to(5000.0, 2), 5000.0);
        assert_eq!(round_to(-1.005, 2), -1.0);
    }

    #[test]
    fn test_round_half_to_even_on_scaled_value() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.5, 0), 2.0);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let once = round_to(12345.6789, 2);
        assert_eq!(round_to(once, 2), once);
    }

    #[test]
    fn test_round_prices_in_place() {
        let mut cars = vec![CarRecord {
            car_model: "ritz".to_string(),
            year_of_manufacture: 2014,
            price: 5000.0000000001,
            fuel: "Petrol".to_string(),
        }];
        round_prices(&mut cars, 2);
        assert_eq!(cars[0].price, 5000.0);
    }

    #[test]
    fn test_millions_to_billions() {
        let raw = RawGdpRecord {
            country: "Testland".to_string(),
            gdp_usd_millions: "1,234,567".to_string(),
        };
        let record = millions_to_billions(&raw).unwrap();
        assert_eq!(record.country, "Testland");
        assert_eq!(record.gdp_usd_billions, 1234.57);
    }

    #[test]
    fn test_parse_millions_tolerates_surrounding_whitespace() {
        assert_eq!(parse_millions("26,854,599\n").unwrap(), 26854599.0);
    }

    #[test]
    fn test_parse_millions_rejects_text() {
        assert!(matches!(
            parse_millions("n/a"),
            Err(EtlError::ParseError { .. })
        ));
    }
}
