use crate::utils::table::format_float;
use serde::Deserialize;

/// Column names and cell text of a record, in output order.
pub trait Tabular {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarRecord {
    pub car_model: String,
    pub year_of_manufacture: i64,
    pub price: f64,
    pub fuel: String,
}

impl Tabular for CarRecord {
    const COLUMNS: &'static [&'static str] = &["car_model", "year_of_manufacture", "price", "fuel"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.car_model.clone(),
            self.year_of_manufacture.to_string(),
            format_float(self.price),
            self.fuel.clone(),
        ]
    }
}

/// A scraped row before any numeric conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGdpRecord {
    pub country: String,
    pub gdp_usd_millions: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GdpRecord {
    pub country: String,
    pub gdp_usd_billions: f64,
}

impl Tabular for GdpRecord {
    const COLUMNS: &'static [&'static str] = &["Country", "GDP_USD_billions"];

    fn cells(&self) -> Vec<String> {
        vec![self.country.clone(), format_float(self.gdp_usd_billions)]
    }
}

/// Outcome of the gdp load stage.
#[derive(Debug, Clone)]
pub struct GdpLoadReport {
    pub csv_path: String,
    pub db_path: String,
    pub rows_loaded: usize,
    pub query: String,
    pub query_rows: Vec<GdpRecord>,
}
