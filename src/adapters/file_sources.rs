//! Readers for the car listing fragments: CSV, newline-delimited JSON and XML.

use crate::domain::model::CarRecord;
use crate::utils::error::{EtlError, Result};
use roxmltree::{Document, Node, ParsingOptions};

/// Input formats in the order their fragments are merged.
pub const CAR_SOURCE_EXTENSIONS: [&str; 3] = ["csv", "json", "xml"];

pub fn parse_fragment(extension: &str, source_name: &str, data: &[u8]) -> Result<Vec<CarRecord>> {
    match extension {
        "csv" => parse_csv(data),
        "json" => parse_json_lines(source_name, data),
        "xml" => parse_xml(source_name, data),
        other => Err(EtlError::parse(
            source_name,
            format!("unsupported file extension: {}", other),
        )),
    }
}

/// Columns are matched by header name; unknown columns are ignored.
pub fn parse_csv(data: &[u8]) -> Result<Vec<CarRecord>> {
    let mut reader = csv::Reader::from_reader(data);
    let mut records = Vec::new();
    for row in reader.deserialize::<CarRecord>() {
        records.push(row?);
    }
    Ok(records)
}

/// One JSON object per non-blank line.
pub fn parse_json_lines(source_name: &str, data: &[u8]) -> Result<Vec<CarRecord>> {
    let text = std::str::from_utf8(data).map_err(|e| EtlError::parse(source_name, e.to_string()))?;

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line)
                .map_err(|e| EtlError::parse(source_name, format!("line {}: {}", idx + 1, e)))
        })
        .collect()
}

pub fn parse_xml(source_name: &str, data: &[u8]) -> Result<Vec<CarRecord>> {
    let text = std::str::from_utf8(data).map_err(|e| EtlError::parse(source_name, e.to_string()))?;
    // Exported files may carry a DOCTYPE; external DTDs are never fetched.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(text, options)?;

    document
        .root_element()
        .children()
        .filter(Node::is_element)
        .map(|car| car_from_xml(source_name, car))
        .collect()
}

fn child_text<'a>(source_name: &str, car: Node<'a, '_>, name: &str) -> Result<&'a str> {
    car.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
        .map(|child| child.text().unwrap_or(""))
        .ok_or_else(|| {
            EtlError::parse(
                source_name,
                format!(
                    "<{}> element is missing required child <{}>",
                    car.tag_name().name(),
                    name
                ),
            )
        })
}

fn car_from_xml(source_name: &str, car: Node) -> Result<CarRecord> {
    let year = child_text(source_name, car, "year_of_manufacture")?;
    let price = child_text(source_name, car, "price")?;

    Ok(CarRecord {
        car_model: child_text(source_name, car, "car_model")?.to_string(),
        year_of_manufacture: year.trim().parse().map_err(|e| {
            EtlError::parse(source_name, format!("year_of_manufacture '{}': {}", year, e))
        })?,
        price: price
            .trim()
            .parse()
            .map_err(|e| EtlError::parse(source_name, format!("price '{}': {}", price, e)))?,
        fuel: child_text(source_name, car, "fuel")?.to_string(),
    })
}
