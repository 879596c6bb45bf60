use crate::config::TableLocator;
use crate::domain::model::RawGdpRecord;
use crate::utils::error::{EtlError, Result};
use scraper::{ElementRef, Html, Selector};

/// Cell text the source page uses when a GDP figure is unavailable.
pub const GDP_PLACEHOLDER: &str = "—";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| EtlError::scrape(format!("invalid selector '{}': {:?}", css, e)))
}

/// Tables are counted after HTML5 tree construction, so a table written without
/// `<tbody>` still gets one and takes a position.
fn locate_table<'a>(document: &'a Html, locator: &TableLocator) -> Result<ElementRef<'a>> {
    match locator {
        TableLocator::Position { index } => {
            let tbody_sel = selector("tbody")?;
            document.select(&tbody_sel).nth(*index).ok_or_else(|| {
                EtlError::scrape(format!(
                    "expected at least {} tbody elements, found {}",
                    index + 1,
                    document.select(&tbody_sel).count()
                ))
            })
        }
        TableLocator::AfterHeading { text } => {
            let sel = selector("h1, h2, h3, h4, h5, h6, tbody")?;
            document
                .select(&sel)
                .skip_while(|el| {
                    el.value().name() == "tbody" || !el.text().collect::<String>().contains(text.as_str())
                })
                .find(|el| el.value().name() == "tbody")
                .ok_or_else(|| EtlError::scrape(format!("no table found after heading '{}'", text)))
        }
    }
}

fn is_placeholder(cell: &ElementRef) -> bool {
    cell.children()
        .filter_map(|node| node.value().as_text())
        .any(|text| text.trim() == GDP_PLACEHOLDER)
}

/// Pulls `(country, GDP in USD millions)` rows out of the located table.
/// Rows without a country link or with the placeholder GDP cell are skipped.
pub fn extract_gdp_rows(html: &str, locator: &TableLocator) -> Result<Vec<RawGdpRecord>> {
    let document = Html::parse_document(html);
    let table = locate_table(&document, locator)?;

    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;
    let link_sel = selector("a")?;

    let mut records = Vec::new();
    for (row_idx, row) in table.select(&row_sel).enumerate() {
        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        if cells.is_empty() {
            continue;
        }

        let Some(link) = cells[0].select(&link_sel).next() else {
            continue;
        };
        let gdp_cell = cells.get(2).ok_or_else(|| {
            EtlError::scrape(format!(
                "row {} has {} cells, expected at least 3",
                row_idx,
                cells.len()
            ))
        })?;
        if is_placeholder(gdp_cell) {
            tracing::debug!("Skipping row {}: GDP unavailable", row_idx);
            continue;
        }

        records.push(RawGdpRecord {
            country: link.text().next().unwrap_or_default().to_string(),
            gdp_usd_millions: gdp_cell.text().next().unwrap_or_default().to_string(),
        });
    }

    Ok(records)
}
