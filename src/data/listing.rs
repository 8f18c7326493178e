use super::filter::RowView;
use super::model::{Phone, columns};
use crate::error::{DashboardError, Result};

/// Columns of the results table, in display order.
pub const LISTING_COLUMNS: [&str; 7] = [
    columns::BRAND,
    columns::NAME,
    columns::PRICE,
    columns::RATING,
    columns::RAM,
    columns::CHIPSET,
    columns::DISPLAY_TYPE,
];

/// Display-ready rows of the filtered table.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub headers: [&'static str; 7],
    pub rows: Vec<[String; 7]>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the listing. `RAM` shows the normalized memory.
pub fn listing(view: &RowView<'_>) -> Result<Listing> {
    if let Some(missing) = LISTING_COLUMNS.iter().find(|c| !view.table.has_column(c)) {
        return Err(DashboardError::missing_column(missing));
    }

    let rows = view
        .phones()
        .map(|phone| LISTING_COLUMNS.map(|col| render_cell(phone, col)))
        .collect();

    Ok(Listing {
        headers: LISTING_COLUMNS,
        rows,
    })
}

fn render_cell(phone: &Phone, column: &str) -> String {
    if column == columns::RAM {
        return phone.memory_gb.map(|gb| gb.to_string()).unwrap_or_default();
    }
    phone
        .cell(column)
        .map(|v| v.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::{CellValue, RawTable};
    use crate::data::transform::transform;

    fn raw_row(rating: CellValue) -> BTreeMap<String, CellValue> {
        BTreeMap::from([
            ("brand".to_string(), CellValue::String("Nothing".into())),
            ("Name".to_string(), CellValue::String("Phone (2)".into())),
            ("Price".to_string(), CellValue::Integer(44_999)),
            ("Rating".to_string(), rating),
            ("RAM".to_string(), CellValue::Integer(12_288)),
            ("Chipset".to_string(), CellValue::String("Snapdragon 8+ Gen 1".into())),
            ("Display Type".to_string(), CellValue::String("OLED".into())),
        ])
    }

    #[test]
    fn renders_fixed_columns_with_normalized_ram() {
        let raw = RawTable {
            columns: LISTING_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: vec![raw_row(CellValue::Float(4.5)), raw_row(CellValue::Null)],
        };
        let table = transform(&raw).unwrap();
        let list = listing(&RowView::all(&table)).unwrap();

        assert_eq!(list.headers[4], "RAM");
        assert_eq!(
            list.rows[0],
            [
                "Nothing".to_string(),
                "Phone (2)".to_string(),
                "44999".to_string(),
                "4.5".to_string(),
                "12.29".to_string(),
                "Snapdragon 8+ Gen 1".to_string(),
                "OLED".to_string(),
            ]
        );
        assert_eq!(list.rows[1][3], "");
    }

    #[test]
    fn missing_column_is_schema_mismatch() {
        let mut raw = RawTable {
            columns: LISTING_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: vec![raw_row(CellValue::Float(4.5))],
        };
        raw.columns.retain(|c| c != "Display Type");
        let table = transform(&raw).unwrap();
        assert_eq!(
            listing(&RowView::all(&table)).unwrap_err(),
            DashboardError::missing_column("Display Type")
        );
    }
}
