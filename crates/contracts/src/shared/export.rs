//! .xlsx generation for the displayed rows of a table

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};

use crate::shared::table::{CellValue, Row, TableError, TableSchema};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;charset=UTF-8";

fn xlsx_error(e: rust_xlsxwriter::XlsxError) -> TableError {
    TableError::Export(e.to_string())
}

/// Builds a workbook with one sheet: a header row of field names followed by
/// one line per row, in the order given.
pub fn build_workbook(
    schema: &TableSchema,
    sheet_name: &str,
    rows: &[&Row],
) -> Result<Vec<u8>, TableError> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xECECEC))
        .set_border(FormatBorder::Thin);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(xlsx_error)?;

    for (col, column) in schema.columns.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, column.field, &header_format)
            .map_err(xlsx_error)?;
        if let Some(px) = column.width {
            worksheet
                .set_column_width(col, f64::from(px) / 7.0)
                .map_err(xlsx_error)?;
        }
    }

    for (index, row) in rows.iter().enumerate() {
        let line = (index + 1) as u32;
        for (col, column) in schema.columns.iter().enumerate() {
            let col = col as u16;
            match row.get(column.field) {
                Some(CellValue::Number(n)) => {
                    worksheet.write_number(line, col, *n).map_err(xlsx_error)?;
                }
                Some(CellValue::Bool(b)) => {
                    worksheet.write_boolean(line, col, *b).map_err(xlsx_error)?;
                }
                Some(CellValue::Text(s)) if !s.is_empty() => {
                    worksheet.write_string(line, col, s).map_err(xlsx_error)?;
                }
                _ => {}
            }
        }
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_stock_balance::STOCK_BALANCE_SCHEMA;
    use crate::shared::table::projection::project_records;
    use serde_json::json;

    #[test]
    fn test_workbook_is_a_zip_container() {
        let rows = project_records(
            &STOCK_BALANCE_SCHEMA,
            &[
                json!({ "Warehouse": "STM", "LocCode": "STM", "MatCode": "M001", "BalQty": 12, "AvgPrice": 150.5 }),
                json!({ "Warehouse": "STM", "LocCode": "STM", "MatCode": "M002", "BalQty": 0 }),
            ],
        );
        let refs: Vec<&Row> = rows.iter().collect();
        let bytes = build_workbook(&STOCK_BALANCE_SCHEMA, "StockBalance", &refs).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_invalid_sheet_name_is_export_error() {
        let err = build_workbook(&STOCK_BALANCE_SCHEMA, "bad/name", &[]).unwrap_err();
        assert!(matches!(err, TableError::Export(_)));
    }
}
