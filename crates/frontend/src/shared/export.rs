//! Выгрузка отображаемых строк таблицы в .xlsx и скачивание через браузер
use contracts::shared::export::{build_workbook, XLSX_MIME};
use contracts::shared::table::{Row, TableError, TableSchema};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Строит книгу по схеме экрана и инициирует скачивание
pub fn export_rows(schema: &TableSchema, rows: &[&Row]) -> Result<(), TableError> {
    let target = schema.export.ok_or_else(|| {
        TableError::Export(format!("{} has no export target", schema.title))
    })?;
    if rows.is_empty() {
        return Err(TableError::Validation("There is no data to export".to_string()));
    }

    let bytes = build_workbook(schema, target.sheet_name, rows)?;
    let blob = create_blob(&bytes, XLSX_MIME).map_err(TableError::Export)?;
    download_blob(&blob, target.file_name).map_err(TableError::Export)?;
    log::info!("{}: exported {} rows to {}", schema.entity, rows.len(), target.file_name);
    Ok(())
}

/// Создает Blob из бинарных данных
fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Временная ссылка для скачивания
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
