//! API utilities for frontend-backend communication
//!
//! Resolves the backend base URL and wraps the two request shapes the
//! stores backend understands: a GET returning records and a POST carrying
//! a bulk save.

use contracts::shared::api::{extract_records, interpret_save_response};
use contracts::shared::table::{SavePlan, SaveReport, TableError, TableSchema};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde_json::Value;

/// localStorage key overriding the backend base URL at runtime.
pub const API_BASE_STORAGE_KEY: &str = "stores_api_base";

pub const DEFAULT_API_BASE: &str = "https://esystems.cdl.lk/backend-Test/DSMartWeb";

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `localStorage["stores_api_base"]`
/// 2. `STORES_API_BASE` at compile time
/// 3. [`DEFAULT_API_BASE`]
pub fn api_base() -> String {
    resolve_api_base(stored_api_base(), option_env!("STORES_API_BASE"))
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(API_BASE_STORAGE_KEY).ok()?
}

fn resolve_api_base(stored: Option<String>, compiled: Option<&str>) -> String {
    stored
        .as_deref()
        .map(normalize_base)
        .filter(|s| !s.is_empty())
        .or_else(|| compiled.map(normalize_base).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

fn normalize_base(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/Admin/Warehouse/GetWarehouseInfo");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends url-encoded query parameters to a URL.
pub fn with_query(url: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let params: Vec<String> = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, params.join("&"))
}

fn network_error(e: gloo_net::Error) -> TableError {
    TableError::Network(e.to_string())
}

/// Reads the body of a non-2xx response into a backend error.
async fn backend_error(response: Response) -> TableError {
    let status = response.status();
    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("Message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| {
                if text.trim().is_empty() {
                    response_status_text(status)
                } else {
                    text
                }
            }),
        Err(_) => response_status_text(status),
    };
    TableError::Backend { status, message }
}

fn response_status_text(status: u16) -> String {
    format!("HTTP {}", status)
}

async fn read_json(response: Response) -> Result<Value, TableError> {
    if !response.ok() {
        return Err(backend_error(response).await);
    }
    let text = response.text().await.map_err(network_error)?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| TableError::Decode(e.to_string()))
}

pub async fn get_json(path: &str, query: &[(&str, String)]) -> Result<Value, TableError> {
    let url = with_query(&api_url(path), query);
    log::debug!("GET {}", url);
    let response = Request::get(&url).send().await.map_err(network_error)?;
    read_json(response).await
}

pub async fn post_json<T: Serialize>(
    path: &str,
    query: &[(&str, String)],
    body: &T,
) -> Result<Value, TableError> {
    let url = with_query(&api_url(path), query);
    log::debug!("POST {}", url);
    let response = Request::post(&url)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

/// Fetches the records of a listing endpoint.
pub async fn fetch_records(
    schema: &TableSchema,
    query: &[(&str, String)],
) -> Result<Vec<Value>, TableError> {
    let body = get_json(schema.list_path, query).await?;
    let records = extract_records(body)?;
    log::info!("{}: fetched {} records", schema.entity, records.len());
    Ok(records)
}

/// Submits a bulk save and reduces the response to per-row acceptance.
pub async fn save_rows<T: Serialize>(
    schema: &TableSchema,
    plan: &SavePlan,
    query: &[(&str, String)],
    body: &T,
) -> Result<SaveReport, TableError> {
    let path = schema.save_path.ok_or_else(|| {
        TableError::Validation(format!("{} cannot be saved", schema.title))
    })?;
    let response = post_json(path, query, body).await?;
    let report = interpret_save_response(&plan.ids, &response);
    log::info!(
        "{}: saved {} rows, {} rejected",
        schema.entity,
        report.accepted.len(),
        report.rejected.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        assert_eq!(
            resolve_api_base(Some("http://local/api/".into()), Some("http://env")),
            "http://local/api"
        );
        assert_eq!(resolve_api_base(Some("  ".into()), Some("http://env/")), "http://env");
        assert_eq!(resolve_api_base(None, None), DEFAULT_API_BASE);
    }

    #[test]
    fn test_query_is_encoded() {
        let url = with_query(
            "http://h/Admin/Mrq/LoadMRQMaterialDetails",
            &[("whCode", "ST M&1".to_string())],
        );
        assert_eq!(url, "http://h/Admin/Mrq/LoadMRQMaterialDetails?whCode=ST%20M%261");
        assert_eq!(with_query("http://h/x?a=1", &[("b", "2".into())]), "http://h/x?a=1&b=2");
        assert_eq!(with_query("http://h/x", &[]), "http://h/x");
    }
}
