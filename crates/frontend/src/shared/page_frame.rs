//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! The root element carries `id = "{entity}--{category}"` and
//! `data-page-category`, so a page found in the DOM inspector leads straight
//! to its `domain/aNNN_*` module.

use leptos::prelude::*;

/// Record list with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Document form (header plus lines).
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_employee--list"`.
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_employee--list"));
        assert!(!is_valid_page_id("a001_employee"));
        assert!(!is_valid_page_id("--list"));
    }
}
