//! Pagination convention detection

use serde_json::{Map, Value};

use super::types::{OffsetMetaPaths, PageMetaPaths, Pagination};

/// Property names commonly used to hold pagination metadata
pub const CONTAINER_NAMES: &[&str] = &["pagination", "meta", "paging", "_meta", "page_info", "pageInfo"];

/// Keys naming the current page
pub const PAGE_KEYS: &[&str] = &["page", "current_page", "currentPage"];

/// Keys naming the page size
pub const PER_PAGE_KEYS: &[&str] = &["per_page", "page_size", "perPage", "pageSize"];

/// Keys naming the total record count
pub const TOTAL_KEYS: &[&str] = &["total", "total_count", "totalCount"];

const OFFSET_KEY: &str = "offset";
const LIMIT_KEY: &str = "limit";

/// Detect the pagination convention of a response.
///
/// Only wrapping objects are inspected; a top-level array never carries
/// pagination. Object-valued properties are tested in document order and the
/// first one with a page-based or offset-based signature wins. Signals from
/// different containers are never combined.
pub fn detect_pagination(data: &Value) -> Option<Pagination> {
    let root = data.as_object()?;

    for (key, value) in root {
        let Some(container) = value.as_object() else {
            continue;
        };
        if !is_candidate(key, container) {
            continue;
        }
        if let Some(pagination) = page_signature(key, container) {
            return Some(pagination);
        }
        if let Some(pagination) = offset_signature(key, container) {
            return Some(pagination);
        }
    }

    None
}

fn is_candidate(key: &str, container: &Map<String, Value>) -> bool {
    CONTAINER_NAMES.contains(&key)
        || container.keys().any(|k| {
            PAGE_KEYS.contains(&k.as_str())
                || PER_PAGE_KEYS.contains(&k.as_str())
                || TOTAL_KEYS.contains(&k.as_str())
                || k == OFFSET_KEY
                || k == LIMIT_KEY
        })
}

/// First key of `synonyms` present in the container, as a dotted path
fn find_key(prefix: &str, container: &Map<String, Value>, synonyms: &[&str]) -> Option<String> {
    synonyms
        .iter()
        .find(|k| container.contains_key(**k))
        .map(|k| format!("{}.{}", prefix, k))
}

fn page_signature(prefix: &str, container: &Map<String, Value>) -> Option<Pagination> {
    let current_page = find_key(prefix, container, PAGE_KEYS)?;
    let per_page = find_key(prefix, container, PER_PAGE_KEYS);
    let total = find_key(prefix, container, TOTAL_KEYS);

    if per_page.is_none() && total.is_none() {
        return None;
    }

    Some(Pagination::page(PageMetaPaths {
        current_page,
        per_page,
        total,
    }))
}

fn offset_signature(prefix: &str, container: &Map<String, Value>) -> Option<Pagination> {
    if !container.contains_key(OFFSET_KEY) || !container.contains_key(LIMIT_KEY) {
        return None;
    }

    Some(Pagination::offset(OffsetMetaPaths {
        offset: format!("{}.{}", prefix, OFFSET_KEY),
        limit: format!("{}.{}", prefix, LIMIT_KEY),
        total: find_key(prefix, container, TOTAL_KEYS),
    }))
}
