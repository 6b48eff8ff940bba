//! Page-based pagination and sorting vocabulary.
//!
//! A [`PageRequest`] is a zero-based page index, a page size, and an ordered
//! list of sort fields. Sort fields arrive as wire-level names and are mapped
//! to SQL columns through a per-entity whitelist, so request input never
//! reaches an ORDER BY clause verbatim. A [`Page`] is one slice of a
//! collection query plus the totals a client needs to render a pager.

use serde::Serialize;

use crate::error::CoreError;

/// Default page size when a listing request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Hard ceiling on the page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(CoreError::Validation(format!(
                "Unknown sort direction '{other}'"
            ))),
        }
    }
}

/// One `field,direction` entry of a sort specification.
#[derive(Debug, Clone)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Parse a `field` or `field,asc|desc` token. A bare field sorts ascending.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let mut parts = raw.splitn(2, ',');
        let field = parts.next().unwrap_or("").trim();
        if field.is_empty() {
            return Err(CoreError::Validation("Empty sort field".into()));
        }
        let direction = match parts.next() {
            Some(dir) => SortDirection::parse(dir)?,
            None => SortDirection::Asc,
        };
        Ok(SortOrder {
            field: field.to_string(),
            direction,
        })
    }
}

/// One page of a collection query: zero-based page index, page size, and
/// the requested ordering.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    /// Build a request, clamping the page index to >= 0 and the size to
    /// `1..=MAX_PAGE_SIZE`.
    pub fn new(page: i64, size: i64, sort: Vec<SortOrder>) -> Self {
        Self {
            page: page.max(0),
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    pub fn offset(&self) -> i64 {
        self.page * self.size
    }

    /// Render the ORDER BY clause for this request.
    ///
    /// `columns` maps wire-level sort fields to SQL column names; a sort field
    /// outside the whitelist is a validation error, not a server error. An
    /// empty sort falls back to `id ASC` so pages stay stable across requests.
    pub fn order_by(&self, columns: &[(&str, &str)]) -> Result<String, CoreError> {
        if self.sort.is_empty() {
            return Ok("ORDER BY id ASC".to_string());
        }

        let mut terms = Vec::with_capacity(self.sort.len());
        for order in &self.sort {
            let column = columns
                .iter()
                .find(|(field, _)| *field == order.field)
                .map(|(_, column)| *column)
                .ok_or_else(|| {
                    CoreError::Validation(format!("Unknown sort field '{}'", order.field))
                })?;
            terms.push(format!("{column} {}", order.direction.as_sql()));
        }
        Ok(format!("ORDER BY {}", terms.join(", ")))
    }
}

/// One slice of a collection plus pager totals. Serialized camelCase to match
/// the wire format of the paginated endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Assemble a page from its content and the matching total row count.
    /// A page index past the end simply carries empty content.
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + request.size - 1) / request.size
        };
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }

    /// Convert the content element type, keeping the pager totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    const COLUMNS: &[(&str, &str)] = &[("id", "id"), ("publishedAt", "published_at")];

    #[test]
    fn parse_bare_field_sorts_ascending() {
        let order = SortOrder::parse("title").unwrap();
        assert_eq!(order.field, "title");
        assert_eq!(order.direction, SortDirection::Asc);
    }

    #[test]
    fn parse_field_with_direction() {
        let order = SortOrder::parse("publishedAt,desc").unwrap();
        assert_eq!(order.field, "publishedAt");
        assert_eq!(order.direction, SortDirection::Desc);
    }

    #[test]
    fn parse_rejects_unknown_direction() {
        let err = SortOrder::parse("title,sideways").unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn parse_rejects_empty_field() {
        let err = SortOrder::parse(",desc").unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn order_by_maps_wire_fields_to_columns() {
        let request = PageRequest::new(
            0,
            10,
            vec![
                SortOrder::parse("publishedAt,desc").unwrap(),
                SortOrder::parse("id").unwrap(),
            ],
        );
        let clause = request.order_by(COLUMNS).unwrap();
        assert_eq!(clause, "ORDER BY published_at DESC, id ASC");
    }

    #[test]
    fn order_by_rejects_field_outside_whitelist() {
        let request = PageRequest::new(0, 10, vec![SortOrder::parse("password_hash").unwrap()]);
        let err = request.order_by(COLUMNS).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn order_by_defaults_to_stable_id_ordering() {
        let request = PageRequest::new(0, 10, Vec::new());
        assert_eq!(request.order_by(COLUMNS).unwrap(), "ORDER BY id ASC");
    }

    #[test]
    fn request_clamps_page_and_size() {
        let request = PageRequest::new(-3, 0, Vec::new());
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 1);

        let request = PageRequest::new(0, MAX_PAGE_SIZE + 50, Vec::new());
        assert_eq!(request.size, MAX_PAGE_SIZE);
    }

    #[test]
    fn page_totals_round_up() {
        let request = PageRequest::new(1, 10, Vec::new());
        let page = Page::new(vec![1, 2, 3], &request, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 23);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let request = PageRequest::new(5, 10, Vec::new());
        let page: Page<i32> = Page::new(Vec::new(), &request, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.content.is_empty());
    }

    #[test]
    fn page_serializes_camel_case() {
        let request = PageRequest::new(0, 2, Vec::new());
        let page = Page::new(vec!["a"], &request, 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["content"][0], "a");
    }
}
