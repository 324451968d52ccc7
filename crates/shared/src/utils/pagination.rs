use crate::domain::requests::Pageable;
use axum::http::{HeaderMap, HeaderValue};
use tracing::warn;

pub const HEADER_X_TOTAL_COUNT: &str = "x-total-count";

/// `X-Total-Count` plus an RFC 5988 `Link` header with next/prev/last/first relations.
pub fn generate_pagination_http_headers(
    base_path: &str,
    pageable: &Pageable,
    total: i64,
) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(HEADER_X_TOTAL_COUNT, HeaderValue::from(total.max(0)));

    let size = pageable.size.max(1) as i64;
    let page = pageable.page as i64;
    let total_pages = (total.max(0) + size - 1) / size;

    let mut links = Vec::with_capacity(4);
    if page < total_pages - 1 {
        links.push(prepare_link(base_path, pageable, page + 1, "next"));
    }
    if page > 0 {
        links.push(prepare_link(base_path, pageable, page - 1, "prev"));
    }
    let last_page = if total_pages > 0 { total_pages - 1 } else { 0 };
    links.push(prepare_link(base_path, pageable, last_page, "last"));
    links.push(prepare_link(base_path, pageable, 0, "first"));

    match HeaderValue::from_str(&links.join(",")) {
        Ok(value) => {
            headers.insert(axum::http::header::LINK, value);
        }
        Err(e) => warn!("Could not build Link header: {e}"),
    }

    headers
}

fn prepare_link(base_path: &str, pageable: &Pageable, page: i64, rel: &str) -> String {
    let mut url = format!("{base_path}?page={page}&size={}", pageable.size);
    if let Some(sort) = pageable.sort.as_deref().filter(|s| !s.trim().is_empty()) {
        url.push_str("&sort=");
        url.push_str(sort);
    }
    format!("<{url}>; rel=\"{rel}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_links_next_last_first() {
        let headers = generate_pagination_http_headers("/api/produits", &Pageable::new(0, 10), 25);

        assert_eq!(headers.get(HEADER_X_TOTAL_COUNT).unwrap(), "25");
        assert_eq!(
            headers.get("link").unwrap(),
            "</api/produits?page=1&size=10>; rel=\"next\",\
             </api/produits?page=2&size=10>; rel=\"last\",\
             </api/produits?page=0&size=10>; rel=\"first\""
        );
    }

    #[test]
    fn middle_page_links_both_directions_and_keeps_sort() {
        let pageable = Pageable::new(1, 10).with_sort("id,desc");
        let link = generate_pagination_http_headers("/api/produits", &pageable, 30)
            .get("link")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        assert!(link.contains("</api/produits?page=2&size=10&sort=id,desc>; rel=\"next\""));
        assert!(link.contains("</api/produits?page=0&size=10&sort=id,desc>; rel=\"prev\""));
    }

    #[test]
    fn empty_result_points_last_at_page_zero() {
        let headers = generate_pagination_http_headers("/api/produits", &Pageable::new(0, 20), 0);

        assert_eq!(headers.get(HEADER_X_TOTAL_COUNT).unwrap(), "0");
        assert_eq!(
            headers.get("link").unwrap(),
            "</api/produits?page=0&size=20>; rel=\"last\",</api/produits?page=0&size=20>; rel=\"first\""
        );
    }
}
