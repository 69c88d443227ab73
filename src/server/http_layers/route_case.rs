//! Case-insensitive matching of the fixed route segments

use axum::{
    body::Body,
    http::{uri::PathAndQuery, Request, Uri},
};

/// Literal segments of the routes. Only these are folded, ids keep their case.
const ROUTE_SEGMENTS: [&str; 4] = ["api", "projects", "health", "stats"];

/// Position of the last fixed segment in `/api/<resource>/{id}`.
const LAST_FIXED_SEGMENT: usize = 2;

fn fold_path(path: &str) -> String {
    path.split('/')
        .enumerate()
        .map(|(position, segment)| {
            let is_route_name = ROUTE_SEGMENTS
                .iter()
                .any(|name| name.eq_ignore_ascii_case(segment));
            if position <= LAST_FIXED_SEGMENT && is_route_name {
                segment.to_ascii_lowercase()
            } else {
                segment.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Lowercases the fixed segments of the request path before routing.
pub fn fold_route_case(mut request: Request<Body>) -> Request<Body> {
    let uri = request.uri().clone();
    let folded = fold_path(uri.path());
    if folded == uri.path() {
        return request;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", folded, query),
        None => folded,
    };
    let mut parts = uri.into_parts();
    parts.path_and_query = match PathAndQuery::try_from(path_and_query) {
        Ok(path_and_query) => Some(path_and_query),
        Err(_) => return request,
    };
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_only_fixed_segments() {
        assert_eq!(fold_path("/API/STATS"), "/api/stats");
        assert_eq!(fold_path("/Api/Projects/EAIB"), "/api/projects/EAIB");
        assert_eq!(fold_path("/api/projects/Stats"), "/api/projects/Stats");
        assert_eq!(fold_path("/"), "/");
        assert_eq!(fold_path("/Other"), "/Other");
    }

    #[test]
    fn keeps_the_query_string() {
        let request = Request::builder()
            .uri("/API/Health?verbose=1")
            .body(Body::empty())
            .unwrap();
        let request = fold_route_case(request);
        assert_eq!(request.uri().path(), "/api/health");
        assert_eq!(request.uri().query(), Some("verbose=1"));
    }
}
