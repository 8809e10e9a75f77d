//! Lenient `?page=&limit=` extractor.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::types::PageQuery;

/// Paging query that never rejects.
///
/// Repeated keys keep their first value; an undecodable query string
/// yields no values, so the controller falls back to its defaults.
pub struct PageParams(pub PageQuery);

#[async_trait]
impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(e) => {
                tracing::debug!("Ignoring undecodable query string: {}", e.body_text());
                Vec::new()
            }
        };

        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        Ok(PageParams(PageQuery {
            page: first("page"),
            limit: first("limit"),
        }))
    }
}
