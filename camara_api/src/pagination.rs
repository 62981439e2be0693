//! Fetching one page and following `next` links until a listing is exhausted.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::NextLinks,
    transport::Transport,
    types::{Link, Page, Relation},
    Error,
};

/// Fetches and parses one page.
///
/// HTTP 400, 404 and 500 map to [`Error::BadRequest`], [`Error::NotFound`]
/// and [`Error::UpstreamServer`]; other non-2xx statuses to
/// [`Error::HttpStatus`]. A body that is not a `{ dados, links }` envelope of
/// `T` is [`Error::MalformedResponse`].
pub async fn fetch_page<T>(transport: &dyn Transport, url: &Url) -> Result<Page<T>, Error>
where
    T: DeserializeOwned,
{
    tracing::debug!("GET {}", url);
    let resp = transport.get(url).await?;

    match resp.status {
        200..=299 => {}
        400 => {
            return Err(Error::BadRequest {
                url: url.to_string(),
            })
        }
        404 => {
            return Err(Error::NotFound {
                url: url.to_string(),
            })
        }
        500 => {
            return Err(Error::UpstreamServer {
                url: url.to_string(),
            })
        }
        status => {
            return Err(Error::HttpStatus {
                status,
                body: truncate_body(&resp.body),
            })
        }
    }

    serde_json::from_str::<Page<T>>(&resp.body).map_err(|e| {
        Error::MalformedResponse(format!("{} | body: {}", e, truncate_body(&resp.body)))
    })
}

/// Follows the `next` links starting from `initial_links` and returns the
/// items of every following page, in the order they were fetched.
///
/// The first page's own items are not included. A `next` link without an
/// `href` is [`Error::InvalidLink`]. Any error aborts the walk and the pages
/// collected so far are dropped.
pub async fn aggregate<T>(
    initial_links: &[Link],
    transport: &dyn Transport,
    next_links: NextLinks,
) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
{
    let mut items = Vec::new();
    let mut links = initial_links.to_vec();
    let mut pages = 0usize;

    while let Some(next) = links.iter().find(|link| link.rel == Relation::Next) {
        let href = match next.href.as_deref() {
            Some(href) if !href.is_empty() => href,
            _ => {
                return Err(Error::InvalidLink(
                    "the link to the next page has no href".to_string(),
                ))
            }
        };
        let url = next_links.resolve(href)?;
        let page = fetch_page::<Vec<T>>(transport, &url).await?;
        pages += 1;
        items.extend(page.data);
        links = page.links;
    }

    if pages > 0 {
        tracing::debug!("Followed {} extra page(s), {} item(s)", pages, items.len());
    }
    Ok(items)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
    };

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::transport::RawResponse;

    /// Serves canned responses by URL and counts requests.
    #[derive(Default)]
    struct CannedTransport {
        responses: HashMap<String, RawResponse>,
        calls: AtomicUsize,
        requested: Mutex<Vec<String>>,
    }

    impl CannedTransport {
        fn with(mut self, url: &str, status: u16, body: serde_json::Value) -> Self {
            self.responses.insert(
                url.to_string(),
                RawResponse {
                    status,
                    body: body.to_string(),
                },
            );
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn get(&self, url: &Url) -> Result<RawResponse, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().unwrap().push(url.to_string());
            self.responses
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| Error::Transport(format!("no route to {}", url).into()))
        }
    }

    fn link(rel: Relation, href: Option<&str>) -> Link {
        Link {
            rel,
            href: href.map(str::to_string),
        }
    }

    const PAGE_2: &str = "https://api.test/deputados?pagina=2&itens=2";
    const PAGE_3: &str = "https://api.test/deputados?pagina=3&itens=2";

    #[tokio::test]
    async fn three_pages_are_concatenated_in_order() {
        let transport = CannedTransport::default()
            .with(
                PAGE_2,
                200,
                json!({
                    "dados": [3, 4],
                    "links": [
                        { "rel": "self", "href": PAGE_2 },
                        { "rel": "next", "href": PAGE_3 },
                    ]
                }),
            )
            .with(
                PAGE_3,
                200,
                json!({
                    "dados": [5],
                    "links": [
                        { "rel": "self", "href": PAGE_3 },
                        { "rel": "first", "href": "https://api.test/deputados?pagina=1&itens=2" },
                    ]
                }),
            );
        let initial = vec![
            link(Relation::Current, Some("https://api.test/deputados?pagina=1&itens=2")),
            link(Relation::Next, Some(PAGE_2)),
            link(Relation::Last, Some(PAGE_3)),
        ];

        let mut items = vec![1, 2];
        items.extend(
            aggregate::<i64>(&initial, &transport, NextLinks::Verbatim)
                .await
                .unwrap(),
        );

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(transport.calls(), 2);
        assert_eq!(
            *transport.requested.lock().unwrap(),
            vec![PAGE_2.to_string(), PAGE_3.to_string()]
        );
    }

    #[tokio::test]
    async fn no_next_link_means_no_fetch() {
        let transport = CannedTransport::default();
        let initial = vec![link(Relation::Current, Some("https://api.test/deputados"))];
        let items = aggregate::<i64>(&initial, &transport, NextLinks::Verbatim)
            .await
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn next_without_href_is_rejected_before_fetching() {
        let transport = CannedTransport::default();
        let initial = vec![
            link(Relation::Current, Some("https://api.test/deputados")),
            link(Relation::Next, None),
        ];
        let result = aggregate::<i64>(&initial, &transport, NextLinks::Verbatim).await;
        assert!(matches!(result, Err(Error::InvalidLink(_))));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn failure_midway_discards_collected_pages() {
        let transport = CannedTransport::default()
            .with(
                PAGE_2,
                200,
                json!({ "dados": [3], "links": [{ "rel": "next", "href": PAGE_3 }] }),
            )
            .with(PAGE_3, 500, json!({}));
        let initial = vec![link(Relation::Next, Some(PAGE_2))];
        let result = aggregate::<i64>(&initial, &transport, NextLinks::Verbatim).await;
        assert!(matches!(result, Err(Error::UpstreamServer { .. })));
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let transport = CannedTransport::default();
        let initial = vec![link(Relation::Next, Some(PAGE_2))];
        let result = aggregate::<i64>(&initial, &transport, NextLinks::Verbatim).await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn page_size_is_stripped_when_asked() {
        let transport = CannedTransport::default().with(
            "https://api.test/frentes?pagina=2",
            200,
            json!({ "dados": [7], "links": [] }),
        );
        let initial = vec![link(
            Relation::Next,
            Some("https://api.test/frentes?pagina=2&itens=1000"),
        )];
        let items = aggregate::<i64>(&initial, &transport, NextLinks::WithoutPageSize)
            .await
            .unwrap();
        assert_eq!(items, vec![7]);
    }

    #[tokio::test]
    async fn status_mapping() {
        let url = Url::parse("https://api.test/x").unwrap();
        for (status, check) in [
            (400u16, (|e: &Error| matches!(e, Error::BadRequest { .. })) as fn(&Error) -> bool),
            (404, |e| matches!(e, Error::NotFound { .. })),
            (500, |e| matches!(e, Error::UpstreamServer { .. })),
            (503, |e| matches!(e, Error::HttpStatus { status: 503, .. })),
        ] {
            let transport = CannedTransport::default().with(url.as_str(), status, json!({}));
            let err = fetch_page::<Vec<i64>>(&transport, &url).await.unwrap_err();
            assert!(check(&err), "status {} mapped to {:?}", status, err);
        }
    }

    #[tokio::test]
    async fn malformed_envelopes() {
        let url = Url::parse("https://api.test/x").unwrap();
        for body in [
            json!({ "links": [] }),
            json!({ "dados": [1] }),
            json!({ "dados": "not a list", "links": [] }),
            json!([1, 2, 3]),
        ] {
            let transport = CannedTransport::default().with(url.as_str(), 200, body);
            let result = fetch_page::<Vec<i64>>(&transport, &url).await;
            assert!(matches!(result, Err(Error::MalformedResponse(_))));
        }

        let mut transport = CannedTransport::default();
        transport.responses.insert(
            url.to_string(),
            RawResponse {
                status: 200,
                body: "{not valid json}".to_string(),
            },
        );
        let result = fetch_page::<Vec<i64>>(&transport, &url).await;
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() < body.len());
    }
}
