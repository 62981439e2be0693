use url::Url;

use super::OptionSchema;
use crate::Error;

/// How `next` links of an endpoint are followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextLinks {
    /// Request the `href` exactly as sent.
    Verbatim,
    /// Drop the `itens` pair first. The fronts listing echoes a page size it
    /// then refuses (dados-abertos issue #326).
    WithoutPageSize,
}

impl NextLinks {
    /// Turns a `next` href into the URL that is actually requested.
    pub fn resolve(&self, href: &str) -> Result<Url, Error> {
        let url = Url::parse(href)
            .map_err(|e| Error::InvalidLink(format!("{}: {}", href, e)))?;
        match self {
            NextLinks::Verbatim => Ok(url),
            NextLinks::WithoutPageSize => {
                let kept: Vec<(String, String)> = url
                    .query_pairs()
                    .filter(|(k, _)| k != "itens")
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();
                let mut url = url;
                url.set_query(None);
                if !kept.is_empty() {
                    url.query_pairs_mut().extend_pairs(kept);
                }
                Ok(url)
            }
        }
    }
}

/// Static description of one operation: where it lives, how many items it asks
/// for per page and which options it accepts.
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    /// Collection path, e.g. `deputados`.
    pub collection: &'static str,
    /// Path segment after the item id, e.g. `despesas`.
    pub sub: Option<&'static str>,
    /// Page size sent as `itens`.
    pub page_size: Option<u32>,
    pub options: OptionSchema,
    pub next_links: NextLinks,
}

impl Endpoint {
    pub const fn new(collection: &'static str) -> Self {
        Self {
            collection,
            sub: None,
            page_size: None,
            options: OptionSchema::NONE,
            next_links: NextLinks::Verbatim,
        }
    }

    pub const fn sub(mut self, sub: &'static str) -> Self {
        self.sub = Some(sub);
        self
    }

    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub const fn options(mut self, options: OptionSchema) -> Self {
        self.options = options;
        self
    }

    pub const fn next_links(mut self, next_links: NextLinks) -> Self {
        self.next_links = next_links;
        self
    }

    /// Builds `{base}/{collection}[/{id}][/{sub}][?itens=N]`. The id is
    /// percent-encoded as a path segment.
    pub fn url(&self, base: &Url, id: Option<&str>) -> Result<Url, Error> {
        let mut url = base.clone();
        {
            let Ok(mut segments) = url.path_segments_mut() else {
                return Err(Error::InvalidUrl(format!("{} cannot be a base URL", base)));
            };
            segments.pop_if_empty().push(self.collection);
            if let Some(id) = id {
                segments.push(id);
            }
            if let Some(sub) = self.sub {
                segments.push(sub);
            }
        }
        if let Some(page_size) = self.page_size {
            url.query_pairs_mut()
                .append_pair("itens", &page_size.to_string());
        }
        Ok(url)
    }
}
