//! Share text and links
//!
//! The page address carries the shown quote as an `id` query parameter;
//! these helpers build that permalink plus tweet and pin intent links.

use quotecycle_domain::Quote;
use url::Url;

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";
const PIN_INTENT: &str = "https://pinterest.com/pin/create/button/";

/// Builds permalinks and share links for quotes
#[derive(Debug, Clone, Default)]
pub struct ShareLinks {
    base_url: Option<Url>,
}

impl ShareLinks {
    /// Create from the configured page address.
    ///
    /// Returns an error if `base_url` is present but not a valid URL.
    pub fn new(base_url: Option<&str>) -> Result<Self, url::ParseError> {
        let base_url = base_url.map(Url::parse).transpose()?;
        Ok(Self { base_url })
    }

    /// Page address with `id` set to the quote's identifier, replacing any
    /// existing `id` parameter. `None` when no base URL is configured.
    pub fn permalink(&self, quote: &Quote) -> Option<Url> {
        let mut url = self.base_url.clone()?;
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != "id")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.extend_pairs(kept);
            query.append_pair("id", quote.id.as_str());
        }
        Some(url)
    }

    /// Tweet-intent link carrying the share text
    pub fn tweet_intent(&self, quote: &Quote) -> Result<Url, url::ParseError> {
        Url::parse_with_params(TWEET_INTENT, &[("text", quote.share_text())])
    }

    /// Pin-intent link pointing at the quote's permalink.
    ///
    /// `None` when no base URL is configured, since a pin needs a page.
    pub fn pin_intent(&self, quote: &Quote) -> Option<Url> {
        let page = self.permalink(quote)?;
        let mut url = Url::parse(PIN_INTENT).ok()?;
        url.query_pairs_mut()
            .append_pair("url", page.as_str())
            .append_pair("description", &quote.share_text());
        Some(url)
    }
}
