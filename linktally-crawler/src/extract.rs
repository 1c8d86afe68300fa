use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

/// Collect the absolute URL of every `<a href>` in `html`, in document
/// order.
///
/// Each href is resolved against `base` with standard URL-resolution rules,
/// so relative paths, protocol-relative references and absolute URLs all
/// come out absolute. An href that cannot be resolved is dropped with a
/// warning; one bad anchor never fails the whole extraction. Duplicates are
/// kept, the visit table is what deduplicates.
pub fn extract_links(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    let mut links = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            match base.join(href) {
                Ok(resolved) => links.push(resolved),
                Err(e) => warn!("skipping unresolvable href '{}': {}", href, e),
            }
        }
    }

    links
}
