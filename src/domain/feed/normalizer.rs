use super::model::{FeedItem, FeedView, FeedViewParams, ParsedFeed, DEFAULT_SIZE};

/// Build the template-ready view of a parsed feed.
///
/// Items that carry `enclosures` but no `media:content` get `media:content`
/// pointing at the same enclosure sequence. Items that already define
/// `media:content` are left untouched.
pub fn normalize(parsed: ParsedFeed, params: FeedViewParams) -> FeedView {
    let ParsedFeed { meta, items } = parsed;

    let size = params
        .size
        .filter(|size| !size.is_empty())
        .unwrap_or_else(|| DEFAULT_SIZE.to_string());

    FeedView {
        title: meta.title.clone(),
        meta,
        items: items.into_iter().map(promote_enclosures).collect(),
        url: params.url,
        size,
        layout: params.layout,
    }
}

fn promote_enclosures(mut item: FeedItem) -> FeedItem {
    if item.media_content.is_none() {
        item.media_content = item.enclosures.clone();
    }
    item
}
