use scraper::{Html, Selector};

use crate::error::Error;

/// An anchor from the legends listing page: the legend's own page path and
/// the thumbnail shown in the grid.
#[derive(Debug, Clone)]
pub struct LegendLink {
    pub href: String,
    pub thumbnail: String,
}

pub async fn fetch_legend_links(
    client: &reqwest::Client,
    site_url: &str,
) -> Result<Vec<LegendLink>, Error> {
    let html = client
        .get(format!("{site_url}/legends"))
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let links = parse_legend_links(&html);

    tracing::info!(count = links.len(), "parsed legend links from listing page");

    Ok(links)
}

/// Extract every anchor pointing at an individual legend page. Anchors
/// without a `/legends/` href or without a thumbnail `<img>` inside them
/// (nav links, footer links) are dropped.
pub fn parse_legend_links(html: &str) -> Vec<LegendLink> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse(r#"a[href^="/legends/"]"#).unwrap();
    let img_selector = Selector::parse("img[src]").unwrap();

    document
        .select(&anchor_selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?.to_string();
            let thumbnail = anchor
                .select(&img_selector)
                .next()?
                .value()
                .attr("src")?
                .to_string();

            Some(LegendLink { href, thumbnail })
        })
        .collect()
}

/// Find the splash `<img>` on a legend's own page and return its source URL.
pub fn parse_splash_url(html: &str, page_url: &str) -> Result<String, Error> {
    let document = Html::parse_document(html);
    let splash_selector = Selector::parse("img.splash").unwrap();

    document
        .select(&splash_selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string)
        .ok_or_else(|| Error::SplashNotFound {
            page: page_url.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
            <nav><a href="/legends">All Legends</a><a href="/store">Store</a></nav>
            <div class="grid">
                <a href="/legends/bodvar/"><img src="https://cdn.test/mini/bodvar.png"><h3>Bödvar</h3></a>
                <a href="/legends/cassidy/"><img src="https://cdn.test/mini/cassidy.png"><h3>Cassidy</h3></a>
                <a href="/legends/orion/"><h3>No thumbnail here</h3></a>
                <a href="/news/patch-9-04/"><img src="https://cdn.test/news.png"></a>
            </div>
        </body></html>
    "#;

    #[test]
    fn listing_keeps_only_legend_anchors_with_thumbnails() {
        let links = parse_legend_links(LISTING);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "/legends/bodvar/");
        assert_eq!(links[0].thumbnail, "https://cdn.test/mini/bodvar.png");
        assert_eq!(links[1].href, "/legends/cassidy/");
    }

    #[test]
    fn listing_without_matches_is_empty() {
        assert!(parse_legend_links("<html><body><p>maintenance</p></body></html>").is_empty());
    }

    #[test]
    fn splash_url_is_extracted() {
        let html = r#"
            <html><body>
                <img class="hero" src="https://cdn.test/hero.png">
                <img class="splash" src="https://cdn.test/full/bodvar.png">
            </body></html>
        "#;

        let url = parse_splash_url(html, "https://brawlhalla.com/legends/bodvar/").unwrap();
        assert_eq!(url, "https://cdn.test/full/bodvar.png");
    }

    #[test]
    fn missing_splash_is_its_own_error() {
        let err = parse_splash_url(
            "<html><body><img src='x.png'></body></html>",
            "https://brawlhalla.com/legends/orion/",
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::SplashNotFound { ref page } if page.contains("orion")
        ));
    }
}
