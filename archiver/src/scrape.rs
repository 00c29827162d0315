use scraper::{Html, Selector};

/// Extract the comic image URLs from a fetched publication page, in
/// document order. The strip images are the `img` elements whose alt text
/// is exactly "Comic"; navigation buttons and site art use other alt text.
/// An empty result is valid; not every candidate date has a page.
pub fn extract_comic_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let comic_selector = Selector::parse(r#"img[src][alt="Comic"]"#).unwrap();

    document
        .select(&comic_selector)
        .filter_map(|img| img.value().attr("src"))
        .map(|src| src.to_string())
        .collect()
}
