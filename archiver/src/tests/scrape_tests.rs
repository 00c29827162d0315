use super::fixtures;
use crate::scrape::extract_comic_urls;

#[test]
fn test_sample_page_parsing() {
    let html = fixtures::load_html_fixture("comic_page");
    let urls = extract_comic_urls(&html);

    // Both strip images, in document order; logo and navigation buttons
    // are ignored.
    assert_eq!(
        urls,
        vec![
            "http://www.girlgeniusonline.com/comics/issue1/20021104a.jpg",
            "http://www.girlgeniusonline.com/comics/issue1/20021104b.jpg",
        ]
    );
}

#[test]
fn test_page_without_comic_images() {
    let html = r#"
    <html>
    <body>
        <img src="/images/logo.png" alt="Girl Genius logo">
        <p>No comic today.</p>
    </body>
    </html>
    "#;

    assert!(extract_comic_urls(html).is_empty());
}

#[test]
fn test_alt_text_must_match_exactly() {
    let html = r#"
    <html>
    <body>
        <img src="/a.jpg" alt="Comic strip">
        <img src="/b.jpg" alt="comic">
        <img src="/c.jpg" alt="Comic">
    </body>
    </html>
    "#;

    assert_eq!(extract_comic_urls(html), vec!["/c.jpg"]);
}

#[test]
fn test_comic_image_without_src_is_skipped() {
    let html = r#"<html><body><img alt="Comic"><img alt="Comic" src="/a.jpg"></body></html>"#;

    assert_eq!(extract_comic_urls(html), vec!["/a.jpg"]);
}
