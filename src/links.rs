/*! Link signatures

The link signature of a document is the concatenation, in document order, of every
hyperlink target found in its markup, with the document's own origin (`scheme://host`) removed.

Two translations of the same page tend to share their link structure, so the edit distance
between signatures is a cheap structural similarity measure.

Extraction is a plain pattern scan over the raw markup: `href` attributes inside
comments or `<script>` blocks are counted as well.
!*/
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `href = "target"` or `href = 'target'`, leading blanks of the target are skipped.
    static ref HREF: Regex = Regex::new(r#"(?s)(?i:href)\s*=\s*['"]\s*([^'"]+)['"]"#).unwrap();
    /// `http(s)://host` at the start of an URL
    static ref ORIGIN: Regex = Regex::new(r"^https?://[^/:]+").unwrap();
}

/// Iterate over the hyperlink targets of a document, in order.
pub fn targets(html: &str) -> impl Iterator<Item = &str> {
    HREF.captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Get the origin (`scheme://host`) of an URL, if it has one.
pub fn origin(url: &str) -> Option<&str> {
    ORIGIN.find(url).map(|m| m.as_str())
}

/// Compute the link signature of a document located at `url`.
pub fn signature(html: &str, url: &str) -> String {
    let links: String = targets(html).collect();

    match origin(url) {
        Some(origin) => links.replace(origin, ""),
        None => links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_origin() {
        let html = r#"<a href="http://x.com/a">t</a><a href='http://x.com/b'>u</a>"#;
        assert_eq!(signature(html, "http://x.com/page"), "/a/b");
    }

    #[test]
    fn no_origin() {
        let html = r#"<a href="http://x.com/a">t</a><a href='/b'>u</a>"#;
        assert_eq!(signature(html, "x.com/page"), "http://x.com/a/b");
    }

    #[test]
    fn origin_with_port() {
        assert_eq!(origin("https://x.com:8080/page"), Some("https://x.com"));
        assert_eq!(origin("ftp://x.com/page"), None);
        assert_eq!(origin(" http://x.com"), None);
    }

    #[test]
    fn foreign_links_kept() {
        let html = r#"<a href="http://x.com/a"></a><a href="http://y.org/http://x.com">"#;
        assert_eq!(
            signature(html, "http://x.com"),
            "/ahttp://y.org/"
        );
    }

    #[test]
    fn whitespace_and_case() {
        let html = "<A HREF = \"  /a\"><link Href=\n'/b'>";
        assert_eq!(targets(html).collect::<Vec<_>>(), vec!["/a", "/b"]);
    }

    #[test]
    fn multiline_document() {
        let html = "<html>\n<a href=\"/a\">\n</a>\n<!-- <a href='/hidden'> -->\n<script>x.href=\"/js\"</script>";
        assert_eq!(signature(html, "https://example.com/"), "/a/hidden/js");
    }

    #[test]
    fn quotes_stop_target() {
        // unquoted and empty targets are not links
        let html = r#"<a href=/a><a href=""><a href="/b'c">"#;
        assert_eq!(targets(html).collect::<Vec<_>>(), vec!["/b"]);
    }

    #[test]
    fn no_links() {
        assert_eq!(signature("<p>nothing here</p>", "http://x.com"), "");
    }
}
