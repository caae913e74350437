// src/sitemap/xml.rs

pub const XML_HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \n",
    "        xmlns:news=\"http://www.google.com/schemas/sitemap-news/0.9\" \n",
    "        xmlns:xhtml=\"http://www.w3.org/1999/xhtml\" \n",
    "        xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\" \n",
    "        xmlns:video=\"http://www.google.com/schemas/sitemap-video/1.1\">",
);

pub const XML_FOOTER: &str = "</urlset>";

/// Suffix the `<loc>` template appends to every URL.
pub const LOC_SUFFIX: &str = ".md";

/// Escapes the five XML reserved characters. `&` goes first so entities
/// produced by the later replacements are not escaped twice.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Value of a `<loc>` element for an unescaped URL.
pub fn loc(url: &str) -> String {
    format!("{}{}", escape_xml(url), LOC_SUFFIX)
}

/// Renders a complete sitemap document with one `<url>` per entry, in the given order.
pub fn render_sitemap<I, S>(urls: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut doc = String::with_capacity(XML_HEADER.len() + XML_FOOTER.len() + 1);
    doc.push_str(XML_HEADER);
    doc.push('\n');

    for url in urls {
        doc.push_str("<url>\n<loc>");
        doc.push_str(&loc(url.as_ref()));
        doc.push_str("</loc>\n</url>\n");
    }

    doc.push_str(XML_FOOTER);
    doc
}
