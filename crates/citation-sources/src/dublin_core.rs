//! Minimal `<meta name=... content=...>` extraction. Enough for Dublin Core headers; not an HTML parser.

use once_cell::sync::Lazy;
use regex::Regex;

static META_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<meta\b[^>]*>").unwrap());
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)([a-zA-Z_:.\-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Name/content pairs in document order. Names compare case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct MetaTags {
    entries: Vec<(String, String)>,
}

impl MetaTags {
    pub fn parse(html: &str) -> Self {
        let entries = META_TAG_RE
            .find_iter(html)
            .filter_map(|tag| parse_meta_tag(tag.as_str()))
            .collect();
        Self { entries }
    }

    /// First non-empty `content` for `name`, trimmed.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, content)| content.trim())
            .find(|content| !content.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_meta_tag(tag: &str) -> Option<(String, String)> {
    let mut name = None;
    let mut content = None;
    for cap in ATTR_RE.captures_iter(tag) {
        let key = cap.get(1)?.as_str();
        let value = cap.get(2).or_else(|| cap.get(3)).map_or("", |m| m.as_str());
        if key.eq_ignore_ascii_case("name") || key.eq_ignore_ascii_case("property") {
            name.get_or_insert_with(|| value.to_string());
        } else if key.eq_ignore_ascii_case("content") {
            content = Some(decode_entities(value));
        }
    }
    Some((name?, content?))
}

/// Decodes the handful of entities that show up in attribute values.
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&ndash;", "–")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meta_tags() {
        let html = r#"
            <html><head>
            <META NAME="DC.Title" CONTENT="Some &quot;quoted&quot; title">
            <meta content='Петров, П.П.' name='DC.Creator'/>
            <meta name="DC.Source" content="">
            <meta name="DC.Source" content="Вестник">
            <meta charset="utf-8">
            </head></html>
        "#;
        let tags = MetaTags::parse(html);
        assert_eq!(tags.len(), 4);
        assert_eq!(tags.get("dc.title"), Some("Some \"quoted\" title"));
        assert_eq!(tags.get("DC.Creator"), Some("Петров, П.П."));
        assert_eq!(tags.get("DC.Source"), Some("Вестник"));
        assert_eq!(tags.get("DC.Date"), None);
    }

    #[test]
    fn test_multiline_tag() {
        let html = "<meta\n  name=\"DC.Date\"\n  content=\"2020\"\n>";
        assert_eq!(MetaTags::parse(html).get("DC.Date"), Some("2020"));
    }

    #[test]
    fn test_decode_entities_amp_last() {
        assert_eq!(decode_entities("A &amp;lt; B"), "A &lt; B");
        assert_eq!(decode_entities("plain"), "plain");
    }
}
