use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::Config;
use crate::node::{Document, Item};
use crate::parser::DELETE_MARKER;
use crate::surface::Surface;

/// Convert a document to an HTML fragment
pub fn document_to_html(document: &Document, config: &Config) -> String {
    let mut out = String::new();
    let wrapper = &config.html.wrapper;

    out.push('<');
    out.push_str(wrapper);
    if let Some(id) = &config.html.id {
        out.push_str(" id=\"");
        out.push_str(&encode_double_quoted_attribute(id));
        out.push('"');
    }
    out.push('>');

    for item in document {
        item_to_html(item, config, &mut out);
    }

    out.push_str("</");
    out.push_str(wrapper);
    out.push('>');

    out
}

fn item_to_html(item: &Item, config: &Config, out: &mut String) {
    match item {
        Item::Text(text) => push_text(text, config, out),
        Item::Styled(node) => {
            let tag = config.tags.for_style(node.style);
            out.push('<');
            out.push_str(tag);
            out.push('>');
            push_text(&node.content, config, out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn push_text(text: &str, config: &Config, out: &mut String) {
    if config.html.drop_stray_markers && text.contains(DELETE_MARKER) {
        let cleaned: String = text.chars().filter(|&c| c != DELETE_MARKER).collect();
        out.push_str(&encode_text(&cleaned));
    } else {
        out.push_str(&encode_text(text));
    }
}

/// A surface holding rendered HTML. Each replacement discards what was there.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    config: Config,
    html: String,
}

impl HtmlSurface {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            html: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

impl Surface for HtmlSurface {
    fn replace_content(&mut self, document: &Document) {
        self.html = document_to_html(document, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, man_to_html, man_to_html_with_config};

    #[test]
    fn bold_and_underline() {
        assert_eq!(
            man_to_html("N\x08NA\x08AM\x08ME\x08E _\x08f_\x08i_\x08l_\x08e").unwrap(),
            "<div><b>NAME</b> <u>file</u></div>"
        );
    }

    #[test]
    fn unknown_uses_span() {
        assert_eq!(
            man_to_html("+\x08o item").unwrap(),
            "<div><span>o</span> item</div>"
        );
    }

    #[test]
    fn empty_document() {
        assert_eq!(man_to_html("").unwrap(), "<div></div>");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            man_to_html("a < b & <\x08<").unwrap(),
            "<div>a &lt; b &amp; <b>&lt;</b></div>"
        );
    }

    #[test]
    fn stray_markers() {
        assert_eq!(man_to_html("\x08a rest").unwrap(), "<div>a rest</div>");

        let mut config = Config::compiled_default();
        config.html.drop_stray_markers = false;
        assert_eq!(
            man_to_html_with_config("\x08a", &config).unwrap(),
            "<div>\x08a</div>"
        );
    }

    #[test]
    fn custom_tags_and_wrapper() {
        let config = Config::from_toml(
            "[tags]\nbold = \"strong\"\nunderline = \"em\"\n[html]\nwrapper = \"pre\"\nid = \"main\"\n",
        )
        .unwrap();
        assert_eq!(
            man_to_html_with_config("b\x08b_\x08u", &config).unwrap(),
            "<pre id=\"main\"><strong>b</strong><em>u</em></pre>"
        );
    }

    #[test]
    fn replace_content_overwrites() {
        let mut surface = HtmlSurface::new(Config::compiled_default());
        assert_eq!(surface.as_str(), "");

        let first = crate::parse("x\x08x").unwrap();
        let second = crate::parse("_\x08y").unwrap();

        surface.replace_content(&first);
        surface.replace_content(&second);
        assert_eq!(surface.as_str(), "<div><u>y</u></div>");

        surface.replace_content(&second);
        assert_eq!(surface.into_string(), "<div><u>y</u></div>");
    }
}
