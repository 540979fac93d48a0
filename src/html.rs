//! Standalone HTML page wrapping the diagram SVG.

use std::fmt;

use log::debug;

use crate::svg::escape_xml;
use crate::DiagramOptions;

/// MIME type attached to every generated document
pub const HTML_MIME_TYPE: &str = "text/html;charset=utf-8";

const PAGE_STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; background: #f5f5f5; }
        .container { max-width: 1400px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { color: #2c3e50; text-align: center; margin-bottom: 30px; }
        .diagram-container { position: relative; width: 100%; height: 800px; background: #fafafa; border: 2px solid #ddd; border-radius: 8px; overflow: auto; }
        svg { width: 100%; height: 100%; }"#;

/// A rendered HTML document, ready to be offered as a download or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    content: String,
}

impl HtmlDocument {
    /// Wrap `svg` in the fixed page chrome.
    pub fn from_svg(svg: &str, options: &DiagramOptions) -> Self {
        let content = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
{}
    </style>
</head>
<body>
    <div class="container">
        <h1>{}</h1>
        <div class="diagram-container">
{}
        </div>
    </div>
</body>
</html>
"#,
            escape_xml(&options.title),
            PAGE_STYLE,
            escape_xml(&options.heading),
            svg
        );
        debug!(bytes = content.len(); "HTML document assembled");
        Self { content }
    }

    pub fn mime_type(&self) -> &'static str {
        HTML_MIME_TYPE
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// UTF-8 bytes of the document
    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_bytes()
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
