use epub::doc::EpubDoc;
use std::io::Cursor;
use tracing::info;

use crate::error::SourceError;

/// Elements that separate words; every other tag is dropped in place
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "br", "dd", "div", "dl", "dt",
    "figcaption", "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hr",
    "html", "li", "nav", "ol", "p", "pre", "section", "table", "td", "th", "title", "tr", "ul",
];

/// Text recovered from an EPUB, one entry per spine document
#[derive(Debug, Clone)]
pub struct EpubContent {
    pub title: String,
    pub author: String,
    pub chapters: Vec<String>,
}

impl EpubContent {
    /// Chapters in reading order separated by blank lines
    pub fn text(&self) -> String {
        self.chapters.join("\n\n")
    }
}

/// Extract text from EPUB bytes in spine (reading) order
pub fn extract_epub_text(bytes: &[u8]) -> Result<EpubContent, SourceError> {
    let mut doc = EpubDoc::from_reader(Cursor::new(bytes.to_vec()))
        .map_err(|e| SourceError::Epub(e.to_string()))?;

    let title = doc.mdata("title").unwrap_or_else(|| "Unknown".to_string());
    let author = doc.mdata("creator").unwrap_or_else(|| "Unknown".to_string());

    info!("EPUB: {} by {}", title, author);

    let mut chapters = Vec::new();
    let spine_len = doc.spine.len();

    for i in 0..spine_len {
        doc.set_current_page(i);

        if let Some((html, _mime)) = doc.get_current_str() {
            let content = strip_html_tags(&html);
            if !content.is_empty() {
                chapters.push(content);
            }
        }
    }

    info!("Extracted {} chapters from EPUB", chapters.len());

    Ok(EpubContent {
        title,
        author,
        chapters,
    })
}

/// Drop markup, `<script>`/`<style>` bodies and the common entities
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        result.push_str(&rest[..open]);
        rest = &rest[open..];

        let tag = rest[1..]
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '>' || c == '/')
            .next()
            .unwrap_or("")
            .to_lowercase();

        let separates =
            matches!(tag.as_str(), "script" | "style") || BLOCK_TAGS.contains(&tag.as_str());
        let skip_to = match tag.as_str() {
            "script" | "style" if !rest.starts_with("</") => {
                let closing = format!("</{}", tag);
                rest.to_ascii_lowercase()
                    .find(&closing)
                    .and_then(|pos| rest[pos..].find('>').map(|end| pos + end + 1))
            }
            _ => rest.find('>').map(|end| end + 1),
        };

        match skip_to {
            Some(end) => {
                // Inline markup such as drop caps sits inside a word
                if separates {
                    result.push(' ');
                }
                rest = &rest[end..];
            }
            None => {
                rest = "";
            }
        }
    }
    result.push_str(rest);

    let text = result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
