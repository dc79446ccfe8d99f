/*!
 * Changelog conversion from HTML to OpenDocument Text.
 *
 * The changelog is a flat HTML page of `h3` release headings, `p`
 * paragraphs, `ul`/`li` lists and `hr` separators. Each block becomes a
 * paragraph in the output document; list items are written as bullet
 * paragraphs once their list is complete.
 */

use std::path::Path;

use anyhow::{Context, Result};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use log::{debug, info};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::document::{ParagraphProperties, Style, TextDocument, TextProperties};
use crate::file_utils::FileManager;

pub const HEADING_STYLE: &str = "Heading3Red";
pub const BOLD_STYLE: &str = "Bold";
pub const NORMAL_STYLE: &str = "Normal";

const BULLET: &str = "• ";

/// Parse HTML into a DOM.
fn html_to_dom(html: &str) -> Result<RcDom> {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .context("Failed to parse changelog HTML")
}

fn element_name(node: &Handle) -> Option<String> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Text of a node's descendants, leaving out nested lists.
fn block_text(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        match child.data {
            NodeData::Text { ref contents } => out.push_str(&contents.borrow()),
            NodeData::Element { ref name, .. } => {
                let local: &str = &name.local;
                if local != "ul" && local != "ol" {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}

/// Converts changelog HTML into a styled text document.
pub struct ChangelogConverter {
    document: TextDocument,
}

impl Default for ChangelogConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogConverter {
    pub fn new() -> Self {
        let mut document = TextDocument::new();
        document.set_title("Changelog");

        // Red, centered release headings
        document.add_style(
            Style::paragraph(HEADING_STYLE)
                .with_paragraph_properties(ParagraphProperties::new().text_align("center"))
                .with_text_properties(TextProperties::new().color("#ff0000").font_size("14pt").bold()),
        );
        document.add_style(Style::text(BOLD_STYLE).with_text_properties(TextProperties::new().bold()));
        document.add_style(Style::paragraph(NORMAL_STYLE));

        Self { document }
    }

    /// Convert an HTML string.
    pub fn convert(mut self, html: &str) -> Result<TextDocument> {
        let dom = html_to_dom(html)?;
        self.walk(&dom.document);
        Ok(self.document)
    }

    fn walk(&mut self, node: &Handle) {
        let children: Vec<Handle> = node.children.borrow().iter().cloned().collect();
        for child in children {
            match element_name(&child).as_deref() {
                Some("h3") => {
                    let text = block_text(&child);
                    let text = text.trim();
                    if !text.is_empty() {
                        self.document.add_heading(3, HEADING_STYLE, text);
                    }
                }
                Some("p") => {
                    let text = block_text(&child);
                    let text = text.trim();
                    if !text.is_empty() {
                        self.document.add_paragraph(NORMAL_STYLE, text);
                    }
                }
                Some("ul") | Some("ol") => self.list(&child),
                Some("hr") => self.document.add_empty_paragraph(NORMAL_STYLE),
                Some(_) => self.walk(&child),
                None => {}
            }
        }
    }

    fn list(&mut self, list: &Handle) {
        let mut items = Vec::new();
        let children: Vec<Handle> = list.children.borrow().iter().cloned().collect();
        for child in children {
            if element_name(&child).as_deref() != Some("li") {
                continue;
            }
            // Nested lists are complete before the enclosing item ends
            self.nested_lists(&child);
            let text = block_text(&child);
            let text = text.trim();
            if !text.is_empty() {
                items.push(text.to_string());
            }
        }

        debug!("Writing list with {} item(s)", items.len());
        for item in items {
            self.document.add_paragraph(NORMAL_STYLE, &format!("{}{}", BULLET, item));
        }
    }

    fn nested_lists(&mut self, node: &Handle) {
        let children: Vec<Handle> = node.children.borrow().iter().cloned().collect();
        for child in children {
            match element_name(&child).as_deref() {
                Some("ul") | Some("ol") => self.list(&child),
                Some(_) => self.nested_lists(&child),
                None => {}
            }
        }
    }
}

/// Convert a changelog HTML file into an ODT file.
pub fn convert_html_to_odt<P1: AsRef<Path>, P2: AsRef<Path>>(html_file: P1, odt_file: P2) -> Result<()> {
    let html_file = html_file.as_ref();
    let odt_file = odt_file.as_ref();

    let html = FileManager::read_to_string(html_file)?;
    let document = ChangelogConverter::new().convert(&html)?;
    document
        .save(odt_file)
        .with_context(|| format!("Failed to write changelog document: {:?}", odt_file))?;

    info!("Successfully created {}", odt_file.display());
    Ok(())
}
