/*!
 * Builder for OpenDocument Text documents.
 *
 * Mirrors the way a word-processor API is driven: register named styles,
 * then append headings and paragraphs that refer to them by name.
 */

use std::path::Path;

use chrono::Local;
use log::warn;

use crate::document::package::OdtPackage;
use crate::document::styles::{Style, StyleFamily};
use crate::document::tree::Element;
use crate::document::xml::XmlDocument;
use crate::errors::DocumentError;

const OFFICE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
const STYLE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";
const TEXT_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";
const FO_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0";
const META_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:meta:1.0";
const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// An OpenDocument Text document under construction
#[derive(Debug, Clone)]
pub struct TextDocument {
    styles: Vec<Style>,
    body: Element,
    title: Option<String>,
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            styles: Vec::new(),
            body: Element::new("office:text"),
            title: None,
        }
    }

    /// Set the document title written to `meta.xml`.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Register a named style, replacing one with the same name.
    pub fn add_style(&mut self, style: Style) {
        match self.styles.iter_mut().find(|s| s.name == style.name) {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
    }

    /// Registered styles in registration order.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Whether a style with `name` and `family` is registered.
    pub fn has_style(&self, name: &str, family: StyleFamily) -> bool {
        self.styles.iter().any(|s| s.name == name && s.family == family)
    }

    /// The `office:text` body element.
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Append a heading at `level` (1-based outline level).
    pub fn add_heading(&mut self, level: u8, style: &str, text: &str) {
        self.check_paragraph_style(style);
        let mut heading = Element::new("text:h")
            .with_attribute("text:outline-level", level.max(1).to_string())
            .with_attribute("text:style-name", style);
        append_text(&mut heading, text);
        self.body.push(heading);
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, style: &str, text: &str) {
        self.check_paragraph_style(style);
        let mut paragraph = Element::new("text:p").with_attribute("text:style-name", style);
        append_text(&mut paragraph, text);
        self.body.push(paragraph);
    }

    /// Append a paragraph without text (a blank line).
    pub fn add_empty_paragraph(&mut self, style: &str) {
        self.add_paragraph(style, "");
    }

    fn check_paragraph_style(&self, style: &str) {
        if !self.has_style(style, StyleFamily::Paragraph) {
            warn!("Paragraph style '{}' is not registered in this document", style);
        }
    }

    /// `content.xml` for this document.
    pub fn content_xml(&self) -> XmlDocument {
        let root = Element::new("office:document-content")
            .with_attribute("xmlns:office", OFFICE_NS)
            .with_attribute("xmlns:style", STYLE_NS)
            .with_attribute("xmlns:text", TEXT_NS)
            .with_attribute("xmlns:fo", FO_NS)
            .with_attribute("office:version", "1.2")
            .with_child(Element::new("office:automatic-styles"))
            .with_child(Element::new("office:body").with_child(self.body.clone()));
        XmlDocument::new(root)
    }

    /// `styles.xml` for this document.
    pub fn styles_xml(&self) -> XmlDocument {
        let mut office_styles = Element::new("office:styles");
        for style in &self.styles {
            office_styles.push(style.to_element());
        }

        let root = Element::new("office:document-styles")
            .with_attribute("xmlns:office", OFFICE_NS)
            .with_attribute("xmlns:style", STYLE_NS)
            .with_attribute("xmlns:text", TEXT_NS)
            .with_attribute("xmlns:fo", FO_NS)
            .with_attribute("office:version", "1.2")
            .with_child(office_styles);
        XmlDocument::new(root)
    }

    /// `meta.xml` for this document.
    pub fn meta_xml(&self) -> XmlDocument {
        let created = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        let mut meta = Element::new("office:meta")
            .with_child(
                Element::new("meta:generator")
                    .with_child(format!("winupdate-docs/{}", env!("CARGO_PKG_VERSION"))),
            )
            .with_child(Element::new("meta:creation-date").with_child(created));
        if let Some(title) = &self.title {
            meta.push(Element::new("dc:title").with_child(title.as_str()));
        }

        let root = Element::new("office:document-meta")
            .with_attribute("xmlns:office", OFFICE_NS)
            .with_attribute("xmlns:meta", META_NS)
            .with_attribute("xmlns:dc", DC_NS)
            .with_attribute("office:version", "1.2")
            .with_child(meta);
        XmlDocument::new(root)
    }

    /// Assemble the zip package.
    pub fn to_package(&self) -> OdtPackage {
        OdtPackage::from_parts(&self.content_xml(), &self.styles_xml(), &self.meta_xml())
    }

    /// Write the document as an `.odt` file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DocumentError> {
        self.to_package().save(path)
    }
}

/// Append text to a paragraph, encoding whitespace the way ODF expects.
///
/// The first space of a run is kept as text and the rest become
/// `text:s text:c="n"`; tabs become `text:tab` and newlines `text:line-break`.
pub fn append_text(element: &mut Element, text: &str) {
    let mut buffer = String::new();
    let mut spaces = 0usize;

    for c in text.chars() {
        match c {
            ' ' => {
                if spaces == 0 {
                    buffer.push(' ');
                }
                spaces += 1;
            }
            '\t' | '\n' => {
                flush_spaces(element, &mut buffer, &mut spaces);
                element.push_text(&buffer);
                buffer.clear();
                let name = if c == '\t' { "text:tab" } else { "text:line-break" };
                element.push(Element::new(name));
            }
            _ => {
                flush_spaces(element, &mut buffer, &mut spaces);
                buffer.push(c);
            }
        }
    }
    flush_spaces(element, &mut buffer, &mut spaces);
    element.push_text(&buffer);
}

fn flush_spaces(element: &mut Element, buffer: &mut String, spaces: &mut usize) {
    if *spaces > 1 {
        element.push_text(buffer);
        buffer.clear();
        let extra = *spaces - 1;
        let mut space = Element::new("text:s");
        if extra > 1 {
            space.set_attribute("text:c", extra.to_string());
        }
        element.push(space);
    }
    *spaces = 0;
}
