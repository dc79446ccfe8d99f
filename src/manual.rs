/*!
 * User manual generation.
 *
 * The manual is authored in Norwegian as a list of content blocks (headings
 * and paragraphs with a style) and rendered into an ODT document with the
 * manual's style sheet. The built-in content is embedded from
 * `resources/manual_no.json`.
 */

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::document::{ParagraphProperties, Style, TextDocument, TextProperties};
use crate::file_utils::FileManager;

const MANUAL_NO_JSON: &str = include_str!("../resources/manual_no.json");

/// Default file name of the Norwegian manual
pub const MANUAL_NO_FILE: &str = "WinUpdate_Brukermanual_NO.odt";

/// Paragraph styles used by the manual
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ManualStyle {
    Title,
    Heading1,
    Heading2,
    Heading3,
    Normal,
    ListItem,
    Note,
}

impl ManualStyle {
    /// Style name as registered in the document
    pub fn style_name(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Heading1 => "Heading1",
            Self::Heading2 => "Heading2",
            Self::Heading3 => "Heading3",
            Self::Normal => "Normal",
            Self::ListItem => "ListItem",
            Self::Note => "Note",
        }
    }
}

/// One block of manual content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManualBlock {
    /// Outline heading
    Heading {
        level: u8,
        style: ManualStyle,
        text: String,
    },
    /// Paragraph; without text it is a blank line
    Paragraph {
        style: ManualStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

/// Built-in Norwegian manual content.
pub fn builtin_content() -> Result<Vec<ManualBlock>> {
    parse_content(MANUAL_NO_JSON).context("Embedded manual content is invalid")
}

/// Parse manual content from JSON.
pub fn parse_content(json: &str) -> Result<Vec<ManualBlock>> {
    Ok(serde_json::from_str(json)?)
}

/// Load manual content from a JSON file.
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<Vec<ManualBlock>> {
    let path = path.as_ref();
    let json = FileManager::read_to_string(path)?;
    parse_content(&json).with_context(|| format!("Invalid manual content: {:?}", path))
}

/// Register the manual's style sheet on `document`.
pub fn add_manual_styles(document: &mut TextDocument) {
    document.add_style(
        Style::paragraph("Title")
            .with_paragraph_properties(ParagraphProperties::new().text_align("center").margin_bottom("0.5cm"))
            .with_text_properties(TextProperties::new().font_size("24pt").bold().color("#0066cc")),
    );
    document.add_style(
        Style::paragraph("Heading1")
            .with_paragraph_properties(ParagraphProperties::new().margin_top("0.5cm").margin_bottom("0.3cm"))
            .with_text_properties(TextProperties::new().font_size("18pt").bold().color("#003366")),
    );
    document.add_style(
        Style::paragraph("Heading2")
            .with_paragraph_properties(ParagraphProperties::new().margin_top("0.4cm").margin_bottom("0.2cm"))
            .with_text_properties(TextProperties::new().font_size("14pt").bold().color("#0066cc")),
    );
    document.add_style(
        Style::paragraph("Heading3")
            .with_paragraph_properties(ParagraphProperties::new().margin_top("0.3cm").margin_bottom("0.15cm"))
            .with_text_properties(TextProperties::new().font_size("12pt").bold().color("#666666")),
    );
    document.add_style(
        Style::paragraph("Normal")
            .with_paragraph_properties(ParagraphProperties::new().margin_bottom("0.2cm").text_align("justify"))
            .with_text_properties(TextProperties::new().font_size("11pt")),
    );
    document.add_style(Style::text("Bold").with_text_properties(TextProperties::new().bold()));
    document.add_style(Style::text("Italic").with_text_properties(TextProperties::new().italic()));
    document.add_style(
        Style::text("Code").with_text_properties(
            TextProperties::new().font_family("Courier New").font_size("10pt").color("#cc0000"),
        ),
    );
    document.add_style(
        Style::paragraph("ListItem")
            .with_paragraph_properties(ParagraphProperties::new().margin_left("0.5cm").margin_bottom("0.1cm")),
    );
    document.add_style(
        Style::paragraph("Note")
            .with_paragraph_properties(
                ParagraphProperties::new()
                    .margin_left("0.5cm")
                    .margin_right("0.5cm")
                    .margin_top("0.2cm")
                    .margin_bottom("0.2cm")
                    .background_color("#f0f8ff")
                    .padding("0.3cm"),
            )
            .with_text_properties(TextProperties::new().font_size("10pt").italic()),
    );
}

/// Render manual blocks into a styled document.
pub fn build_manual(blocks: &[ManualBlock]) -> TextDocument {
    let mut document = TextDocument::new();
    document.set_title("WinUpdate");
    add_manual_styles(&mut document);

    for block in blocks {
        match block {
            ManualBlock::Heading { level, style, text } => {
                document.add_heading(*level, style.style_name(), text);
            }
            ManualBlock::Paragraph { style, text } => {
                document.add_paragraph(style.style_name(), text.as_deref().unwrap_or_default());
            }
        }
    }

    document
}

/// Generate the manual as an ODT file.
pub fn create_manual<P: AsRef<Path>>(filename: P, blocks: &[ManualBlock]) -> Result<()> {
    let filename = filename.as_ref();
    build_manual(blocks)
        .save(filename)
        .with_context(|| format!("Failed to write manual: {:?}", filename))?;
    info!("✓ Created {}", filename.display());
    Ok(())
}
