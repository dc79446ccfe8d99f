/*!
 * Named paragraph and text styles for generated documents.
 */

use crate::document::tree::Element;

/// Which kind of content a style applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFamily {
    /// Paragraphs and headings
    Paragraph,
    /// Character runs
    Text,
}

impl StyleFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Text => "text",
        }
    }
}

/// Paragraph layout properties, written as `style:paragraph-properties`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphProperties {
    pub text_align: Option<String>,
    pub margin_top: Option<String>,
    pub margin_bottom: Option<String>,
    pub margin_left: Option<String>,
    pub margin_right: Option<String>,
    pub background_color: Option<String>,
    pub padding: Option<String>,
}

impl ParagraphProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_align(mut self, value: &str) -> Self {
        self.text_align = Some(value.to_string());
        self
    }

    pub fn margin_top(mut self, value: &str) -> Self {
        self.margin_top = Some(value.to_string());
        self
    }

    pub fn margin_bottom(mut self, value: &str) -> Self {
        self.margin_bottom = Some(value.to_string());
        self
    }

    pub fn margin_left(mut self, value: &str) -> Self {
        self.margin_left = Some(value.to_string());
        self
    }

    pub fn margin_right(mut self, value: &str) -> Self {
        self.margin_right = Some(value.to_string());
        self
    }

    pub fn background_color(mut self, value: &str) -> Self {
        self.background_color = Some(value.to_string());
        self
    }

    pub fn padding(mut self, value: &str) -> Self {
        self.padding = Some(value.to_string());
        self
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new("style:paragraph-properties");
        let pairs = [
            ("fo:text-align", &self.text_align),
            ("fo:margin-top", &self.margin_top),
            ("fo:margin-bottom", &self.margin_bottom),
            ("fo:margin-left", &self.margin_left),
            ("fo:margin-right", &self.margin_right),
            ("fo:background-color", &self.background_color),
            ("fo:padding", &self.padding),
        ];
        for (name, value) in pairs {
            if let Some(value) = value {
                element.set_attribute(name, value.as_str());
            }
        }
        element
    }
}

/// Character properties, written as `style:text-properties`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextProperties {
    pub color: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
    pub font_family: Option<String>,
}

impl TextProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: &str) -> Self {
        self.color = Some(value.to_string());
        self
    }

    pub fn font_size(mut self, value: &str) -> Self {
        self.font_size = Some(value.to_string());
        self
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = Some("bold".to_string());
        self
    }

    pub fn italic(mut self) -> Self {
        self.font_style = Some("italic".to_string());
        self
    }

    pub fn font_family(mut self, value: &str) -> Self {
        self.font_family = Some(value.to_string());
        self
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new("style:text-properties");
        let pairs = [
            ("fo:color", &self.color),
            ("fo:font-size", &self.font_size),
            ("fo:font-weight", &self.font_weight),
            ("fo:font-style", &self.font_style),
            ("fo:font-family", &self.font_family),
        ];
        for (name, value) in pairs {
            if let Some(value) = value {
                element.set_attribute(name, value.as_str());
            }
        }
        element
    }
}

/// A named style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub name: String,
    pub family: StyleFamily,
    pub paragraph: Option<ParagraphProperties>,
    pub text: Option<TextProperties>,
}

impl Style {
    /// Create a paragraph style without properties.
    pub fn paragraph(name: &str) -> Self {
        Self {
            name: name.to_string(),
            family: StyleFamily::Paragraph,
            paragraph: None,
            text: None,
        }
    }

    /// Create a text style without properties.
    pub fn text(name: &str) -> Self {
        Self {
            name: name.to_string(),
            family: StyleFamily::Text,
            paragraph: None,
            text: None,
        }
    }

    pub fn with_paragraph_properties(mut self, properties: ParagraphProperties) -> Self {
        self.paragraph = Some(properties);
        self
    }

    pub fn with_text_properties(mut self, properties: TextProperties) -> Self {
        self.text = Some(properties);
        self
    }

    /// `style:style` element for `office:styles`.
    pub fn to_element(&self) -> Element {
        let mut element = Element::new("style:style")
            .with_attribute("style:name", self.name.as_str())
            .with_attribute("style:family", self.family.as_str());
        if let Some(paragraph) = &self.paragraph {
            element.push(paragraph.to_element());
        }
        if let Some(text) = &self.text {
            element.push(text.to_element());
        }
        element
    }
}
