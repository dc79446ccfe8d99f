/*!
 * Minimal XML reader and writer for OpenDocument parts.
 *
 * ODF parts are plain namespaced XML: a declaration, one root element,
 * elements, attributes and character data. This module maps such a part onto
 * the document tree and back. Comments are dropped, CDATA sections become
 * text, and everything before the root element is kept verbatim as prolog.
 */

use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::document::tree::{Element, Node};
use crate::errors::DocumentError;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<!--.*?-->|<!\[CDATA\[.*?\]\]>|<\?.*?\?>|<!DOCTYPE[^>]*>|<(?:[^<>"']|"[^"]*"|'[^']*')*>|[^<]+"#,
    )
    .expect("valid token pattern")
});

static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s=/<>"']+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid attribute pattern")
});

static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#x[0-9A-Fa-f]+|#[0-9]+|[A-Za-z][A-Za-z0-9]*);").expect("valid entity pattern"));

/// A parsed XML part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    /// Declarations and processing instructions before the root element
    pub prolog: Vec<String>,
    /// Root element
    pub root: Element,
}

impl XmlDocument {
    /// Wrap a root element with the standard UTF-8 declaration.
    pub fn new(root: Element) -> Self {
        Self {
            prolog: vec![r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string()],
            root,
        }
    }

    /// Parse an XML string.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        let mut prolog = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut position = 0;

        for token in TOKEN_RE.find_iter(input) {
            if token.start() != position {
                return Err(DocumentError::xml(position, "unexpected '<'"));
            }
            position = token.end();
            let raw = token.as_str();

            if raw.starts_with("<!--") {
                continue;
            }

            if raw.starts_with("<?") || raw.starts_with("<!DOCTYPE") {
                if stack.is_empty() && root.is_none() {
                    prolog.push(raw.to_string());
                }
                continue;
            }

            if let Some(data) = raw.strip_prefix("<![CDATA[") {
                let data = data.strip_suffix("]]>").unwrap_or(data);
                match stack.last_mut() {
                    Some(parent) => parent.push_text(data),
                    None => return Err(DocumentError::xml(token.start(), "character data outside root element")),
                }
                continue;
            }

            if let Some(name) = raw.strip_prefix("</") {
                let name = name.trim_end_matches('>').trim();
                let element = stack
                    .pop()
                    .ok_or_else(|| DocumentError::xml(token.start(), format!("unexpected closing tag </{}>", name)))?;
                if element.name != name {
                    return Err(DocumentError::xml(
                        token.start(),
                        format!("expected </{}>, found </{}>", element.name, name),
                    ));
                }
                attach(element, &mut stack, &mut root, token.start())?;
                continue;
            }

            if raw.starts_with('<') {
                let (element, self_closing) = parse_start_tag(raw, token.start())?;
                if self_closing {
                    attach(element, &mut stack, &mut root, token.start())?;
                } else {
                    if stack.is_empty() && root.is_some() {
                        return Err(DocumentError::xml(token.start(), "multiple root elements"));
                    }
                    stack.push(element);
                }
                continue;
            }

            match stack.last_mut() {
                Some(parent) => parent.push_text(&unescape(raw)),
                None if raw.trim().is_empty() => {}
                None => return Err(DocumentError::xml(token.start(), "character data outside root element")),
            }
        }

        if position != input.len() {
            return Err(DocumentError::xml(position, "unexpected '<'"));
        }
        if let Some(open) = stack.last() {
            return Err(DocumentError::xml(input.len(), format!("unclosed element <{}>", open.name)));
        }
        let root = root.ok_or_else(|| DocumentError::xml(input.len(), "no root element"))?;

        Ok(Self { prolog, root })
    }

    /// Serialize the document, prolog first.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        for item in &self.prolog {
            out.push_str(item);
            out.push('\n');
        }
        write_element(&self.root, &mut out);
        out
    }
}

fn attach(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
    position: usize,
) -> Result<(), DocumentError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(DocumentError::xml(position, "multiple root elements")),
    }
}

fn parse_start_tag(raw: &str, position: usize) -> Result<(Element, bool), DocumentError> {
    let inner = &raw[1..raw.len() - 1];
    let (inner, self_closing) = match inner.strip_suffix('/') {
        Some(stripped) => (stripped, true),
        None => (inner, false),
    };

    let name_end = inner.find(char::is_whitespace).unwrap_or(inner.len());
    let name = &inner[..name_end];
    if name.is_empty() {
        return Err(DocumentError::xml(position, "missing element name"));
    }

    let mut element = Element::new(name);
    for caps in ATTRIBUTE_RE.captures_iter(&inner[name_end..]) {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or_default();
        element.attributes.push((caps[1].to_string(), unescape(value)));
    }

    Ok((element, self_closing))
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
    }

    if element.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(child, out),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

/// Escape character data.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape an attribute value for double-quoted output.
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Decode predefined entities and character references.
///
/// Unknown entities and invalid references are left as written.
pub fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => {
                    if let Some(hex) = entity.strip_prefix("#x") {
                        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
                    } else if let Some(dec) = entity.strip_prefix('#') {
                        dec.parse::<u32>().ok().and_then(char::from_u32)
                    } else {
                        None
                    }
                }
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
