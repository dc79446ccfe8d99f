/*!
 * OpenDocument Text support.
 *
 * - `tree`: element/text node model and visitor
 * - `xml`: reading and writing XML parts
 * - `styles`: named paragraph and text styles
 * - `text_document`: builder for new documents
 * - `package`: the zip container
 */

pub mod package;
pub mod styles;
pub mod text_document;
pub mod tree;
pub mod xml;

pub use package::OdtPackage;
pub use styles::{ParagraphProperties, Style, StyleFamily, TextProperties};
pub use text_document::TextDocument;
pub use tree::{Element, Node, NodeVisitor};
pub use xml::XmlDocument;
