/*!
 * # WinUpdate Docs - documentation toolkit for WinUpdate
 *
 * A Rust library that builds the documentation artifacts shipped with the
 * WinUpdate application.
 *
 * ## Features
 *
 * - Generate the Norwegian user manual as an OpenDocument Text file
 * - Translate the manual into UK English and Swedish with phrase dictionaries
 * - Convert the HTML changelog into a styled ODT document
 * - Render the application logo (PNG) and a wood-framed variant (BMP)
 * - Export documents to PDF through headless LibreOffice
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: ODT documents:
 *   - `document::tree`: Element/text tree and its visitor
 *   - `document::xml`: XML reading and writing
 *   - `document::package`: The zip container
 *   - `document::styles`: Paragraph and text styles
 *   - `document::text_document`: Building documents from headings and paragraphs
 * - `translation`: Phrase dictionaries and document translation
 * - `changelog`: HTML changelog conversion
 * - `manual`: User manual content and generation
 * - `logo`: Logo rendering and framing
 * - `pdf`: PDF export
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod changelog;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod logo;
pub mod manual;
pub mod pdf;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document::{OdtPackage, TextDocument};
pub use errors::{AppError, AssetError, ConversionError, DictionaryError, DocumentError};
pub use translation::{translate, PhraseDictionary, TargetLanguage};
