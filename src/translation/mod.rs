/*!
 * Dictionary-based translation of the user manual.
 *
 * - `phrase`: longest-first phrase substitution
 * - `dictionaries`: built-in Norwegian to English/Swedish tables
 * - `document`: applying a dictionary to document trees and ODT files
 */

// Re-export main types for easier usage
pub use self::dictionaries::TargetLanguage;
pub use self::document::{translate_odt, translate_tree, DictionaryVisitor, TranslationStats};
pub use self::phrase::{translate, PhraseDictionary};

// Submodules
pub mod dictionaries;
pub mod document;
pub mod phrase;
