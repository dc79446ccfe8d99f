/*!
 * Phrase translation of document trees and ODT files.
 */

use std::path::Path;

use log::{debug, info};

use crate::document::tree::{Element, NodeVisitor};
use crate::document::OdtPackage;
use crate::errors::DocumentError;
use crate::translation::phrase::{translate, PhraseDictionary};

/// Counters reported after translating a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationStats {
    /// Text nodes visited
    pub text_nodes: usize,
    /// Text nodes whose content changed
    pub changed_nodes: usize,
}

/// Visitor that rewrites every text node through a phrase dictionary.
pub struct DictionaryVisitor<'a> {
    dictionary: &'a PhraseDictionary,
    stats: TranslationStats,
}

impl<'a> DictionaryVisitor<'a> {
    pub fn new(dictionary: &'a PhraseDictionary) -> Self {
        Self {
            dictionary,
            stats: TranslationStats::default(),
        }
    }

    pub fn stats(&self) -> TranslationStats {
        self.stats
    }
}

impl NodeVisitor for DictionaryVisitor<'_> {
    fn visit_text(&mut self, text: &mut String) {
        self.stats.text_nodes += 1;
        if text.is_empty() {
            return;
        }
        let translated = translate(text, self.dictionary);
        if translated != *text {
            *text = translated;
            self.stats.changed_nodes += 1;
        }
    }
}

/// Translate every text node under `root` in place.
pub fn translate_tree(root: &mut Element, dictionary: &PhraseDictionary) -> TranslationStats {
    let mut visitor = DictionaryVisitor::new(dictionary);
    root.accept(&mut visitor);
    visitor.stats()
}

/// Translate the body text of an ODT file and write the result to `target`.
///
/// Only the `office:text` body is translated; styles and metadata parts are
/// copied unchanged.
pub fn translate_odt<P1: AsRef<Path>, P2: AsRef<Path>>(
    source: P1,
    target: P2,
    dictionary: &PhraseDictionary,
    language_name: &str,
) -> Result<TranslationStats, DocumentError> {
    let source = source.as_ref();
    let target = target.as_ref();

    info!("Loading {}...", source.display());
    let mut package = OdtPackage::open(source)?;
    let mut content = package.content()?;

    info!("Creating {} translation...", language_name);
    let stats = match content.root.find_mut("office:text") {
        Some(body) => translate_tree(body, dictionary),
        None => {
            debug!("No office:text body in {:?}, translating whole content", source);
            translate_tree(&mut content.root, dictionary)
        }
    };
    debug!(
        "Translated {} of {} text nodes",
        stats.changed_nodes, stats.text_nodes
    );

    package.set_content(&content);
    package.save(target)?;
    info!("✓ Created {}", target.display());

    Ok(stats)
}
