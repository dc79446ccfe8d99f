/*!
 * Tests for phrase dictionaries and built-in manual translations
 */

use std::str::FromStr;

use anyhow::Result;
use winupdate_docs::translation::{translate, translate_tree, PhraseDictionary, TargetLanguage};
use winupdate_docs::document::Element;

use crate::common;

#[test]
fn test_builtinDictionary_english_shouldTranslateManualHeadings() -> Result<()> {
    let dictionary = TargetLanguage::English.builtin_dictionary()?;

    assert_eq!(translate("1. Innledning", &dictionary), "1. Introduction");
    assert_eq!(translate("1.1 Hovedfunksjoner", &dictionary), "1.1 Key Features");
    assert_eq!(translate("2. Komme i gang", &dictionary), "2. Getting Started");
    assert_eq!(
        translate("Sist oppdatert: 19. januar 2026", &dictionary),
        "Last updated: 19. January 2026"
    );
    Ok(())
}

#[test]
fn test_builtinDictionary_swedish_shouldTranslateManualHeadings() -> Result<()> {
    let dictionary = TargetLanguage::Swedish.builtin_dictionary()?;

    assert_eq!(translate("Brukermanual", &dictionary), "Användarmanual");
    assert_eq!(translate("1. Innledning", &dictionary), "1. Inledning");
    assert_eq!(
        translate("Sist oppdatert: 19. januar 2026", &dictionary),
        "Senast uppdaterad: 19. januari 2026"
    );
    Ok(())
}

#[test]
fn test_builtinDictionaries_shouldHaveSameKeys() -> Result<()> {
    let english = TargetLanguage::English.builtin_dictionary()?;
    let swedish = TargetLanguage::Swedish.builtin_dictionary()?;

    assert!(english.len() > 250);
    assert_eq!(english.len(), swedish.len());
    for (key, _) in english.iter() {
        assert!(swedish.get(key).is_some(), "Swedish dictionary lacks {:?}", key);
    }
    Ok(())
}

#[test]
fn test_targetLanguage_fromStr_withAliases_shouldParse() {
    assert_eq!(TargetLanguage::from_str("EN").unwrap(), TargetLanguage::English);
    assert_eq!(TargetLanguage::from_str("uk").unwrap(), TargetLanguage::English);
    assert_eq!(TargetLanguage::from_str("sv-SE").unwrap(), TargetLanguage::Swedish);
    assert!(TargetLanguage::from_str("de").is_err());
}

#[test]
fn test_fromJsonFile_withCustomDictionary_shouldLoadPairs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "dictionary.json",
        r#"{"Innstillinger": "Settings", "Innstillinger-vinduet": "Settings window"}"#,
    )?;

    let dictionary = PhraseDictionary::from_json_file(&path)?;

    assert_eq!(dictionary.len(), 2);
    assert_eq!(translate("Åpne Innstillinger-vinduet", &dictionary), "Åpne Settings window");
    Ok(())
}

#[test]
fn test_fromJsonFile_withMissingFile_shouldFail() {
    assert!(PhraseDictionary::from_json_file("/nonexistent/dictionary.json").is_err());
}

#[test]
fn test_translateTree_withBuiltinDictionary_shouldLeaveMarkupAlone() -> Result<()> {
    let dictionary = TargetLanguage::English.builtin_dictionary()?;
    let mut body = Element::new("office:text")
        .with_child(
            Element::new("text:h")
                .with_attribute("text:style-name", "Heading1")
                .with_attribute("text:outline-level", "1")
                .with_child("1. Innledning"),
        )
        .with_child(Element::new("text:p").with_attribute("text:style-name", "Normal"));

    let stats = translate_tree(&mut body, &dictionary);

    let heading = body.find("text:h").unwrap();
    assert_eq!(heading.text_content(), "1. Introduction");
    assert_eq!(heading.attribute("text:style-name"), Some("Heading1"));
    assert_eq!(stats.changed_nodes, 1);
    Ok(())
}

#[test]
fn test_fromJsonFile_withBundledResource_shouldMatchBuiltin() -> Result<()> {
    let from_file = PhraseDictionary::from_json_file(common::resource_path("dictionaries/no_sv.json"))?;
    assert_eq!(from_file, TargetLanguage::Swedish.builtin_dictionary()?);
    Ok(())
}
