/*!
 * Integration tests for changelog conversion
 */

use anyhow::Result;
use winupdate_docs::app_controller::Controller;
use winupdate_docs::changelog::{convert_html_to_odt, HEADING_STYLE};
use winupdate_docs::OdtPackage;

use crate::common;

/// Convert a changelog file and check the written document
#[test]
fn test_convert_html_to_odt_withChangelog_shouldWriteBlocksInOrder() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let html = common::create_test_changelog(temp_dir.path(), "Changelog.html")?;
    let odt = temp_dir.path().join("Changelog.odt");

    convert_html_to_odt(&html, &odt)?;

    let content = OdtPackage::open(&odt)?.content()?;
    let body = content.root.find("office:text").expect("office:text body");
    let texts: Vec<String> = body.child_elements().map(|e| e.text_content()).collect();

    assert_eq!(
        texts,
        vec![
            "Versjon 2026.01.19",
            "Denne versjonen inneholder:",
            "• Systemstatusikon med periodisk skanning",
            "• Flerspråklig støtte",
            "",
            "Versjon 2025.12.01",
            "Første utgivelse.",
        ]
    );

    let headings: Vec<_> = body.child_elements().filter(|e| e.name == "text:h").collect();
    assert_eq!(headings.len(), 2);
    assert!(headings.iter().all(|h| h.attribute("text:style-name") == Some(HEADING_STYLE)));
    Ok(())
}

/// The controller resolves the configured changelog paths
#[test]
fn test_generate_changelog_withConfiguredPaths_shouldWriteOdt() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    common::create_test_changelog(temp_dir.path(), "Changelog.html")?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;

    let output = controller.generate_changelog(None, None)?;

    assert_eq!(output, temp_dir.path().join("Changelog.odt"));
    let package = OdtPackage::open(&output)?;
    let styles = package.xml_part("styles.xml")?;
    let style_names: Vec<&str> = styles
        .root
        .find("office:styles")
        .expect("office:styles")
        .child_elements()
        .filter_map(|s| s.attribute("style:name"))
        .collect();
    assert_eq!(style_names, vec![HEADING_STYLE, "Bold", "Normal"]);
    Ok(())
}

/// A missing changelog reports the file it tried to read
#[test]
fn test_convert_html_to_odt_withMissingInput_shouldNameFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("Missing.html");

    let err = convert_html_to_odt(&missing, temp_dir.path().join("Changelog.odt")).unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("Failed to read file"), "{}", message);
    assert!(message.contains("Missing.html"), "{}", message);
    Ok(())
}
