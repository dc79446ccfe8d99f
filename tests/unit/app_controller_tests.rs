/*!
 * Tests for the application controller
 */

use std::time::Duration;

use anyhow::Result;
use winupdate_docs::app_config::Config;
use winupdate_docs::app_controller::Controller;
use winupdate_docs::errors::{AppError, DictionaryError, DocumentError};
use winupdate_docs::TargetLanguage;

use crate::common;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert_eq!(controller.config().logo.size, 96);
    Ok(())
}

/// Test that an invalid configuration is rejected up front
#[test]
fn test_controller_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.logo.frame_width = 0;
    assert!(Controller::with_config(config).is_err());
}

/// Test that relative outputs land in the configured output directory
#[test]
fn test_generate_manual_withDefaults_shouldWriteIntoOutputDir() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;

    let output = controller.generate_manual(None, None)?;

    assert_eq!(output, temp_dir.path().join("WinUpdate_Brukermanual_NO.odt"));
    assert!(output.exists());
    Ok(())
}

/// Test manual generation from a custom content file
#[test]
fn test_generate_manual_withContentFile_shouldUseIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;
    let content = common::create_test_file(
        temp_dir.path(),
        "content.json",
        r#"[{"kind": "heading", "level": 1, "style": "heading1", "text": "1. Innledning"}]"#,
    )?;

    let output = controller.generate_manual(Some(temp_dir.path().join("short.odt")), Some(content))?;

    let package = winupdate_docs::OdtPackage::open(&output)?;
    let body_text = package.content()?.root.find("office:text").unwrap().text_content();
    assert_eq!(body_text, "1. Innledning");
    Ok(())
}

/// Test that translating without a source manual fails cleanly
#[test]
fn test_translate_manual_withMissingSource_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;

    let result = controller.translate_manual(None, TargetLanguage::English, None, None);

    assert!(result.is_err());
    assert!(!temp_dir.path().join("WinUpdate_User_Manual_UK.odt").exists());
    Ok(())
}

/// Test changelog conversion with a missing input file
#[test]
fn test_generate_changelog_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;
    assert!(controller.generate_changelog(None, None).is_err());
    Ok(())
}

/// Test logo and frame generation through the controller
#[test]
fn test_generate_logo_thenFrame_shouldWriteBothAssets() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;

    let png = controller.generate_logo(None, Some(64))?;
    let bmp = controller.frame_logo(Some(png.clone()), None, None)?;

    assert_eq!(png, temp_dir.path().join("winupdate_logo.png"));
    assert_eq!(bmp, temp_dir.path().join("GnuLogo.bmp"));
    let framed = image::open(&bmp)?;
    assert_eq!((framed.width(), framed.height()), (74, 74));
    Ok(())
}

/// Test that the default logo does not overwrite the image that gets framed
#[test]
fn test_generate_logo_withDefaults_shouldNotTouchFrameInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;
    let gnu_logo = temp_dir.path().join("GnuLogo.png");
    image::RgbImage::from_pixel(40, 40, image::Rgb([10, 20, 30])).save(&gnu_logo)?;
    let before = std::fs::read(&gnu_logo)?;

    let png = controller.generate_logo(None, None)?;
    let bmp = controller.frame_logo(None, None, None)?;

    assert_ne!(png, gnu_logo);
    assert_eq!(std::fs::read(&gnu_logo)?, before);
    let framed = image::open(&bmp)?.to_rgb8();
    assert_eq!(framed.dimensions(), (50, 50));
    assert_eq!(*framed.get_pixel(25, 25), image::Rgb([10, 20, 30]));
    Ok(())
}

/// Test that an unreadable content file names the path
#[test]
fn test_generate_manual_withMissingContentFile_shouldNameFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;

    let err = controller
        .generate_manual(None, Some(temp_dir.path().join("absent.json")))
        .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("Failed to read file"), "{}", message);
    assert!(message.contains("absent.json"), "{}", message);
    Ok(())
}

/// Test that controller failures convert back into the typed error
#[test]
fn test_translate_manual_withCorruptSource_shouldSurfaceDocumentError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;
    let source = common::create_test_file(temp_dir.path(), "broken.odt", "not a zip archive")?;

    let err = controller
        .translate_manual(Some(source), TargetLanguage::English, None, None)
        .unwrap_err();

    assert!(matches!(AppError::from(err), AppError::Document(DocumentError::Zip(_))));
    Ok(())
}

/// Test that a bad dictionary file surfaces as a dictionary error
#[test]
fn test_load_dictionary_withInvalidJson_shouldSurfaceDictionaryError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;
    let dictionary = common::create_test_file(temp_dir.path(), "bad.json", "{ not json")?;

    let err = controller
        .load_dictionary(TargetLanguage::Swedish, Some(dictionary))
        .unwrap_err();

    assert!(matches!(AppError::from(err), AppError::Dictionary(_)));
    Ok(())
}

/// Test that a full run keeps an existing GNU logo byte for byte
#[tokio::test]
async fn test_run_all_withExistingGnuLogo_shouldLeaveItUnchanged() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::config_in(temp_dir.path());
    config.pdf.office_path = temp_dir.path().join("missing-soffice").to_string_lossy().to_string();
    config.pdf.delay_ms = 0;
    let controller = Controller::with_config(config)?;

    let gnu_logo = temp_dir.path().join("GnuLogo.png");
    image::RgbImage::from_pixel(48, 48, image::Rgb([200, 0, 0])).save(&gnu_logo)?;
    let before = std::fs::read(&gnu_logo)?;

    controller.run_all().await?;

    assert_eq!(std::fs::read(&gnu_logo)?, before);
    assert!(temp_dir.path().join("winupdate_logo.png").exists());
    let framed = image::open(temp_dir.path().join("GnuLogo.bmp"))?.to_rgb8();
    assert_eq!(*framed.get_pixel(29, 29), image::Rgb([200, 0, 0]));
    Ok(())
}

/// Test that a full run without a GNU logo skips the frame instead of failing
#[tokio::test]
async fn test_run_all_withoutGnuLogo_shouldSkipFrame() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::config_in(temp_dir.path());
    config.pdf.office_path = temp_dir.path().join("missing-soffice").to_string_lossy().to_string();
    config.pdf.delay_ms = 0;
    let controller = Controller::with_config(config)?;

    controller.run_all().await?;

    assert!(temp_dir.path().join("winupdate_logo.png").exists());
    assert!(!temp_dir.path().join("GnuLogo.bmp").exists());
    Ok(())
}

/// Test duration formatting
#[test]
fn test_format_duration_withVariousDurations_shouldBeReadable() {
    assert_eq!(Controller::format_duration(Duration::from_millis(1500)), "1.500s");
    assert_eq!(Controller::format_duration(Duration::from_secs(125)), "2m 5s");
    assert_eq!(Controller::format_duration(Duration::from_secs(3725)), "1h 2m 5s");
}
