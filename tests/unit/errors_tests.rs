/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use std::time::Duration;

use winupdate_docs::errors::{AppError, ConversionError, DictionaryError, DocumentError};

#[test]
fn test_documentError_xml_shouldDisplayPositionAndMessage() {
    let error = DocumentError::Xml {
        position: 42,
        message: "mismatched closing tag".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("42"));
    assert!(display.contains("mismatched closing tag"));
}

#[test]
fn test_documentError_missingPart_shouldNamePart() {
    let error = DocumentError::MissingPart("content.xml".to_string());
    assert!(format!("{}", error).contains("content.xml"));
}

#[test]
fn test_conversionError_failed_shouldDisplayStatusAndStderr() {
    let error = ConversionError::Failed {
        status: "exit status: 81".to_string(),
        stderr: "source file could not be loaded".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("exit status: 81"));
    assert!(display.contains("source file could not be loaded"));
}

#[test]
fn test_conversionError_timeout_shouldDisplayDuration() {
    let error = ConversionError::Timeout(Duration::from_secs(60));
    assert!(format!("{}", error).contains("60s"));
}

#[test]
fn test_appError_fromDocumentError_shouldWrapCorrectly() {
    let error: AppError = DocumentError::MissingPart("styles.xml".to_string()).into();
    match error {
        AppError::Document(DocumentError::MissingPart(part)) => assert_eq!(part, "styles.xml"),
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_appError_fromConversionError_shouldWrapCorrectly() {
    let error: AppError = ConversionError::NoOutput(PathBuf::from("manual.pdf")).into();
    assert!(matches!(error, AppError::Conversion(ConversionError::NoOutput(_))));
    assert!(format!("{}", error).contains("manual.pdf"));
}

#[test]
fn test_appError_fromDictionaryError_shouldKeepParseDetails() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = DictionaryError::from(parse_error).into();
    assert!(format!("{}", error).contains("Invalid dictionary JSON"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(error, AppError::Unknown(ref msg) if msg == "something odd"));
}
