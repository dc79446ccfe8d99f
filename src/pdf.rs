/*!
 * PDF export of ODT documents through LibreOffice.
 *
 * The renderer seam is a trait so that batches can be driven by something
 * other than a real office installation.
 */

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use tokio::process::Command;

use crate::errors::ConversionError;

/// Default LibreOffice binary on Windows
pub const DEFAULT_OFFICE_PATH: &str = r"C:\Program Files\LibreOffice\program\soffice.exe";

/// Default conversion timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default pause between conversions in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Converts a document into PDF
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Convert `source` and write the PDF into `out_dir`.
    ///
    /// # Returns
    /// * `Result<PathBuf, ConversionError>` - path of the generated PDF
    async fn render(&self, source: &Path, out_dir: &Path) -> Result<PathBuf, ConversionError>;
}

/// PDF path produced for `source` in `out_dir`.
pub fn pdf_path_for(source: &Path, out_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("document"));
    out_dir.join(format!("{}.pdf", stem))
}

/// Headless LibreOffice (`soffice`) renderer
#[derive(Debug, Clone)]
pub struct LibreOfficeRenderer {
    office_path: PathBuf,
    timeout: Duration,
}

impl Default for LibreOfficeRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_OFFICE_PATH, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl LibreOfficeRenderer {
    pub fn new<P: Into<PathBuf>>(office_path: P, timeout: Duration) -> Self {
        Self {
            office_path: office_path.into(),
            timeout,
        }
    }

    pub fn office_path(&self) -> &Path {
        &self.office_path
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Command-line arguments passed to soffice
    pub fn arguments(source: &Path, out_dir: &Path) -> Vec<String> {
        vec![
            "--headless".to_string(),
            "--convert-to".to_string(),
            "pdf".to_string(),
            "--outdir".to_string(),
            out_dir.to_string_lossy().to_string(),
            source.to_string_lossy().to_string(),
        ]
    }

    fn spinner(source: &Path) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(format!("Converting {}", source.display()));
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }
}

#[async_trait]
impl PdfRenderer for LibreOfficeRenderer {
    async fn render(&self, source: &Path, out_dir: &Path) -> Result<PathBuf, ConversionError> {
        if !source.exists() {
            return Err(ConversionError::SourceNotFound(source.to_path_buf()));
        }
        if !self.office_path.exists() {
            return Err(ConversionError::OfficeNotFound(self.office_path.clone()));
        }

        let args = Self::arguments(source, out_dir);
        debug!("Running {:?} {}", self.office_path, args.join(" "));

        let output_future = Command::new(&self.office_path)
            .args(&args)
            .kill_on_drop(true)
            .output();

        let spinner = Self::spinner(source);
        let result = tokio::time::timeout(self.timeout, output_future).await;
        spinner.finish_and_clear();

        // Dropping the timed-out future kills the child
        let output = match result {
            Ok(output) => output?,
            Err(_) => return Err(ConversionError::Timeout(self.timeout)),
        };

        if !output.status.success() {
            return Err(ConversionError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let pdf = pdf_path_for(source, out_dir);
        if !pdf.exists() {
            return Err(ConversionError::NoOutput(pdf));
        }
        Ok(pdf)
    }
}

/// Convert `files` one after another, pausing `delay` between them.
///
/// A failing file is logged and skipped. Returns the number of PDFs created.
pub async fn convert_all<R: PdfRenderer + ?Sized>(
    renderer: &R,
    files: &[PathBuf],
    out_dir: &Path,
    delay: Duration,
) -> usize {
    let mut converted = 0;

    for (index, file) in files.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        info!("Converting {}...", file.display());
        match renderer.render(file, out_dir).await {
            Ok(pdf) => {
                info!("✓ Created {}", pdf.display());
                converted += 1;
            }
            Err(ConversionError::SourceNotFound(path)) => {
                warn!("✗ File not found: {}", path.display());
            }
            Err(e) => {
                error!("✗ Failed to convert {}: {}", file.display(), e);
            }
        }
    }

    info!("Converted {}/{} files to PDF", converted, files.len());
    converted
}
