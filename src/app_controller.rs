use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::changelog;
use crate::file_utils::FileManager;
use crate::logo;
use crate::manual::{self, ManualBlock};
use crate::pdf::{self, LibreOfficeRenderer, PdfRenderer};
use crate::translation::{translate_odt, PhraseDictionary, TargetLanguage};

// @module: Application controller for documentation generation

/// Options for the PDF export command
#[derive(Debug, Clone, Default)]
pub struct PdfOptions {
    // @field: Documents to convert; configured list when empty
    pub files: Vec<PathBuf>,
    // @field: Directory scanned for ODT files instead of `files`
    pub dir: Option<PathBuf>,
    // @field: soffice binary override
    pub office_path: Option<PathBuf>,
    // @field: Timeout override in seconds
    pub timeout_secs: Option<u64>,
}

/// Main application controller for building the WinUpdate documentation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn resolve(&self, path: Option<PathBuf>, configured: &str) -> PathBuf {
        match path {
            Some(path) => path,
            None => self.config.output_path(configured),
        }
    }

    /// Convert the HTML changelog into an ODT document
    pub fn generate_changelog(&self, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<PathBuf> {
        let input = self.resolve(input, &self.config.changelog.input);
        let output = self.resolve(output, &self.config.changelog.output);

        if !FileManager::file_exists(&input) {
            return Err(anyhow!("Changelog not found: {:?}", input));
        }
        FileManager::ensure_parent(&output)?;

        changelog::convert_html_to_odt(&input, &output)?;
        Ok(output)
    }

    /// Render the PNG logo
    pub fn generate_logo(&self, output: Option<PathBuf>, size: Option<u32>) -> Result<PathBuf> {
        let output = self.resolve(output, &self.config.logo.output);
        let size = size.unwrap_or(self.config.logo.size);

        FileManager::ensure_parent(&output)?;
        logo::create_logo_png(&output, size)
            .with_context(|| format!("Failed to create logo: {:?}", output))?;
        Ok(output)
    }

    /// Add the wooden frame to an image and save it as BMP
    pub fn frame_logo(&self, input: Option<PathBuf>, output: Option<PathBuf>, width: Option<u32>) -> Result<PathBuf> {
        let input = self.resolve(input, &self.config.logo.frame_input);
        let output = self.resolve(output, &self.config.logo.frame_output);
        let width = width.unwrap_or(self.config.logo.frame_width);

        if !FileManager::file_exists(&input) {
            return Err(anyhow!("Image not found: {:?}", input));
        }
        FileManager::ensure_parent(&output)?;

        logo::frame_logo(&input, &output, width)
            .with_context(|| format!("Failed to frame {:?}", input))?;
        Ok(output)
    }

    fn manual_content(&self, content: Option<PathBuf>) -> Result<Vec<ManualBlock>> {
        let content = content.or_else(|| self.config.manual.content.as_ref().map(PathBuf::from));
        match content {
            Some(path) => {
                info!("Using manual content from {}", path.display());
                manual::load_content(path)
            }
            None => manual::builtin_content(),
        }
    }

    /// Generate the Norwegian user manual
    pub fn generate_manual(&self, output: Option<PathBuf>, content: Option<PathBuf>) -> Result<PathBuf> {
        let output = self.resolve(output, &self.config.manual.output);
        let blocks = self.manual_content(content)?;

        FileManager::ensure_parent(&output)?;
        manual::create_manual(&output, &blocks)?;
        Ok(output)
    }

    /// Load the dictionary for a language, preferring an explicit file
    pub fn load_dictionary(&self, language: TargetLanguage, dictionary: Option<PathBuf>) -> Result<PhraseDictionary> {
        let dictionary = dictionary.or_else(|| {
            self.config
                .manual
                .translation_for(language)
                .dictionary
                .map(PathBuf::from)
        });

        match dictionary {
            Some(path) => PhraseDictionary::from_json_file(&path)
                .with_context(|| format!("Failed to load dictionary: {:?}", path)),
            None => language
                .builtin_dictionary()
                .with_context(|| format!("Built-in {} dictionary is invalid", language.display_name())),
        }
    }

    /// Translate the manual into one language
    pub fn translate_manual(
        &self,
        source: Option<PathBuf>,
        language: TargetLanguage,
        output: Option<PathBuf>,
        dictionary: Option<PathBuf>,
    ) -> Result<PathBuf> {
        let source = self.resolve(source, &self.config.manual.output);
        let target = self.config.manual.translation_for(language);
        let output = self.resolve(output, &target.output);

        if !FileManager::file_exists(&source) {
            return Err(anyhow!("Source manual not found: {:?}", source));
        }
        let dictionary = self.load_dictionary(language, dictionary)?;

        FileManager::ensure_parent(&output)?;
        translate_odt(&source, &output, &dictionary, language.display_name())
            .with_context(|| format!("Failed to translate {:?}", source))?;
        Ok(output)
    }

    /// Produce every configured translation of the manual
    pub fn translate_all(&self, source: Option<PathBuf>) -> Result<Vec<PathBuf>> {
        let mut outputs = Vec::new();
        for target in &self.config.manual.translations {
            outputs.push(self.translate_manual(source.clone(), target.language, None, None)?);
        }
        info!("✓ All translations created successfully!");
        Ok(outputs)
    }

    /// Collect the documents a PDF export should convert
    pub fn pdf_inputs(&self, options: &PdfOptions) -> Result<Vec<PathBuf>> {
        if let Some(dir) = &options.dir {
            if !FileManager::dir_exists(dir) {
                return Err(anyhow!("Directory not found: {:?}", dir));
            }
            return FileManager::find_files(dir, "odt");
        }
        if !options.files.is_empty() {
            return Ok(options.files.clone());
        }
        Ok(self
            .config
            .pdf
            .files
            .iter()
            .map(|f| self.config.output_path(f))
            .collect())
    }

    /// Export documents to PDF with LibreOffice
    pub async fn export_pdfs(&self, options: PdfOptions) -> Result<usize> {
        let office_path = options
            .office_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.pdf.office_path));
        let timeout = options
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| self.config.pdf.timeout());

        if !FileManager::file_exists(&office_path) {
            warn!("LibreOffice not found at {}", office_path.display());
        }

        let renderer = LibreOfficeRenderer::new(office_path, timeout);
        let files = self.pdf_inputs(&options)?;
        self.export_pdfs_with(&renderer, &files).await
    }

    /// Export documents to PDF with the given renderer
    pub async fn export_pdfs_with<R: PdfRenderer + ?Sized>(&self, renderer: &R, files: &[PathBuf]) -> Result<usize> {
        let out_dir = PathBuf::from(&self.config.output_dir);
        FileManager::ensure_dir(&out_dir)?;

        info!("Converting {} document(s) to PDF...", files.len());
        Ok(pdf::convert_all(renderer, files, &out_dir, self.config.pdf.delay()).await)
    }

    /// Build every artifact: manual, translations, changelog, logos and PDFs
    pub async fn run_all(&self) -> Result<()> {
        let start_time = Instant::now();
        FileManager::ensure_dir(&self.config.output_dir)?;

        let manual = self.generate_manual(None, None)?;
        self.translate_all(Some(manual))?;

        let changelog_input = self.config.output_path(&self.config.changelog.input);
        if FileManager::file_exists(&changelog_input) {
            self.generate_changelog(Some(changelog_input), None)?;
        } else {
            warn!("Skipping changelog, {} not found", changelog_input.display());
        }

        self.generate_logo(None, None)?;

        let frame_input = self.config.output_path(&self.config.logo.frame_input);
        if FileManager::file_exists(&frame_input) {
            self.frame_logo(Some(frame_input), None, None)?;
        } else {
            warn!("Skipping logo frame, {} not found", frame_input.display());
        }

        let converted = self.export_pdfs(PdfOptions::default()).await?;
        info!(
            "Done in {} ({} PDF(s))",
            Self::format_duration(start_time.elapsed()),
            converted
        );
        Ok(())
    }

    // Format duration in a human-readable format (HH:MM:SS)
    pub fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}

