// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use winupdate_docs::app_config::{self, Config};
use winupdate_docs::app_controller::{Controller, PdfOptions};
use winupdate_docs::file_utils::FileManager;
use winupdate_docs::TargetLanguage;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert the HTML changelog into an ODT document
    Changelog {
        /// HTML changelog to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// ODT file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the application logo as PNG
    Logo {
        /// PNG file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Edge length in pixels
        #[arg(short, long)]
        size: Option<u32>,
    },

    /// Add a wooden frame to the logo and save it as BMP
    FrameLogo {
        /// Image to frame
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// BMP file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Frame width in pixels
        #[arg(short, long)]
        width: Option<u32>,
    },

    /// Generate the Norwegian user manual
    Manual {
        /// ODT file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file replacing the built-in manual content
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Translate the Norwegian manual
    Translate(TranslateArgs),

    /// Export documents to PDF with LibreOffice
    Pdf(PdfArgs),

    /// Build every artifact: manual, translations, changelog, logos and PDFs
    All,

    /// Generate shell completions for winupdate-docs
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct TranslateArgs {
    /// Norwegian manual to translate
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Target language (en, sv); every configured language when omitted
    #[arg(short = 'L', long)]
    language: Option<TargetLanguage>,

    /// ODT file to write (requires --language)
    #[arg(short, long, requires = "language")]
    output: Option<PathBuf>,

    /// Dictionary JSON replacing the built-in one (requires --language)
    #[arg(short, long, requires = "language")]
    dictionary: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PdfArgs {
    /// Documents to convert; the configured list when omitted
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Convert every ODT file under this directory
    #[arg(short, long, conflicts_with = "files")]
    dir: Option<PathBuf>,

    /// Path to the soffice binary
    #[arg(long)]
    office: Option<PathBuf>,

    /// Conversion timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,
}

/// WinUpdate Docs - documentation toolkit for WinUpdate
///
/// Builds the user manual and its translations, the changelog document,
/// the logo assets and PDF exports.
#[derive(Parser, Debug)]
#[command(name = "winupdate-docs")]
#[command(version)]
#[command(about = "Documentation toolkit for WinUpdate")]
#[command(long_about = "Builds the WinUpdate user manual, its translations, the changelog document, logo assets and PDF exports.

EXAMPLES:
    winupdate-docs manual                        # Write WinUpdate_Brukermanual_NO.odt
    winupdate-docs translate                     # Write every configured translation
    winupdate-docs translate -L sv               # Swedish edition only
    winupdate-docs changelog -i Changelog.html   # Convert the changelog
    winupdate-docs logo --size 128               # Render a 128px logo
    winupdate-docs pdf --dir docs/               # Export every ODT file under docs/
    winupdate-docs all                           # Build everything
    winupdate-docs completions bash > winupdate-docs.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // Initialize the logger with trace so the max level alone decides
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: CommandLineOptions) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "winupdate-docs", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let mut config = load_config(&cli.config_path)?;
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Validate the configuration after loading and overriding
    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    match cli.command {
        Commands::Changelog { input, output } => {
            controller.generate_changelog(input, output)?;
        }
        Commands::Logo { output, size } => {
            controller.generate_logo(output, size)?;
        }
        Commands::FrameLogo { input, output, width } => {
            controller.frame_logo(input, output, width)?;
        }
        Commands::Manual { output, content } => {
            controller.generate_manual(output, content)?;
        }
        Commands::Translate(args) => match args.language {
            Some(language) => {
                controller.translate_manual(args.source, language, args.output, args.dictionary)?;
            }
            None => {
                controller.translate_all(args.source)?;
            }
        },
        Commands::Pdf(args) => {
            let options = PdfOptions {
                files: args.files,
                dir: args.dir,
                office_path: args.office,
                timeout_secs: args.timeout,
            };
            let requested = controller.pdf_inputs(&options)?.len();
            let converted = controller.export_pdfs(options).await?;
            if converted < requested {
                warn!("{} of {} document(s) were not converted", requested - converted, requested);
            }
        }
        Commands::All => {
            controller.run_all().await?;
            info!("✓ All documentation artifacts created");
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

// @loads: Config file, creating a default one when missing
fn load_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        Ok(config)
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        FileManager::write_to_file(config_path, &config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}
