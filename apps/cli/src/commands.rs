//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use scriptforge_classify::{Classification, ClassificationInput, classify, classify_snippet};
use scriptforge_document::{DocumentMeta, build_document};
use scriptforge_export::{ExportFormat, write_export};
use scriptforge_providers::{all, build_prompt, default_provider, find};
use scriptforge_shared::{
    AppConfig, ScriptRequest, init_config, load_config, resolve_output_dir, youtube_api_key,
};
use scriptforge_youtube::{YoutubeClient, YoutubeOptions, parse_video_id};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// ScriptForge — YouTube script request tooling.
#[derive(Parser)]
#[command(
    name = "scriptforge",
    version,
    about = "Classify content niches, analyze videos, and export YouTube scripts.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Export file format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum FormatArg {
    Md,
    Txt,
    Json,
}

impl FormatArg {
    fn to_format(&self) -> ExportFormat {
        match self {
            FormatArg::Md => ExportFormat::Markdown,
            FormatArg::Txt => ExportFormat::Text,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Analyze a YouTube video and suggest niche fields for it.
    Analyze {
        /// Video link (watch, youtu.be, or Shorts URL).
        url: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Classify text into a content niche.
    Classify {
        /// Text to classify (a topic, title, or description).
        text: String,

        /// Video tag to include in the match (repeatable).
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build an AI provider prompt from script parameters.
    Prompt(PromptArgs),

    /// Convert a generated script into a formatted document and write it.
    Export {
        /// Path to the script text file.
        script: PathBuf,

        /// Video title for the document header and file name.
        #[arg(long, default_value = "")]
        title: String,

        /// Duration shown in the document header.
        #[arg(long, default_value = "")]
        duration: String,

        /// Style shown in the document header.
        #[arg(long, default_value = "")]
        style: String,

        /// Provider id for the "Generated by" line (defaults to config).
        #[arg(long)]
        provider: Option<String>,

        /// Output format.
        #[arg(long, default_value = "md")]
        format: FormatArg,

        /// Output directory (defaults to the configured export directory).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the supported AI providers.
    Providers {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Flags for the `prompt` command, mirroring a full script request.
#[derive(clap::Args)]
pub(crate) struct PromptArgs {
    /// Video topic.
    #[arg(long)]
    pub topic: String,

    /// Target duration (e.g. "10-15 minutes").
    #[arg(long)]
    pub duration: String,

    /// Script style (e.g. "Educational", "Storytelling").
    #[arg(long)]
    pub style: String,

    /// Comma-separated style keywords.
    #[arg(long, default_value = "")]
    pub style_keywords: String,

    /// Script language (defaults to the configured language).
    #[arg(long)]
    pub language: Option<String>,

    /// Target audience description.
    #[arg(long, default_value = "")]
    pub audience: String,

    /// Extra instructions appended to the prompt.
    #[arg(long, default_value = "")]
    pub additional_info: String,

    /// Number of main points the script must cover.
    #[arg(long)]
    pub characteristics: Option<u32>,

    /// Address an advanced audience, skipping beginner explanations.
    #[arg(long)]
    pub qualified: bool,

    /// Analyze this video link first to pre-fill the niche fields.
    #[arg(long)]
    pub analyze: Option<String>,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // One directive per workspace crate; third-party crates stay at warn.
    let crates = [
        "cli",
        "shared",
        "classify",
        "document",
        "providers",
        "youtube",
        "export",
    ];
    let mut directives = String::from("warn");
    for krate in crates {
        directives.push_str(&format!(",scriptforge_{krate}={level}"));
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze { url, json } => cmd_analyze(&url, json).await,
        Command::Classify { text, tags, json } => cmd_classify(&text, &tags, json).await,
        Command::Prompt(args) => cmd_prompt(args).await,
        Command::Export {
            script,
            title,
            duration,
            style,
            provider,
            format,
            out,
        } => {
            cmd_export(
                &script,
                &title,
                &duration,
                &style,
                provider.as_deref(),
                format.to_format(),
                out.as_deref(),
            )
            .await
        }
        Command::Providers { json } => cmd_providers(json).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_analyze(url: &str, json: bool) -> Result<()> {
    let config = load_config()?;
    let api_key = youtube_api_key(&config)?;

    let video_id =
        parse_video_id(url).ok_or_else(|| eyre!("could not extract a video id from '{url}'"))?;

    info!(video_id = %video_id, "analyzing video");

    let client = YoutubeClient::new(api_key, &YoutubeOptions::default())?;

    let spinner = CliProgress::start("Fetching video data");
    let snippet = client.fetch_snippet(&video_id).await;
    spinner.finish();
    let snippet = snippet?;

    let classification = classify_snippet(&snippet);

    if json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    println!();
    println!("  Video:      {}", snippet.title);
    print_classification(&classification);
    println!();

    Ok(())
}

async fn cmd_classify(text: &str, tags: &[String], json: bool) -> Result<()> {
    let input = ClassificationInput {
        text: text.to_string(),
        tags: tags.to_vec(),
    };
    let classification = classify(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    println!();
    print_classification(&classification);
    println!();

    Ok(())
}

async fn cmd_prompt(args: PromptArgs) -> Result<()> {
    let config = load_config()?;

    let mut request = ScriptRequest {
        topic: args.topic,
        duration: args.duration,
        style: args.style,
        style_keywords: args.style_keywords,
        language: args
            .language
            .unwrap_or_else(|| config.defaults.language.clone()),
        audience: args.audience,
        additional_info: args.additional_info,
        qualified: args.qualified,
        ..ScriptRequest::default()
    };
    if let Some(n) = args.characteristics {
        request.characteristics = n;
    }

    if let Some(link) = &args.analyze {
        let api_key = youtube_api_key(&config)?;
        let video_id = parse_video_id(link)
            .ok_or_else(|| eyre!("could not extract a video id from '{link}'"))?;
        let client = YoutubeClient::new(api_key, &YoutubeOptions::default())?;

        let spinner = CliProgress::start("Analyzing video");
        let snippet = client.fetch_snippet(&video_id).await;
        spinner.finish();

        classify_snippet(&snippet?).apply_to(&mut request);
    }

    let prompt = build_prompt(&request)?;
    println!("{prompt}");

    Ok(())
}

async fn cmd_export(
    script: &Path,
    title: &str,
    duration: &str,
    style: &str,
    provider_id: Option<&str>,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<()> {
    let config = load_config()?;

    let raw_script = std::fs::read_to_string(script)
        .map_err(|e| eyre!("cannot read script file '{}': {e}", script.display()))?;

    let provider_id = provider_id.unwrap_or(&config.defaults.provider);
    let provider = find(provider_id).ok_or_else(|| {
        eyre!("unknown provider '{provider_id}'. Run `scriptforge providers` for the catalog.")
    })?;

    let meta = DocumentMeta {
        title: title.to_string(),
        duration: duration.to_string(),
        style: style.to_string(),
        generator_label: provider.name.to_string(),
        generator_id: provider.id.to_string(),
    };

    let doc = build_document(&raw_script, &meta);

    let output_dir = match out {
        Some(p) => p.to_path_buf(),
        None => resolve_output_dir(&config)?,
    };

    let exported_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let receipt = write_export(&doc, format, &output_dir, Some(&exported_at))?;

    info!(path = %receipt.path.display(), "script exported");

    println!();
    println!("  Script exported!");
    println!("  Path:   {}", receipt.path.display());
    println!("  Blocks: {}", doc.blocks.len());
    println!("  Size:   {} bytes", receipt.size_bytes);
    println!("  SHA256: {}", receipt.sha256);
    println!();

    Ok(())
}

async fn cmd_providers(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(all())?);
        return Ok(());
    }

    println!();
    println!("  Available AI providers (* marks the default):");
    println!();
    for provider in all() {
        let marker = if provider.id == default_provider().id {
            '*'
        } else {
            ' '
        };
        let key_line = if std::env::var(provider.api_key_env).is_ok_and(|v| !v.is_empty()) {
            format!("{} (set)", provider.api_key_env)
        } else {
            format!(
                "{} (not set, create at {})",
                provider.api_key_env, provider.key_url
            )
        };
        println!("  {marker} {:<18} {}", provider.id, provider.name);
        println!("      cost:   {}", provider.cost_info);
        println!("      key:    {key_line}");
        println!("      models: {}", provider.models.join(", "));
    }
    println!();

    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn print_classification(classification: &Classification) {
    println!("  Niche:      {}", classification.niche.as_str());
    println!("  Subniche:   {}", display_or_dash(&classification.subniche));
    println!("  Microniche: {}", display_or_dash(&classification.microniche));
    println!("  Nanoniche:  {}", display_or_dash(&classification.nanoniche));
    println!(
        "  Qualified:  {}",
        if classification.qualified { "yes" } else { "no" }
    );
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

// ---------------------------------------------------------------------------
// CLI progress spinner
// ---------------------------------------------------------------------------

/// Spinner shown while a network request is in flight.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn start(msg: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        spinner.set_message(msg.to_string());
        Self { spinner }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}
