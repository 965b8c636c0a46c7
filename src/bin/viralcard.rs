use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use viralcard::{
    Canvas, CredentialValidator as _, ENV_API_KEY, ExportAdapter as _, ExportOpts, GatewayConfig,
    HttpGateway, PngExporter, RenderInput, RenderMode, SearchGateway as _, SearchProvider,
    SlotBoard, SourceDescriptor, SourceKind, StyleConfig, SummarizationGateway as _, Summary,
    TemplateId, VisualComposition, render_scene,
};

#[derive(Parser, Debug)]
#[command(name = "viralcard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the template catalog.
    Templates,
    /// Render a summary onto a template and export it as PNG (or SVG).
    Render(RenderArgs),
    /// Summarize raw text through the configured service and print the summary JSON.
    Summarize(SummarizeArgs),
    /// Search a provider and print the results JSON.
    Search(SearchArgs),
    /// Check the configured API key with a trial call.
    CheckKey,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Summary JSON.
    #[arg(long)]
    summary: PathBuf,

    /// Source descriptor JSON; image paths inside it resolve against its directory.
    #[arg(long)]
    source: Option<PathBuf>,

    /// Style config JSON.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Template key, e.g. `cover` or `note-app`.
    #[arg(long, default_value = "cover")]
    template: String,

    /// Render the subtitle-stitch mode instead of a template.
    #[arg(long)]
    stitch: bool,

    /// Optional visual composition (per-element overrides) JSON.
    #[arg(long)]
    composition: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Pixel scale factor.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Write the intermediate SVG instead of a PNG.
    #[arg(long)]
    svg: bool,
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// Raw text file; reads stdin when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Source kind the text came from.
    #[arg(long, value_enum, default_value_t = KindChoice::Video)]
    kind: KindChoice,
}

#[derive(Parser, Debug)]
struct SearchArgs {
    /// Query text.
    query: String,

    #[arg(long, value_enum, default_value_t = ProviderChoice::Web)]
    provider: ProviderChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Video,
    Images,
    Search,
}

impl From<KindChoice> for SourceKind {
    fn from(k: KindChoice) -> Self {
        match k {
            KindChoice::Video => SourceKind::Video,
            KindChoice::Images => SourceKind::Images,
            KindChoice::Search => SourceKind::Search,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProviderChoice {
    X,
    Youtube,
    Web,
}

impl From<ProviderChoice> for SearchProvider {
    fn from(p: ProviderChoice) -> Self {
        match p {
            ProviderChoice::X => SearchProvider::X,
            ProviderChoice::Youtube => SearchProvider::Youtube,
            ProviderChoice::Web => SearchProvider::Web,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Templates => cmd_templates(),
        Command::Render(args) => cmd_render(args),
        Command::Summarize(args) => cmd_summarize(args).await,
        Command::Search(args) => cmd_search(args).await,
        Command::CheckKey => cmd_check_key().await,
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parse {what} JSON"))
}

fn gateway() -> anyhow::Result<HttpGateway> {
    let config = GatewayConfig::from_env()?;
    if !config.has_credential() {
        anyhow::bail!("no API key; set {}", ENV_API_KEY);
    }
    Ok(HttpGateway::new(config))
}

fn cmd_templates() -> anyhow::Result<()> {
    for entry in viralcard::catalog() {
        println!(
            "{:<20} {:<24} {} slot(s)",
            entry.id.key(),
            entry.name,
            entry.slots.len()
        );
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let summary: Summary = read_json(&args.summary, "summary")?;
    summary.validate()?;
    let source: SourceDescriptor = match &args.source {
        Some(path) => read_json(path, "source")?,
        None => SourceDescriptor::Video {
            description: String::new(),
            media: None,
            thumbnail: None,
        },
    };
    let style: StyleConfig = match &args.style {
        Some(path) => read_json(path, "style")?,
        None => StyleConfig::default(),
    };

    let mode = if args.stitch {
        RenderMode::SubtitleStitch
    } else {
        RenderMode::Infographic(TemplateId::parse(&args.template)?)
    };

    let composition: VisualComposition = match &args.composition {
        Some(path) => read_json(path, "composition")?,
        None => VisualComposition::new(),
    };
    // Built first so fonts under the base dir are also used for line breaking.
    let base_dir = args
        .source
        .as_deref()
        .unwrap_or(args.summary.as_path())
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let exporter = PngExporter::new(ExportOpts {
        scale: args.scale,
        ..ExportOpts::default()
    })
    .with_base_dir(base_dir);

    let tree = render_scene(&RenderInput {
        summary: &summary,
        source: &source,
        mode,
        style: &style,
        slots: &SlotBoard::new(0),
        composition: &composition,
        canvas: Canvas::default(),
    });

    if args.svg {
        let svg = exporter.svg(&tree)?;
        std::fs::create_dir_all(&args.out)
            .with_context(|| format!("create output dir '{}'", args.out.display()))?;
        let path = args.out.join("card.svg");
        std::fs::write(&path, svg).with_context(|| format!("write svg '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
        return Ok(());
    }

    let image = exporter.export(&tree)?;
    let path = image.save_to_dir(&args.out)?;
    eprintln!("wrote {} ({}x{})", path.display(), image.width, image.height);
    Ok(())
}

async fn cmd_summarize(args: SummarizeArgs) -> anyhow::Result<()> {
    let raw = match &args.in_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read input '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };
    let summary = gateway()?.summarize(&raw, args.kind.into()).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

async fn cmd_search(args: SearchArgs) -> anyhow::Result<()> {
    let results = gateway()?.search(&args.query, args.provider.into()).await;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

async fn cmd_check_key() -> anyhow::Result<()> {
    let gw = gateway()?;
    let ok = gw.validate(&gw.config().api_key).await;
    println!("{}", if ok { "valid" } else { "rejected" });
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
