use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use is_terminal::IsTerminal;
use revodraw::areas::session::Session;
use revodraw::artifacts::extraction::{DEFAULT_SIMPLIFY, DEFAULT_THRESHOLD, ExtractOptions};
use revodraw::artifacts::shapes::DEFAULT_SIZE;
use revodraw::commands::porcelain::draw::DrawOptions;
use revodraw::commands::porcelain::shape::ShapeTarget;
use revodraw::config::load_config;
use revodraw::{ExtractMethod, ShapeKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "revodraw",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Draw on a card customisation screen over ADB",
    long_about = "RevoDraw finds the dotted drawing area on a phone's card customisation screen \
    and draws images, shapes and text inside it by replaying them as touch swipes \
    through the Android Debug Bridge.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Path to a YAML configuration file")]
    config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ExtractArgs {
    #[arg(short, long, value_enum, default_value_t = ExtractMethod::Auto, help = "Path extraction method")]
    method: ExtractMethod,
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, help = "Threshold for contour methods (0-255)")]
    threshold: u8,
    #[arg(short, long, default_value_t = DEFAULT_SIMPLIFY, help = "Path simplification factor (higher = simpler)")]
    simplify: f64,
}

impl From<&ExtractArgs> for ExtractOptions {
    fn from(args: &ExtractArgs) -> Self {
        ExtractOptions {
            method: args.method,
            threshold: args.threshold,
            simplify: args.simplify,
        }
    }
}

#[derive(Args)]
struct TargetArgs {
    #[arg(long, requires = "y", help = "X coordinate (auto-detected if not set)")]
    x: Option<i32>,
    #[arg(long, requires = "x", help = "Y coordinate (auto-detected if not set)")]
    y: Option<i32>,
    #[arg(long, help = "Skip auto-detection and use the default coordinates")]
    no_detect: bool,
    #[arg(long, help = "Detect on this screenshot instead of capturing one")]
    screenshot: Option<PathBuf>,
    #[arg(short, long, help = "Save debug images during detection")]
    debug: bool,
}

impl TargetArgs {
    fn target(&self) -> ShapeTarget<'_> {
        ShapeTarget {
            x: self.x,
            y: self.y,
            no_detect: self.no_detect,
            screenshot: self.screenshot.as_deref(),
            debug: self.debug,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "detect",
        about = "Detect the drawing area",
        long_about = "This command finds the L-shaped drawing area on a screenshot and prints its \
        boundaries, centre, safe area and usable rectangle."
    )]
    Detect {
        #[arg(short, long, help = "Path to a screenshot (captured from the device if omitted)")]
        screenshot: Option<PathBuf>,
        #[arg(short, long, help = "Save debug images")]
        debug: bool,
    },
    #[command(
        name = "draw",
        about = "Draw an image",
        long_about = "This command extracts paths from an image, fits them into the detected drawing \
        area, writes a preview and draws them on the device."
    )]
    Draw {
        #[arg(index = 1, help = "Path to the image file")]
        image: PathBuf,
        #[command(flatten)]
        extract: ExtractArgs,
        #[arg(short, long, help = "Preview only, don't draw")]
        preview: bool,
        #[arg(short, long, help = "Use the full L-shaped area (content in the VISA zone is clipped)")]
        full_area: bool,
        #[arg(long, help = "Detect on this screenshot instead of capturing one")]
        screenshot: Option<PathBuf>,
        #[arg(short, long, help = "Save debug images")]
        debug: bool,
    },
    #[command(
        name = "extract",
        about = "Print the paths extracted from an image as JSON",
        long_about = "This command runs path extraction only and prints the paths together with \
        their count, point count and estimated drawing time."
    )]
    Extract {
        #[arg(index = 1, help = "Path to the image file")]
        image: PathBuf,
        #[command(flatten)]
        extract: ExtractArgs,
        #[arg(long, help = "Pretty-print the JSON")]
        pretty: bool,
    },
    #[command(name = "shape", about = "Draw a built-in shape")]
    Shape {
        #[arg(index = 1, value_enum)]
        kind: ShapeKind,
        #[arg(long, default_value_t = DEFAULT_SIZE, help = "Shape size")]
        size: i32,
        #[command(flatten)]
        target: TargetArgs,
    },
    #[command(name = "text", about = "Draw a line of text")]
    Text {
        #[arg(index = 1, help = "The text to draw")]
        text: String,
        #[command(flatten)]
        target: TargetArgs,
    },
    #[command(
        name = "interactive",
        about = "Draw shapes and text from a prompt",
        long_about = "This command reads commands from standard input: heart, star, circle, spiral, \
        demo, text <msg> and quit."
    )]
    Interactive {
        #[arg(long, default_value_t = DEFAULT_SIZE, help = "Shape size")]
        size: i32,
        #[command(flatten)]
        target: TargetArgs,
    },
    #[command(name = "serve", about = "Start the web UI")]
    Serve {
        #[arg(short, long, help = "Address to listen on")]
        listen: Option<String>,
    },
    #[command(name = "screencap", about = "Save a screenshot from the device")]
    Screencap {
        #[arg(index = 1, help = "Output file (defaults to the output directory)")]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("revodraw={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;
    let session = Session::new(config, Box::new(std::io::stdout()));

    match &cli.command {
        Commands::Detect { screenshot, debug } => {
            session.detect(screenshot.as_deref(), *debug).await?
        }
        Commands::Draw {
            image,
            extract,
            preview,
            full_area,
            screenshot,
            debug,
        } => {
            let options = DrawOptions {
                extract: extract.into(),
                preview_only: *preview,
                full_area: *full_area,
                screenshot: screenshot.as_deref(),
                debug: *debug,
            };
            session.draw_image(image, &options).await?
        }
        Commands::Extract {
            image,
            extract,
            pretty,
        } => session.extract(image, &extract.into(), *pretty)?,
        Commands::Shape { kind, size, target } => {
            session.draw_shape(*kind, *size, &target.target()).await?
        }
        Commands::Text { text, target } => session.draw_text(text, &target.target()).await?,
        Commands::Interactive { size, target } => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let show_prompt = std::io::stdin().is_terminal();
            session
                .interactive(stdin, *size, &target.target(), show_prompt)
                .await?
        }
        Commands::Serve { listen } => session.serve(listen.as_deref()).await?,
        Commands::Screencap { output } => session.screencap(output.as_deref()).await?,
    }

    Ok(())
}
