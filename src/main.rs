use clap::{Parser, Subcommand};
use school_site::resolve::{self, ResolvedManifest};
use school_site::{config, generate, output, scan};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn version_string() -> &'static str {
    let on_tag = env!("SCHOOL_SITE_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("SCHOOL_SITE_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "school-site")]
#[command(about = "Static site generator for primary school websites")]
#[command(long_about = "\
Static site generator for primary school websites

Builds a single-page school site (hero, programs carousel, filterable photo
gallery, videos, testimonials, admissions and contact) plus one player page
per video, from a directory of TOML and markdown files.

Content structure:

  content/
  ├── config.toml          # School details, theme, navigation (optional)
  ├── gallery.toml         # [[photo]] category, caption, src, featured
  ├── videos.toml          # [[video]] title, src (YouTube URL or file)
  ├── programs.toml        # [[program]] carousel slides
  ├── testimonials.toml    # [[testimonial]] name, role, content, rating
  ├── sections/            # whyus.md, about.md, admissions.md, privacy.md, ...
  └── assets/              # Images and files copied to the output as-is

Every file is optional; a missing file means an empty section, and empty
data-driven sections are left off the page.

Run 'school-site gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate manifests
    #[arg(long, default_value = ".school-site-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Probe images and resolve video URLs from the scan manifest
    Resolve,
    /// Produce the final HTML site from the resolved manifest
    Generate,
    /// Run the full pipeline: scan → resolve → generate
    Build,
    /// Validate content and report broken links without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_scan_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Resolve => {
            let scan_manifest_path = cli.temp_dir.join("manifest.json");
            let manifest_content = std::fs::read_to_string(&scan_manifest_path)?;
            let input_manifest: serde_json::Value = serde_json::from_str(&manifest_content)?;
            let site_config: config::SiteConfig =
                serde_json::from_value(input_manifest.get("config").cloned().unwrap_or_default())?;
            init_thread_pool(&site_config.processing);
            run_resolve(&scan_manifest_path, &cli.source, &cli.temp_dir)?;
        }
        Command::Generate => {
            let resolved_manifest_path = cli.temp_dir.join("resolved").join("manifest.json");
            generate::generate(&resolved_manifest_path, &cli.source, &cli.output)?;
            let manifest_content = std::fs::read_to_string(&resolved_manifest_path)?;
            let manifest: ResolvedManifest = serde_json::from_str(&manifest_content)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            let source = cli.source.as_path();

            println!("==> Stage 1: Scanning {}", source.display());
            let manifest = scan::scan(source)?;
            let scan_manifest_path = write_scan_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, source);

            println!("==> Stage 2: Resolving assets");
            init_thread_pool(&manifest.config.processing);
            let resolved = run_resolve(&scan_manifest_path, source, &cli.temp_dir)?;

            println!("==> Stage 3: Generating HTML → {}", cli.output.display());
            let resolved_manifest_path = cli.temp_dir.join("resolved").join("manifest.json");
            generate::generate(&resolved_manifest_path, source, &cli.output)?;
            output::print_generate_output(&resolved);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let source = cli.source.as_path();
            println!("==> Checking {}", source.display());
            let manifest = scan::scan(source)?;
            output::print_scan_output(&manifest, source);

            init_thread_pool(&manifest.config.processing);
            let resolved = resolve::resolve_manifest(manifest, source, None);
            let broken = resolved
                .photos
                .iter()
                .map(|p| &p.image)
                .chain(resolved.programs.iter().map(|p| &p.image))
                .filter(|image| image.fallback)
                .count();
            let unplayable = resolved.videos.iter().filter(|v| !v.playable).count();
            let dangling = generate::check_links(&resolved);

            if broken > 0 {
                println!("Images falling back to placeholder: {broken}");
            }
            if unplayable > 0 {
                println!("Videos without a playable source: {unplayable}");
            }
            for link in &dangling {
                println!("Link target not on page: {link}");
            }
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_scan_manifest(
    manifest: &scan::Manifest,
    temp_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    Ok(manifest_path)
}

/// Run the resolve stage, printing progress events as they arrive.
fn run_resolve(
    scan_manifest_path: &Path,
    source: &Path,
    temp_dir: &Path,
) -> Result<ResolvedManifest, Box<dyn std::error::Error>> {
    let resolved_dir = temp_dir.join("resolved");
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_resolve_event(&event) {
                println!("{}", line);
            }
        }
    });
    let resolved = resolve::resolve(scan_manifest_path, source, &resolved_dir, Some(tx))?;
    if printer.join().is_err() {
        tracing::warn!("progress printer thread panicked");
    }
    Ok(resolved)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the config can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
