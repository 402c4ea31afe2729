use clap::{Parser, Subcommand, ValueEnum};
use folio::metadata::{PageMetadataRequest, PageType, SocialImage, synthesize};
use folio::{config, head, layout, logging, output, props};
use std::path::PathBuf;

/// Per-page inputs shared by commands that render one page.
#[derive(clap::Args, Clone)]
struct PageArgs {
    /// Absolute URL of the request being rendered
    #[arg(long, value_parser = parse_absolute_url)]
    url: String,

    /// Page title (joined with the site title)
    #[arg(long)]
    title: Option<String>,

    /// Page description
    #[arg(long)]
    description: Option<String>,

    /// Open Graph type
    #[arg(long = "type", value_enum)]
    page_type: Option<PageType>,

    /// Social preview image path
    #[arg(long)]
    image: Option<String>,

    /// Alt text for the social preview image
    #[arg(long, requires = "image")]
    image_alt: Option<String>,

    /// TOML props file; explicit flags override its values
    #[arg(long)]
    props: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Head fragment, ready to inject into <head>
    Html,
    /// Resolved metadata and tag list as JSON
    Json,
    /// Aligned key/value listing
    Text,
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Page metadata and navigation progress for a personal site")]
#[command(long_about = "\
Page metadata and navigation progress for a personal site

Every page gets its <title>, canonical URL, description, Open Graph, and
Twitter card tags from two layers: site defaults in config.toml and the
page's own props.

Site layout:

  site/
  ├── config.toml              # Title, author, nav and social links
  └── pages/
      └── my-post.toml         # Page props (title, description, page_type)

Title:      \"<page title> | <site title>\", or the site title alone
Canonical:  trailing slash added, or removed right before a query string

Run 'folio gen-config' to generate a documented config.toml.")]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the head tags for one page
    Head {
        #[command(flatten)]
        page: PageArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: Format,
    },
    /// Print a full preview document for one page
    Preview(PageArgs),
    /// Validate config.toml and lint its links
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Head { page, format } => {
            let site = config::load_config(&cli.source)?;
            let resolved = synthesize(&build_request(page)?, &site);
            match format {
                Format::Html => println!("{}", head::render_head_tags(&resolved).into_string()),
                Format::Json => println!("{}", head::head_json(&resolved)?),
                Format::Text => output::print_tags(&resolved.tags()),
            }
        }
        Command::Preview(page) => {
            let site = config::load_config(&cli.source)?;
            let resolved = synthesize(&build_request(page)?, &site);
            let current_path = url::Url::parse(&resolved.canonical_url)
                .map(|u| u.path().to_string())
                .unwrap_or_else(|_| "/".to_string());
            let doc = layout::render_preview(&resolved, &site, &current_path);
            println!("{}", doc.into_string());
        }
        Command::Check => {
            let site = config::load_config(&cli.source)?;
            let warnings = config::lint_links(&site);
            output::print_check_output(&site, &warnings, &cli.source);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Merge the props file (if any) with explicit flags into a request.
fn build_request(page: PageArgs) -> Result<PageMetadataRequest, props::PropsError> {
    let base = match &page.props {
        Some(path) => props::load_props(path)?,
        None => props::PageProps::default(),
    };

    let mut request = base.into_request(page.url);
    if let Some(title) = page.title {
        request.title = Some(title);
    }
    if let Some(description) = page.description {
        request.description = Some(description);
    }
    if let Some(page_type) = page.page_type {
        request.page_type = page_type;
    }
    if let Some(src) = page.image {
        request.image = Some(SocialImage {
            src,
            alt: page.image_alt,
        });
    }
    Ok(request)
}

/// The CLI stands in for the host framework, which only ever hands over
/// absolute URLs.
fn parse_absolute_url(raw: &str) -> Result<String, String> {
    let parsed = url::Url::parse(raw).map_err(|e| format!("not an absolute URL: {e}"))?;
    if parsed.cannot_be_a_base() {
        return Err(format!("not a hierarchical URL: {raw}"));
    }
    Ok(raw.to_string())
}
