//! Folio command line
//!
//! Runs one page loader against a site (a directory or a URL) and prints the
//! regions it wrote. Logs go to stderr so stdout stays machine-readable.

#![warn(unreachable_pub)]

pub mod config;
pub mod site;

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use folio_catalog::{CatalogAction, CatalogLoader};
use folio_detail::{FragmentLoader, FragmentOutcome, JsonDetailLoader};
use folio_model::{Page, PageQuery};
use std::io::Write;
use std::path::PathBuf;

pub use config::SiteConfig;
pub use site::SiteSource;

/// How a page is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Regions as JSON
    Json,
    /// Regions as standalone HTML elements
    Html,
}

impl OutputFormat {
    fn from_arg(value: Option<&String>) -> Self {
        match value.map(String::as_str) {
            Some("html") => Self::Html,
            _ => Self::Json,
        }
    }

    /// Serialize a page
    ///
    /// # Errors
    /// Fails only if JSON serialization fails
    pub fn render(self, page: &Page) -> anyhow::Result<String> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(page)?),
            Self::Html => Ok(page.to_html()),
        }
    }
}

fn query_arg() -> Arg {
    Arg::new("query")
        .long("query")
        .short('q')
        .default_value("")
        .help("Page query string, e.g. '?id=viaz'")
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .default_value("json")
        .value_parser(["json", "html"])
        .help("Output format for the page regions")
}

/// Command-line definition
#[must_use]
pub fn build_cli() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Portfolio page loaders: catalog grid, project details, fragments")
        .subcommand_required(true)
        .arg(
            Arg::new("root")
                .long("root")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Site directory to serve resources from [default: .]"),
        )
        .arg(
            Arg::new("page-dir")
                .long("page-dir")
                .global(true)
                .help("Directory of the page inside the site root"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Page URL to fetch resources from instead of --root"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML site configuration"),
        )
        .subcommand(
            Command::new("catalog")
                .about("Load the project grid")
                .arg(query_arg())
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .help("Select a filter after loading, like a filter button"),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Search within the active filter"),
                )
                .arg(
                    Arg::new("load-more")
                        .long("load-more")
                        .default_value("0")
                        .value_parser(value_parser!(usize))
                        .help("Activate \"load more\" this many times"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("detail")
                .about("Load a project page from the JSON detail document")
                .arg(query_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("fragment")
                .about("Load a project page from its HTML fragment")
                .arg(query_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("resolve")
                .about("Show the canonical slug and fragment path for an identifier")
                .arg(Arg::new("id").required(true).help("Project identifier")),
        )
        .subcommand(
            Command::new("check")
                .about("Validate the alias table and look for missing fragments")
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .action(ArgAction::SetTrue)
                        .help("Only validate the alias table"),
                ),
        )
}

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence over the default of `folio=info`.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn source(matches: &ArgMatches) -> SiteSource {
    if let Some(url) = matches.get_one::<String>("base-url") {
        return SiteSource::Url(url.clone());
    }
    SiteSource::Dir {
        root: matches
            .get_one::<PathBuf>("root")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        page_dir: matches
            .get_one::<String>("page-dir")
            .cloned()
            .unwrap_or_default(),
    }
}

fn site_config(matches: &ArgMatches) -> anyhow::Result<SiteConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => SiteConfig::load(path),
        None => Ok(SiteConfig::default()),
    }
}

fn page_query(args: &ArgMatches) -> PageQuery {
    PageQuery::parse(args.get_one::<String>("query").map_or("", String::as_str))
}

/// Execute a parsed command line, printing results to `out`
///
/// Returns whether the loader succeeded: the catalog rendered, the project was
/// found, the fragment was injected, or every fragment is present.
///
/// # Errors
/// Fails on configuration problems or when output cannot be written; loader
/// outcomes are reported through the returned flag instead
pub async fn run<W: Write>(matches: &ArgMatches, out: &mut W) -> anyhow::Result<bool> {
    let config = site_config(matches)?;

    match matches.subcommand() {
        Some(("catalog", args)) => {
            let fetcher = source(matches).fetcher()?;
            let loader = CatalogLoader::new(fetcher, config.catalog)?;
            let mut session = loader.load(&page_query(args)).await;

            if let Some(token) = args.get_one::<String>("filter") {
                session.dispatch(CatalogAction::SetFilter(token.clone()));
            }
            if let Some(text) = args.get_one::<String>("search") {
                session.dispatch(CatalogAction::Search(text.clone()));
            }
            for _ in 0..args.get_one::<usize>("load-more").copied().unwrap_or(0) {
                session.dispatch(CatalogAction::LoadMore);
            }

            let view = session.view();
            tracing::info!(
                filter = %session.state().filter(),
                shown = view.window_len(),
                matching = view.filtered().len(),
                "catalog rendered"
            );
            let ready = view.is_ready();

            let format = OutputFormat::from_arg(args.get_one("format"));
            writeln!(out, "{}", format.render(session.page())?)?;
            Ok(ready)
        }
        Some(("detail", args)) => {
            let fetcher = source(matches).fetcher()?;
            let loader = JsonDetailLoader::new(fetcher, config.detail)?;
            let mut page = Page::new();
            let outcome = loader.load(&page_query(args), &mut page).await;

            let format = OutputFormat::from_arg(args.get_one("format"));
            writeln!(out, "{}", format.render(&page)?)?;
            Ok(outcome.is_rendered())
        }
        Some(("fragment", args)) => {
            let aliases = config.alias_table()?;
            let fetcher = source(matches).fetcher()?;
            let loader = FragmentLoader::new(fetcher, config.detail)?.with_aliases(aliases)?;
            let mut page = Page::new();
            let outcome = loader.load(&page_query(args), &mut page).await;

            let format = OutputFormat::from_arg(args.get_one("format"));
            writeln!(out, "{}", format.render(&page)?)?;
            Ok(matches!(outcome, FragmentOutcome::Injected { .. }))
        }
        Some(("resolve", args)) => {
            let id = args
                .get_one::<String>("id")
                .context("missing identifier")?;
            let aliases = config.alias_table()?;
            let slug = aliases.resolve(id);
            let path = folio_detail::fragment_path(&config.detail.fragment_dir, slug);
            writeln!(out, "{slug}\t{path}")?;
            Ok(true)
        }
        Some(("check", args)) => {
            let aliases = config.alias_table()?;
            writeln!(
                out,
                "aliases: {} entries, {} canonical slugs",
                aliases.len(),
                aliases.canonical_slugs().len()
            )?;
            if args.get_flag("offline") {
                return Ok(true);
            }

            let fetcher = source(matches).fetcher()?;
            let loader = FragmentLoader::new(fetcher, config.detail)?.with_aliases(aliases)?;
            let checks = loader.check_fragments().await;

            let mut missing = 0usize;
            for check in &checks {
                match &check.error {
                    None => writeln!(out, "ok      {}\t{}", check.slug, check.path)?,
                    Some(e) => {
                        missing += 1;
                        writeln!(out, "missing {}\t{}\t{e}", check.slug, check.path)?;
                    }
                }
            }
            Ok(missing == 0)
        }
        Some((other, _)) => bail!("unknown command {other}"),
        None => bail!("no command given"),
    }
}
