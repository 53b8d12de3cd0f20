//! compton - render a demo page

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::info;

use compton::components::{
    DetailsSummary, FlexItems, NavLinks, Page, PageConfig, Table, Target, TitleValues,
};
use compton::element::ElementExt;
use compton::els;
use compton::style::{Align, ClassRegistry, Color, Direction, Size};

#[derive(Parser)]
#[command(name = "compton")]
#[command(version, about = "Render a demo page built from compton components", long_about = None)]
#[command(after_help = "EXAMPLES:
    compton                        Write the demo page to the temp directory
    compton demo.html              Write the demo page to demo.html
    compton --stylesheet-only      Print the atomic stylesheet")]
struct Cli {
    /// Output file (defaults to compton-demo.html in the temp directory)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON file with page settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the atomic stylesheet instead of writing the page
    #[arg(long)]
    stylesheet_only: bool,

    /// Log more (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PageConfig::default(),
    };

    let classes = ClassRegistry::new();
    let page = demo_page(&classes, config);

    if cli.stylesheet_only {
        let mut stdout = io::stdout().lock();
        classes.write_stylesheet(&mut stdout)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("compton-demo.html"));
    let mut file = BufWriter::new(File::create(&output)?);
    page.render(&mut file)?;
    file.flush()?;

    info!("wrote {} ({} classes)", output.display(), classes.len());
    Ok(())
}

fn load_config(path: &Path) -> Result<PageConfig, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn demo_page(classes: &ClassRegistry, config: PageConfig) -> Page {
    let nav = NavLinks::with_targets(&[
        Target::new("Updates", "/updates").current(),
        Target::new("Games", "/games"),
        Target::new("Wishlist", "/wishlist"),
    ]);

    let details = DetailsSummary::open(classes, els::text("Properties"))
        .summary_margin_block_end(Size::Normal)
        .marker_color(Color::Blue)
        .details_margin_block_end(Size::Large)
        .with_child(
            FlexItems::new(classes, Direction::Column)
                .row_gap(Size::Small)
                .with_child(TitleValues::text(classes, "Genres", &["Strategy", "Adventure", "RPG"]))
                .with_child(TitleValues::links(
                    classes,
                    "Stores",
                    &[("Steam", "https://store.steampowered.com"), ("GOG", "https://www.gog.com")],
                )),
        );

    let mut table = Table::new();
    table
        .append_head(&["Title", "Year"])
        .append_row(&["Heroes of Might and Magic", "1995"])
        .append_row(&["Baldur's Gate", "1998"])
        .append_foot(&["2 games", ""]);

    Page::new("compton demo", classes)
        .with_config(config)
        .with_favicon_emoji("🧩")
        .with_id("demo")
        .with_child(
            FlexItems::new(classes, Direction::Column)
                .row_gap(Size::Large)
                .align_items(Align::Stretch)
                .with_child(nav)
                .with_child(els::heading_text("compton demo", 1))
                .with_child(TitleValues::search_input("Search", "search"))
                .with_child(details)
                .with_child(table),
        )
}
