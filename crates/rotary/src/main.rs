use clap::Parser;
use relm4::prelude::*;
use rotary::config;
use rotary::gui::app::{AppModel, SelectCallback};
use rotary::gui::dial::{DialItem, DialModel};
use rotary::sys::runtime;
use spindle::{MenuItem, SizePreset};
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "rotary", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured dial size (compact, medium or large)
    #[arg(short, long)]
    size: Option<SizePreset>,

    /// Override the configured center label
    #[arg(long)]
    center_label: Option<String>,

    /// Write the default configuration file and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_default_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };
    let config = config::load_or_setup(&config_path);

    let size = cli.size.unwrap_or(config.size);
    let center_label = cli.center_label.unwrap_or(config.center_label);
    let items: Vec<DialItem> = config
        .items
        .iter()
        .map(|c| DialItem::new(c.to_menu_item()))
        .collect();
    let dial = DialModel::new(items, size, center_label);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, config_path.clone());

    let on_select: SelectCallback = Rc::new(|item: &MenuItem| {
        log::info!("Selected '{}' (id {})", item.label, item.id);
    });

    let app = RelmApp::new("org.rotary.dial");
    app.run::<AppModel>((dial, on_select, config_path, rx));

    Ok(())
}
