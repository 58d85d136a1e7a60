#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use contactcard_core::config::DEFAULT_CONFIG_FILE;
use contactcard_core::{logging, CardView, SchemePreference, SiteConfig, ThemeMode};
use dioxus::desktop::{Config, WindowBuilder};

/// Site configuration snapshot, set once before launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Theme mode resolved at startup
static THEME_MODE: OnceLock<ThemeMode> = OnceLock::new();

/// Get the site configuration (empty if none was loaded)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the startup theme mode
pub fn get_theme_mode() -> ThemeMode {
    THEME_MODE.get().copied().unwrap_or_default()
}

/// Contact Card - themed profile links
#[derive(Parser, Debug)]
#[command(name = "contactcard-desktop")]
#[command(about = "Contact Card - preview the contact panel for a site config")]
struct Args {
    /// Site config file (default: <config dir>/contactcard/site.config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color scheme: light, dark or system (overrides the site config)
    #[arg(short, long)]
    theme: Option<SchemePreference>,

    /// Print the resolved links instead of opening a window
    #[arg(long)]
    print: bool,

    /// With --print, emit the card view as JSON
    #[arg(long, requires = "print")]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Default config location in the platform config directory
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("contactcard").join(DEFAULT_CONFIG_FILE))
}

/// Explicit path must exist; the default path is optional
fn load_site_config(explicit: Option<PathBuf>) -> Result<SiteConfig> {
    if let Some(path) = explicit {
        let config = SiteConfig::load(&path)
            .with_context(|| format!("Could not load site config from {}", path.display()))?;
        tracing::info!("Using site config {:?}", path);
        return Ok(config);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            let config = SiteConfig::load(&path)
                .with_context(|| format!("Could not load site config from {}", path.display()))?;
            tracing::info!("Using site config {:?}", path);
            Ok(config)
        }
        _ => {
            tracing::info!("No site config found, rendering an empty card");
            Ok(SiteConfig::default())
        }
    }
}

fn print_card(view: &CardView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    println!("{} {}", view.title.emoji, view.title.text);
    for link in &view.links {
        println!("{}\t{}", link.entry.label, link.entry.href);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let site_config = load_site_config(args.config)?;
    let preference = args.theme.unwrap_or(site_config.scheme);
    let system_mode = match preference {
        SchemePreference::System => theme::detect_system_mode(),
        _ => None,
    };
    let mode = preference.resolve(system_mode);
    tracing::info!("Theme: {:?} -> {}", preference, mode.as_str());

    if args.print {
        let view = CardView::build(site_config.contact(), mode);
        return print_card(&view, args.json);
    }

    let title = site_config
        .profile
        .name
        .as_deref()
        .map(|name| format!("Contact - {}", name))
        .unwrap_or_else(|| "Contact".to_string());

    let _ = SITE_CONFIG.set(site_config);
    let _ = THEME_MODE.set(mode);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(420.0, 520.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
