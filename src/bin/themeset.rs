//! Command-line front end over the durable preference store.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use themeset::{
    find_preset, palette_for, theme_presets, FileStore, RgbTheme, ThemeEngine,
};

#[derive(Parser)]
#[command(name = "themeset", version, about = "Manage the persisted color theme preference")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the active mode and any saved custom colors
    Show,
    /// Advance the mode along the toggle cycle
    Toggle,
    /// List the built-in presets
    Presets,
    /// Apply a preset by name
    Preset { name: String },
    /// Apply custom colors
    Custom {
        #[arg(long)]
        primary: String,
        #[arg(long)]
        secondary: String,
        #[arg(long)]
        accent: String,
        /// Background expression; defaults to a gradient over the three colors
        #[arg(long)]
        background: Option<String>,
    },
    /// Clear the custom theme and return to dark
    Reset,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = FileStore::open_default().context("opening the preference store")?;
    let mut engine = ThemeEngine::initialize(store);

    match cli.command {
        Command::Show => {
            let palette = palette_for(engine.state());
            println!("mode: {}", palette.primary.apply_to(engine.mode()));
            if let Some(colors) = engine.custom_theme() {
                println!(
                    "custom: {} {} {}",
                    palette.primary.apply_to(&colors.primary),
                    palette.secondary.apply_to(&colors.secondary),
                    palette.accent.apply_to(&colors.accent),
                );
                println!("background: {}", colors.background);
            }
        }
        Command::Toggle => {
            println!("{}", engine.toggle());
        }
        Command::Presets => {
            for preset in theme_presets() {
                let marker = if preset.is_active(engine.state()) {
                    "*"
                } else {
                    " "
                };
                println!("{} {:<16} {}", marker, preset.name, preset.colors.primary);
            }
        }
        Command::Preset { name } => match find_preset(&name) {
            Some(preset) => {
                engine.apply_preset(preset);
                println!("applied {}", preset.name);
            }
            None => bail!("no preset named '{}'", name),
        },
        Command::Custom {
            primary,
            secondary,
            accent,
            background,
        } => {
            let colors = RgbTheme::new(primary, secondary, accent, "");
            let background = background.unwrap_or_else(|| colors.preview_gradient());
            engine.set_custom_theme(colors.with_background(background));
            println!("applied custom theme");
        }
        Command::Reset => {
            engine.reset();
            println!("reset to dark");
        }
    }

    Ok(())
}
