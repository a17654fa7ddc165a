use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use drawer::{logo, LogoConfig, Scene};
use log::info;
use sha2::{Digest, Sha256};

#[derive(Parser)]
#[command(name = "drawer", version, about = "Draw shapes onto a canvas and save it as PNG")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the logo composition
    Logo {
        #[arg(long, default_value = "amazing_logo.png")]
        out: PathBuf,
        #[arg(long, default_value_t = 300)]
        size: u32,
        #[arg(long, default_value_t = 1000)]
        dots: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Generate a disk filled with cycling rainbow colors
    Rainbow {
        #[arg(long, default_value = "rainbow.png")]
        out: PathBuf,
        #[arg(long, default_value_t = 300)]
        size: u32,
    },
    /// Render a JSON scene file
    Render {
        scene: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

fn digest_file(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read back {}", path.display()))?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let (canvas, out) = match cli.command {
        Command::Logo {
            out,
            size,
            dots,
            seed,
        } => {
            let cfg = LogoConfig { size, dots, seed };
            let canvas = logo::amazing_logo(&cfg).context("Failed to draw logo")?;
            (canvas, out)
        }
        Command::Rainbow { out, size } => {
            let canvas = logo::rainbow_disc(size).context("Failed to draw rainbow disc")?;
            (canvas, out)
        }
        Command::Render { scene, out } => {
            let canvas = Scene::load(&scene)
                .and_then(|s| s.render())
                .with_context(|| format!("Failed to render scene {}", scene.display()))?;
            (canvas, out)
        }
    };

    canvas
        .save_png(&out)
        .with_context(|| format!("Failed to save {}", out.display()))?;

    let digest = digest_file(&out)?;
    info!("wrote {}x{} image to {}", canvas.width(), canvas.height(), out.display());
    println!("{}  {}", digest, out.display());
    Ok(())
}
