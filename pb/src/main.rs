use std::fs;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use promptbuilder::cli::{Cli, Command, parse_kv};
use promptbuilder::config::Config;
use promptbuilder::{PromptLoader, Substitutions};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("promptbuilder starting");

    let loader = PromptLoader::new(&config.template_root);

    match cli.command {
        Command::List => {
            for name in loader.list()? {
                println!("{}", name);
            }
        }
        Command::Cat { name } => {
            let template = loader.load(&name)?;
            print!("{}", template.body());
        }
        Command::Placeholders { name } => {
            let template = loader.load(&name)?;
            for placeholder in template.placeholders() {
                println!("{}", placeholder);
            }
        }
        Command::Render {
            name,
            set,
            set_file,
            out,
        } => {
            // Config supplies the business model; explicit --set wins
            let mut subs = Substitutions::new().set("BUSINESS_MODEL", &config.business_model);
            for arg in &set_file {
                let (key, path) = parse_kv(arg)?;
                let value = fs::read_to_string(path)
                    .context(format!("Failed to read substitution file: {}", path))?;
                subs = subs.set(key, value);
            }
            for arg in &set {
                let (key, value) = parse_kv(arg)?;
                subs = subs.set(key, value);
            }

            let rendered = loader.render(&name, &subs)?;
            match out {
                Some(path) => {
                    fs::write(&path, &rendered)
                        .context(format!("Failed to write {}", path.display()))?;
                    println!(
                        "{} Rendered '{}' to {}",
                        "✓".green(),
                        name.cyan(),
                        path.display()
                    );
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}
