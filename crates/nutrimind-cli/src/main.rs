use anyhow::{Context, Result};
use nutrimind_config::Config;
use nutrimind_engine::{
    AnalysisRequest, AnalysisResponse, render_logistics_with_markers, render_page,
    render_recommendation, render_results_with_markers, user_message,
};
use std::{
    env, fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

const RESULTS_FILE: &str = "results.html";

enum Command {
    Render {
        input: String,
        output: Option<PathBuf>,
    },
    Markdown {
        input: String,
    },
    Logistics {
        input: String,
    },
    Request {
        input: String,
        diet: String,
        energy_level: String,
    },
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        let (name, rest) = args.split_first()?;
        match (name.as_str(), rest) {
            ("render", [input]) => Some(Self::Render {
                input: input.clone(),
                output: None,
            }),
            ("render", [input, output]) => Some(Self::Render {
                input: input.clone(),
                output: Some(PathBuf::from(output)),
            }),
            ("markdown", [input]) => Some(Self::Markdown {
                input: input.clone(),
            }),
            ("logistics", [input]) => Some(Self::Logistics {
                input: input.clone(),
            }),
            ("request", [input, extra @ ..]) if extra.len() <= 2 => Some(Self::Request {
                input: input.clone(),
                diet: extra
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "No specific diet".to_string()),
                energy_level: extra
                    .get(1)
                    .cloned()
                    .unwrap_or_else(|| "Normal".to_string()),
            }),
            _ => None,
        }
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {program} render <response.json|-> [output.html]");
    eprintln!("       {program} markdown <file|->");
    eprintln!("       {program} logistics <file|->");
    eprintln!("       {program} request <journal-file|-> [diet] [energy-level]");
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("nutrimind");

    let Some(command) = Command::parse(args.get(1..).unwrap_or_default()) else {
        usage(program);
        process::exit(1);
    };

    let config = load_config();
    let markers = config.markers();

    match command {
        Command::Render { input, output } => {
            let body = read_input(&input)?;
            let results = match AnalysisResponse::from_json(&body).and_then(|r| r.into_results())
            {
                Ok(results) => results,
                Err(e) => {
                    eprintln!("{}", user_message(&e));
                    process::exit(1);
                }
            };

            let page = render_page(&render_results_with_markers(&results, &markers));
            match output.or_else(|| default_output(&config)) {
                Some(path) => write_output(&path, &page)?,
                None => io::stdout().write_all(page.as_bytes())?,
            }
        }
        Command::Markdown { input } => {
            let text = read_input(&input)?;
            println!("{}", render_recommendation(&text));
        }
        Command::Logistics { input } => {
            let text = read_input(&input)?;
            println!("{}", render_logistics_with_markers(&text, &markers));
        }
        Command::Request {
            input,
            diet,
            energy_level,
        } => {
            let journal = read_input(&input)?;
            match AnalysisRequest::new(&journal, &diet, &energy_level) {
                Ok(request) => println!("{}", request.to_json()?),
                Err(e) => {
                    eprintln!("{}", user_message(&e));
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("Failed to load config file: {e}");
            log::warn!("Continuing with default settings");
            Config::default()
        }
    }
}

fn default_output(config: &Config) -> Option<PathBuf> {
    config.output_dir.as_ref().map(|dir| dir.join(RESULTS_FILE))
}

fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }

    log::info!("Reading {source}");
    fs::read_to_string(source).with_context(|| format!("Failed to read input file '{source}'"))
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
