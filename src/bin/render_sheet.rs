//! Render a JSON sheet description to PDF
//!
//! Usage:
//!   cargo run --release --bin render_sheet -- sheet.json
//!   cargo run --release --bin render_sheet -- sheet.json --output out.pdf --compress
//!   cat sheet.json | cargo run --release --bin render_sheet -- - --output -
//!
//! Without `--output` the PDF is written next to the input with a `.pdf`
//! extension. Set `RUST_LOG=debug` (or pass `--verbose`) for layout logging.

use pdf_sheet::{DocumentConfig, Result, Sheet};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process;

const STDIO: &str = "-";

struct RenderConfig {
    input: String,
    output: Option<String>,
    compress: bool,
    margin: Option<f32>,
    verbose: bool,
}

impl RenderConfig {
    fn from_args() -> std::result::Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        Self::parse(&args)
    }

    fn parse(args: &[String]) -> std::result::Result<Self, String> {
        let mut input = None;
        let mut output = None;
        let mut compress = false;
        let mut margin = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    if i < args.len() {
                        output = Some(args[i].clone());
                    } else {
                        return Err(format!("missing value for {}", args[i - 1]));
                    }
                },
                "--margin" => {
                    i += 1;
                    if i < args.len() {
                        let value = args[i]
                            .parse::<f32>()
                            .map_err(|e| format!("invalid --margin '{}': {}", args[i], e))?;
                        margin = Some(value);
                    } else {
                        return Err(format!("missing value for {}", args[i - 1]));
                    }
                },
                "--compress" => {
                    compress = true;
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other if input.is_none() && (other == STDIO || !other.starts_with('-')) => {
                    input = Some(other.to_string());
                },
                other => {
                    return Err(format!("unexpected argument '{}'", other));
                },
            }
            i += 1;
        }

        let input = input.ok_or_else(|| "missing input file".to_string())?;
        Ok(Self {
            input,
            output,
            compress,
            margin,
            verbose,
        })
    }

    fn document_config(&self) -> DocumentConfig {
        let mut config = DocumentConfig::new().with_compress(self.compress);
        if let Some(margin) = self.margin {
            config = config.with_margin(margin);
        }
        config
    }

    fn output_target(&self) -> String {
        match &self.output {
            Some(output) => output.clone(),
            None if self.input == STDIO => STDIO.to_string(),
            None => PathBuf::from(&self.input)
                .with_extension("pdf")
                .to_string_lossy()
                .into_owned(),
        }
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == STDIO {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn run(config: &RenderConfig) -> Result<()> {
    let sheet = Sheet::from_json(&read_input(&config.input)?)?;
    let document = sheet.render(config.document_config())?;

    let target = config.output_target();
    if target == STDIO {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.output())?;
        stdout.flush()?;
    } else {
        document.save(&target)?;
        log::info!(
            "Wrote {} ({} pages, {} bytes)",
            target,
            document.page_count(),
            document.len()
        );
    }
    Ok(())
}

fn main() {
    let config = match RenderConfig::from_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!(
                "Usage: render_sheet <sheet.json | -> [--output <file | ->] [--compress] [--margin <pt>] [--verbose]"
            );
            process::exit(2);
        },
    };

    let default_level = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
