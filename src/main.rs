use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use overstrike::Config;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "overstrike")]
#[command(about = "Convert overstruck man page output to styled HTML")]
struct Cli {
    /// Input file, or `-` for stdin (e.g. `MAN_KEEP_FORMATTING=1 man ls | overstrike -`)
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// TOML config file
    #[arg(short, long, default_value = "overstrike.toml")]
    config: PathBuf,
}

fn read_input(input: &Path) -> io::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(input)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading {}: {}", cli.config.display(), e);
            std::process::exit(1);
        }
    };

    let text = match read_input(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let rendered = match cli.format {
        Format::Html => overstrike::man_to_html_with_config(&text, &config),
        Format::Text => overstrike::strip(&text),
        Format::Json => overstrike::man_to_json(&text),
    };
    let rendered = match rendered {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.output {
        Some(output) => {
            if let Err(e) = fs::write(&output, rendered) {
                eprintln!("Error writing {}: {}", output.display(), e);
                std::process::exit(1);
            }
            log::info!("Created {}", output.display());
        }
        None => print!("{}", rendered),
    }
}
