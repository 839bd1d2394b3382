//! tint - syntax highlighting for the terminal

use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use tint::config::{ColorMode, Config};
use tint::detect;
use tint::error::{Result, TintError};
use tint::render::{HtmlRenderer, TerminalRenderer};
use tint::syntax::Registry;

struct Options {
    file: Option<PathBuf>,
    language: Option<String>,
    html: bool,
    color: Option<ColorMode>,
    list: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("tint: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut opts = Options {
        file: None,
        language: None,
        html: false,
        color: None,
        list: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--list-languages" => opts.list = true,
            "--html" => opts.html = true,
            "--color" => opts.color = Some(ColorMode::Always),
            "--no-color" => opts.color = Some(ColorMode::Never),
            "-l" | "--language" => {
                let value = iter
                    .next()
                    .ok_or_else(|| TintError::Message(format!("{} needs a value", arg)))?;
                opts.language = Some(value.clone());
            }
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(TintError::Message(format!("unknown option: {}", other)));
            }
            _ => opts.file = Some(PathBuf::from(arg)),
        }
    }

    let registry = Registry::new();

    if opts.list {
        for scanner in registry.list() {
            if scanner.aliases().is_empty() {
                println!("{}", scanner.name());
            } else {
                println!("{} ({})", scanner.name(), scanner.aliases().join(", "));
            }
        }
        return Ok(());
    }

    let source = read_input(opts.file.as_deref())?;

    // Explicit -l wins; otherwise detect from the file path. No match is
    // fine: the dispatcher falls back to plain text.
    let language = opts
        .language
        .or_else(|| {
            opts.file
                .as_deref()
                .and_then(detect::language_for_path)
                .map(String::from)
        })
        .unwrap_or_default();

    let config = Config::load()?;

    if opts.html {
        let mut renderer = HtmlRenderer::new(config.theme);
        registry.highlight(&source, &language, &mut renderer);
        print!("{}", renderer.into_html());
        return Ok(());
    }

    let color = match opts.color.unwrap_or(config.color) {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    };

    let stdout = std::io::stdout().lock();
    let mut renderer = TerminalRenderer::new(stdout, config.theme);
    if !color {
        renderer = renderer.monochrome();
    }
    registry.highlight(&source, &language, &mut renderer);
    renderer.finish()?;
    Ok(())
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => {
            if !path.is_file() {
                return Err(TintError::FileNotFound(path.display().to_string()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn print_usage() {
    println!("tint {} - syntax highlighting for the terminal", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tint [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin) and writes a highlighted version to stdout.");
    println!("The language is detected from the file name unless -l is given;");
    println!("unknown languages pass through as plain text.");
    println!();
    println!("Options:");
    println!("  -l, --language NAME  Highlight as NAME instead of detecting");
    println!("      --html           Emit an HTML fragment instead of ANSI");
    println!("      --color          Force color output");
    println!("      --no-color       Disable color output");
    println!("      --list-languages List languages and their aliases");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Styles can be overridden in ~/.tint.toml; see the README.");
}

fn print_version() {
    println!("tint {}", env!("CARGO_PKG_VERSION"));
}
