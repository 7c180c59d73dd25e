mod document;
mod error;
mod render;

use std::fs::File;
use std::path::{Path, PathBuf};

use colselect_lib::{Action, ColumnSelect, Side, Value, WidgetConfig};
use log::debug;
use simplelog::{Config, LevelFilter, WriteLogger};

use document::Document;
use error::CliError;

const DEFAULT_STATE_PATH: &str = "colselect.json";
const DEFAULT_LOG_PATH: &str = "colselect.log";

fn usage() {
    eprintln!(
        "Usage:\n  \
  colselect [OPTIONS] init CATALOG.json\n  \
  colselect [OPTIONS] show\n  \
  colselect [OPTIONS] select ID\n  \
  colselect [OPTIONS] deselect ID\n  \
  colselect [OPTIONS] select-all\n  \
  colselect [OPTIONS] deselect-all\n  \
  colselect [OPTIONS] filter available|selected TEXT\n  \
  colselect [OPTIONS] clear available|selected\n\n\
Options:\n  \
  --state PATH    widget document (default: {DEFAULT_STATE_PATH})\n  \
  --config PATH   widget configuration for this run only (init stores it in the document)\n  \
  --log PATH      log file (default: {DEFAULT_LOG_PATH})\n  \
  --json          print JSON instead of text"
    );
}

#[derive(Debug)]
struct Options {
    state: PathBuf,
    config: Option<PathBuf>,
    log: PathBuf,
    json: bool,
    command: Vec<String>,
}

fn parse_options(args: &[String]) -> Result<Options, CliError> {
    let mut options = Options {
        state: PathBuf::from(DEFAULT_STATE_PATH),
        config: None,
        log: PathBuf::from(DEFAULT_LOG_PATH),
        json: false,
        command: Vec::new(),
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--state" | "--config" | "--log" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::usage(format!("Missing path for {arg}")))?;
                match arg.as_str() {
                    "--state" => options.state = PathBuf::from(value),
                    "--config" => options.config = Some(PathBuf::from(value)),
                    _ => options.log = PathBuf::from(value),
                }
            }
            "--json" => options.json = true,
            _ => {
                options.command.push(arg.clone());
                options.command.extend(iter.by_ref().cloned());
                break;
            }
        }
    }

    if options.command.is_empty() {
        return Err(CliError::usage("Missing command"));
    }
    Ok(options)
}

fn parse_side(arg: Option<&String>) -> Result<Side, CliError> {
    match arg.map(String::as_str) {
        Some("available") => Ok(Side::Available),
        Some("selected") => Ok(Side::Selected),
        Some(other) => Err(CliError::usage(format!(
            "Unknown side '{other}', expected available or selected"
        ))),
        None => Err(CliError::usage("Missing side")),
    }
}

fn parse_id(arg: Option<&String>) -> Result<Value, CliError> {
    arg.map(|s| Value::parse(s))
        .ok_or_else(|| CliError::usage("Missing option ID"))
}

/// Translate the command line into an action, or `None` for `show`.
fn parse_action(command: &[String]) -> Result<Option<Action>, CliError> {
    let action = match command[0].as_str() {
        "show" => return Ok(None),
        "select" => Action::SelectOption(parse_id(command.get(1))?),
        "deselect" => Action::DeselectOption(parse_id(command.get(1))?),
        "select-all" => Action::SelectAll,
        "deselect-all" => Action::DeselectAll,
        "filter" => {
            let side = parse_side(command.get(1))?;
            Action::SetFilter(side, command.get(2).cloned().unwrap_or_default())
        }
        "clear" => Action::ClearFilter(parse_side(command.get(1))?),
        other => return Err(CliError::usage(format!("Unknown command '{other}'"))),
    };
    Ok(Some(action))
}

/// Applies `action` with the effective widget. Only the state changes, a
/// `--config` override never ends up in the saved document.
fn apply_action(document: &Document, widget: &ColumnSelect, action: Action) -> Document {
    Document {
        state: widget.apply(&document.catalog, &document.state, action),
        ..document.clone()
    }
}

fn init(options: &Options) -> Result<(), CliError> {
    let source = options
        .command
        .get(1)
        .ok_or_else(|| CliError::usage("Missing catalog path for init"))?;
    let catalog = document::load_catalog(Path::new(source))?;
    let mut document = Document::new(catalog);
    if let Some(path) = &options.config {
        document.config = WidgetConfig::load(path)?;
    }
    document.save(&options.state)?;
    println!(
        "Wrote {} options from '{}' to '{}'",
        document.catalog.len(),
        source,
        options.state.display()
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        if matches!(e, CliError::Usage(_)) {
            usage();
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_options(&args)?;

    let log_file = File::create(&options.log).map_err(|e| CliError::io(&options.log, e))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    debug!("{:?}", options);

    if options.command[0] == "init" {
        return init(&options);
    }

    let action = parse_action(&options.command)?;
    let mut document = Document::load(&options.state)?;
    let config = match &options.config {
        Some(path) => WidgetConfig::load(path)?,
        None => document.config.clone(),
    };

    let widget = ColumnSelect::new(config);
    if let Some(action) = action {
        document = apply_action(&document, &widget, action);
        document.save(&options.state)?;
    }

    let lists = widget.lists(&document.catalog, &document.state);
    let controls = widget.controls(&document.catalog, &document.state);
    if options.json {
        println!("{}", render::to_json(&lists, &document.state, controls)?);
    } else {
        print!(
            "{}",
            render::to_text(&lists, &document.state, controls, widget.config())
        );
    }
    Ok(())
}
