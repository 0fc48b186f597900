mod logging;

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use log::{error, info, warn};
use reader_core::{
    chapter::parse_ordinal,
    config::{self, Config},
    source::{read_text, TextSource},
    Severity, Shell,
};
use ui::{app::App, theme::Theme};

const LOG_FILE: &str = "rsvp-reader.log";

#[derive(Parser, Debug)]
#[clap(
    name = "rsvp-reader",
    version,
    about = "Speed-read plain text one chunk at a time.",
    long_about = None
)]
struct Cli {
    /// Plain-text file to read
    #[clap(name = "PATH")]
    path: Option<PathBuf>,

    /// Fetch a Project Gutenberg book by numeric ID instead of a file
    #[clap(short, long, value_name = "ID", conflicts_with = "PATH")]
    gutenberg: Option<String>,

    /// Load only this chapter (1-based, by 'CHAPTER ' headings)
    #[clap(long, value_name = "N")]
    chapter: Option<String>,

    /// Reading speed in words per minute (100-1200)
    #[clap(short, long)]
    wpm: Option<u32>,

    /// Window width in characters (5-80)
    #[clap(long)]
    window: Option<usize>,

    /// Use a specific configuration file
    #[clap(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn source(&self) -> Result<Option<TextSource>, reader_core::source::SourceError> {
        if let Some(id) = &self.gutenberg {
            return TextSource::gutenberg(id).map(Some);
        }
        Ok(self.path.as_ref().map(TextSource::file))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(root) = config::config_root() {
        let level = logging::level_from_verbosity(cli.verbose);
        if let Err(e) = logging::init(&root.join(LOG_FILE), level) {
            eprintln!("Logging disabled: {e}");
        }
    }

    let config_path = cli.config.clone().or_else(config::config_path);
    let mut config = config::load_config(config_path.as_deref());
    let mut params = config.playback.params();
    if let Some(wpm) = cli.wpm {
        params.set_rate(wpm);
    }
    if let Some(window) = cli.window {
        params.set_window(window);
    }

    let mut app = App::new(params, Theme::from_config(&config.theme));
    load_initial(&mut app, &cli);

    let params = match app.run() {
        Ok(params) => params,
        Err(e) => {
            error!("terminal error: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    save_params(&mut config, config_path, params);
    ExitCode::SUCCESS
}

fn load_initial(app: &mut App, cli: &Cli) {
    let source = match cli.source() {
        Ok(Some(source)) => source,
        Ok(None) => {
            app.engine
                .shell_mut()
                .notify("Press g to fetch a Gutenberg book", Severity::Info);
            return;
        }
        Err(err) => {
            app.engine
                .shell_mut()
                .notify(&err.to_string(), Severity::Error);
            return;
        }
    };

    match read_text(&source) {
        Ok(text) => {
            info!("loaded {source}");
            app.load_text(ui::app::source_title(&source), text);
        }
        Err(err) => {
            warn!("could not load {source}: {err}");
            app.engine
                .shell_mut()
                .notify(&err.to_string(), Severity::Error);
            return;
        }
    }

    if let Some(chapter) = &cli.chapter {
        match parse_ordinal(chapter) {
            Ok(ordinal) => {
                if let Err(err) = app.load_chapter(ordinal) {
                    warn!("chapter {ordinal} not loaded: {err}");
                }
            }
            Err(err) => app
                .engine
                .shell_mut()
                .notify(&err.to_string(), err.severity()),
        }
    }
}

fn save_params(config: &mut Config, path: Option<PathBuf>, params: reader_core::ParameterSet) {
    if config.playback.params() == params {
        return;
    }
    config.playback.store(params);
    let Some(path) = path else {
        return;
    };
    if let Err(e) = config::save_config_to(&path, config) {
        warn!("could not save {}: {e}", path.display());
        eprintln!("Could not save settings: {e}");
    }
}
