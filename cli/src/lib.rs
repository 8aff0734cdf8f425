// Results go to stdout through the few functions that opt in; everything
// else is logged to stderr.
#![deny(clippy::print_stdout)]

mod cli;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use pickfill_config::Config;
use pickfill_config::ConfigOverrides;
use pickfill_core::AutoFillOutcome;
use pickfill_core::Destination;
use pickfill_core::Navigator;
use pickfill_core::Notifier;
use pickfill_core::PickOutcome;
use pickfill_core::apply_autofill;
use pickfill_core::message_options;
use pickfill_core::pick_option;
use pickfill_form::InputStore;
use pickfill_form::WatchInputStore;
use pickfill_protocol::ChoiceOption;
use pickfill_protocol::FieldDescriptor;
use pickfill_protocol::HandoffSource;
use pickfill_protocol::InputState;
use pickfill_protocol::MessageItem;
use pickfill_protocol::Notice;
use pickfill_protocol::PRIOR_TEXT_KEY;
use pickfill_transport::normalize_origin;
use pickfill_utils_option_parser::OptionParser;
use pickfill_utils_option_parser::find_option;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub use cli::Cli;
pub use cli::Command;
pub use cli::FillArgs;
pub use cli::OptionsArgs;
pub use cli::PickArgs;

const NO_OPTIONS_MESSAGE: &str = "no options available";

pub fn run_main(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    let Cli {
        command,
        directive_marker,
    } = cli;
    match command {
        Command::Options(args) => {
            let config = load_config(directive_marker, None)?;
            run_options(args, &OptionParser::new(config.directive_marker))
        }
        Command::Pick(args) => {
            let config = load_config(directive_marker, args.destination.clone())?;
            let parser = OptionParser::new(config.directive_marker.clone());
            run_pick(args, &config, &parser)
        }
        // The form side needs nothing from config.toml.
        Command::Fill(args) => run_fill(args),
    }
}

fn load_config(
    directive_marker: Option<String>,
    destination_path: Option<String>,
) -> anyhow::Result<Config> {
    Config::load(ConfigOverrides {
        destination_path,
        origin: None,
        directive_marker,
    })
    .context("failed to load configuration")
}

fn init_tracing() {
    let default_level = "error";
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

fn run_options(args: OptionsArgs, parser: &OptionParser) -> anyhow::Result<()> {
    let options = read_options(args.file.as_deref(), args.message, parser)?;
    if args.json {
        print_line(&serde_json::to_string_pretty(&options)?);
    } else if options.is_empty() {
        print_line(NO_OPTIONS_MESSAGE);
    } else {
        for option in &options {
            print_line(&option.to_string());
        }
    }
    Ok(())
}

fn run_pick(args: PickArgs, config: &Config, parser: &OptionParser) -> anyhow::Result<()> {
    let options = read_options(args.file.as_deref(), args.message, parser)?;
    let Some(option) = find_option(&options, &args.number) else {
        if options.is_empty() {
            anyhow::bail!(NO_OPTIONS_MESSAGE);
        }
        anyhow::bail!("option {} not found in the message", args.number);
    };

    let origin = args
        .origin
        .or_else(|| config.origin.clone())
        .context("no origin given; pass --origin or set `origin` in config.toml")?;
    let destination = Destination {
        origin: normalize_origin(&origin)?,
        path_template: config.destination_path.clone(),
    };

    let source = match (args.prior, args.inputs) {
        (_, Some(path)) => read_json::<Option<HandoffSource>>(&path)?,
        (Some(prior), None) => Some(HandoffSource {
            new_conversation_inputs: [(PRIOR_TEXT_KEY, prior)].into_iter().collect(),
            ..Default::default()
        }),
        (None, None) => Some(HandoffSource::default()),
    };

    match pick_option(
        source.as_ref(),
        option,
        &destination,
        &mut StdoutNavigator,
        &StderrNotifier,
    ) {
        PickOutcome::Navigated { .. } | PickOutcome::NavigatedWithoutPayload { .. } => Ok(()),
        PickOutcome::MissingContext => anyhow::bail!("chat context is unavailable"),
    }
}

fn run_fill(args: FillArgs) -> anyhow::Result<()> {
    let fields: Vec<FieldDescriptor> = read_json(&args.schema)?;
    let initial = match &args.inputs {
        Some(path) => read_json::<InputState>(path)?,
        None => InputState::new(),
    };
    let store = WatchInputStore::new(initial);

    match apply_autofill(&args.address, &fields, &store, &StderrNotifier) {
        AutoFillOutcome::Filled { key, .. } => tracing::info!(%key, "form filled"),
        AutoFillOutcome::NoPayload => tracing::info!("address carries no payload"),
        AutoFillOutcome::NoResolvableField => tracing::info!("form has no fields"),
        AutoFillOutcome::DecodeFailed(err) => tracing::info!("payload ignored: {err}"),
    }
    print_line(&serde_json::to_string_pretty(&store.current())?);
    Ok(())
}

fn read_options(
    file: Option<&Path>,
    as_message: bool,
    parser: &OptionParser,
) -> anyhow::Result<Vec<ChoiceOption>> {
    let input = read_input(file)?;
    if as_message {
        let item: MessageItem =
            serde_json::from_str(&input).context("failed to parse chat message JSON")?;
        Ok(message_options(&item, parser))
    } else {
        Ok(parser.extract(&input))
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}

/// Stands in for the page transition: the address is the command's result.
struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&mut self, address: &str) {
        print_line(address);
    }
}

struct StderrNotifier;

impl Notifier for StderrNotifier {
    #[allow(clippy::print_stderr)]
    fn notify(&self, notice: Notice) {
        eprintln!("{notice}");
    }
}
