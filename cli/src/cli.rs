use std::path::PathBuf;

use clap::Args;
use clap::Parser;

/// Offer numbered choices from generated text and hand the picked one to a form.
#[derive(Parser, Debug)]
#[command(version, bin_name = "pickfill")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Line prefix that ends the option-bearing part of a message.
    #[arg(long = "marker", value_name = "PREFIX", global = true)]
    pub directive_marker: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List the numbered options found in a message.
    Options(OptionsArgs),

    /// Pick an option and print the address of the pre-filled form.
    Pick(PickArgs),

    /// Apply a handoff address to a form and print the resulting inputs.
    Fill(FillArgs),
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// File containing the message. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Treat the input as a JSON chat message (`content`, `agent_thoughts`).
    #[arg(long = "message", default_value_t = false)]
    pub message: bool,

    /// Print options as a JSON array.
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PickArgs {
    /// Label of the option to pick, as shown by `pickfill options`.
    #[arg(value_name = "NUMBER")]
    pub number: String,

    /// File containing the message. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Treat the input as a JSON chat message (`content`, `agent_thoughts`).
    #[arg(long = "message", default_value_t = false)]
    pub message: bool,

    /// Address (or origin) of the chat page. Falls back to `origin` in config.toml.
    #[arg(long = "origin", value_name = "URL")]
    pub origin: Option<String>,

    /// Text already typed in the chat.
    #[arg(long = "prior", value_name = "TEXT", conflicts_with = "inputs")]
    pub prior: Option<String>,

    /// JSON file with the chat's conversation inputs. `null` means the chat
    /// context is unavailable.
    #[arg(long = "inputs", value_name = "FILE")]
    pub inputs: Option<PathBuf>,

    /// Path of the destination form; overrides config and environment.
    #[arg(long = "destination", value_name = "PATH")]
    pub destination: Option<String>,
}

#[derive(Args, Debug)]
pub struct FillArgs {
    /// Full address the destination form was opened with.
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// JSON file with the form's ordered field descriptors.
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: PathBuf,

    /// JSON file with the form's current input values.
    #[arg(long = "inputs", value_name = "FILE")]
    pub inputs: Option<PathBuf>,
}
