// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{ConduitConfig, StaleResultPolicy, log::DEFAULT_LOG_FILE_NAME};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "conduit")]
#[command(about = "📰 Drive the Conduit state core from the command line")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  conduit [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "📜 Dispatch the actions in a JSON file, and print the state they lead to\n💡 Eg: `conduit replay session.json`"
    )]
    Replay {
        #[arg(value_name = "script", help = "JSON array of actions.")]
        script: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `conduit.log` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "folder",
        help = "Keep the credential token here, instead of the platform config folder."
    )]
    pub storage_dir: Option<PathBuf>,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = StaleResultPolicy::Apply,
        help = "What to do with API results that arrive after their page was left."
    )]
    pub stale_results: StaleResultPolicy,
}

impl From<&CLIArg> for ConduitConfig {
    fn from(cli_arg: &CLIArg) -> Self {
        let options = &cli_arg.global_options;
        Self {
            storage_dir: options.storage_dir.clone(),
            stale_result_policy: options.stale_results,
            log_file: options
                .enable_logging
                .then(|| DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}
