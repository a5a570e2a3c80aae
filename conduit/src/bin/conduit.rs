// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use clap::Parser;
use conduit::{CLIArg, CLICommand, ConduitConfig, ConduitError, KvTokenStore,
              log::{WriterConfig, try_initialize_logging_global},
              new_conduit_store, replay};
use miette::Context;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // If no args are passed, help is printed, thanks to `arg_required_else_help(true)`.
    let cli_arg = CLIArg::parse();
    let config = ConduitConfig::from(&cli_arg);

    if let Some(log_file) = &config.log_file {
        try_initialize_logging_global(WriterConfig::File(log_file.clone()))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    match &cli_arg.command {
        CLICommand::Replay { script } => {
            let actions = replay::try_load_replay_script(script)?;

            let folder = config.try_create_token_store_folder()?;
            let token_store = KvTokenStore::try_open(&folder).wrap_err(
                ConduitError::OpenTokenStore {
                    path: folder.display().to_string(),
                },
            )?;

            let mut store = new_conduit_store(&config, Arc::new(token_store), None);
            let state = replay::replay(&mut store, actions).await;
            println!("{}", replay::try_serialize_state(&state)?);
        }
    }

    tracing::debug!(message = "Stop logging...");

    Ok(())
}
