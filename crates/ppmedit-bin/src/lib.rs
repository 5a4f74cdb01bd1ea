/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::{error, info, warn};

use crate::usage::usage;
use crate::workflow::{create_and_exec_workflow_from_cmd, WorkflowStatus};

pub mod cmd_args;
pub mod cmd_parsers;
pub mod errors;
mod file_io;
pub mod usage;
pub mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    match create_and_exec_workflow_from_cmd(&options, &parsed_opts) {
        Ok(WorkflowStatus::Completed) => {
            info!("Workflow completed");
        }
        Ok(WorkflowStatus::UsageNeeded(reason)) => {
            warn!("{reason}");
            println!("{}", usage());
        }
        Err(reason) => {
            println!();
            error!(" Could not complete workflow, reason {reason:?}");
            println!();
            exit(1);
        }
    }
}
