/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use ppmedit_core::errors::ImageErrors;
use ppmedit_imageprocs::filter::Filter;
use ppmedit_ppm::{DecoderOptions, PPMDecoder};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::WorkflowErrors;
use crate::file_io::{read_input, write_output};

/// Why the arguments could not be turned into a workflow
#[derive(Debug)]
pub enum UsageReason {
    /// Fewer than the three required positional arguments, found
    TooFewArguments(usize),
    /// Unknown filter or wrong number of filter parameters
    Filter(ImageErrors),
    /// A filter parameter that is not an integer
    InvalidLength(String)
}

impl Display for UsageReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewArguments(found) => {
                write!(f, "Expected at least 3 arguments but found {found}")
            }
            Self::Filter(err) => write!(f, "{err}"),
            Self::InvalidLength(value) => {
                write!(f, "Motion blur length `{value}` is not an integer")
            }
        }
    }
}

/// How a run ended when no hard error occurred
#[derive(Debug)]
pub enum WorkflowStatus {
    /// The output file was written
    Completed,
    /// The arguments were not understood, nothing was read or written
    UsageNeeded(UsageReason)
}

/// A validated request: read `in_file`, apply `filter`, write `out_file`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkflowRequest {
    pub in_file:  PathBuf,
    pub out_file: PathBuf,
    pub filter:   Filter
}

/// Turn positional arguments into a request
///
/// # Errors
/// The reason the usage text should be shown instead
pub fn validate_arguments(
    in_file: Option<&Path>, out_file: Option<&Path>, filter: Option<&str>, params: &[String]
) -> Result<WorkflowRequest, UsageReason> {
    let (Some(in_file), Some(out_file), Some(name)) = (in_file, out_file, filter) else {
        let found = [in_file.is_some(), out_file.is_some(), filter.is_some()]
            .iter()
            .filter(|x| **x)
            .count();
        return Err(UsageReason::TooFewArguments(found + params.len()));
    };

    let values = match params
        .iter()
        .map(|x| x.trim().parse::<i64>())
        .collect::<Result<Vec<i64>, _>>()
    {
        Ok(values) => values,
        Err(_) if Filter::expected_parameters(name) == Some(params.len()) => {
            return Err(UsageReason::InvalidLength(params.join(" ")));
        }
        // the count is wrong too, only the count matters below
        Err(_) => vec![0; params.len()]
    };

    let filter = Filter::from_name(name, &values).map_err(UsageReason::Filter)?;

    Ok(WorkflowRequest {
        in_file: in_file.to_path_buf(),
        out_file: out_file.to_path_buf(),
        filter
    })
}

fn verify_file_paths(in_path: &Path, out_path: &Path) -> Result<(), WorkflowErrors> {
    if in_path == out_path {
        return Err(WorkflowErrors::SamePath(in_path.to_path_buf()));
    }
    // different spellings of one existing file
    if let (Ok(a), Ok(b)) = (in_path.canonicalize(), out_path.canonicalize()) {
        if a == b {
            return Err(WorkflowErrors::SamePath(in_path.to_path_buf()));
        }
    }
    Ok(())
}

/// Read, filter and write a single image
///
/// The output file is only created once decoding and filtering
/// succeeded.
///
/// # Errors
/// Any I/O, format or filter error
pub fn run_workflow(
    request: &WorkflowRequest, options: DecoderOptions
) -> Result<(), WorkflowErrors> {
    verify_file_paths(&request.in_file, &request.out_file)?;

    let data = read_input(&request.in_file)?;

    let mut decoder = PPMDecoder::new_with_options(options, &data);
    let mut image = decoder.decode()?;

    debug!("Decoded {:?}", request.in_file);

    request.filter.execute(&mut image)?;

    write_output(&request.out_file, &image)?;

    info!("Wrote {:?}", request.out_file);
    Ok(())
}

pub fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<WorkflowStatus, WorkflowErrors> {
    info!("Creating workflows from input");

    let params: Vec<String> = args
        .get_many::<String>("params")
        .map(|x| x.cloned().collect())
        .unwrap_or_default();

    let request = match validate_arguments(
        args.get_one::<PathBuf>("in").map(PathBuf::as_path),
        args.get_one::<PathBuf>("out").map(PathBuf::as_path),
        args.get_one::<String>("filter").map(String::as_str),
        &params
    ) {
        Ok(request) => request,
        Err(reason) => return Ok(WorkflowStatus::UsageNeeded(reason))
    };

    debug!("Added {} operation", request.filter);

    run_workflow(&request, cmd_opts.decoder_options())?;

    Ok(WorkflowStatus::Completed)
}
