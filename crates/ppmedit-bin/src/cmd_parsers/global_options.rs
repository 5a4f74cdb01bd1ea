/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use ppmedit_ppm::DecoderOptions;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:   usize,
    pub max_height:  usize,
    pub strict_mode: bool
}

impl Default for CmdOptions {
    fn default() -> Self {
        let defaults = DecoderOptions::default();

        CmdOptions {
            max_width:   defaults.get_max_width(),
            max_height:  defaults.get_max_height(),
            strict_mode: false
        }
    }
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions::default()
    }

    /// Options handed to the PPM decoder
    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_strict_mode(self.strict_mode)
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }

    if options.value_source("strict") == Some(ValueSource::CommandLine) {
        info!("Decoding in strict mode");
        cmd_options.strict_mode = true;
    }
    cmd_options
}

fn flag_set(options: &ArgMatches, id: &str) -> bool {
    options.get_one::<bool>(id).copied().unwrap_or(false)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if flag_set(options, "debug") {
        log_level = Level::Debug;
    } else if flag_set(options, "trace") {
        log_level = Level::Trace;
    } else if flag_set(options, "warn") {
        log_level = Level::Warn
    } else if flag_set(options, "info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["ppmedit"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.max_width, 16384);
        assert_eq!(options.max_height, 16384);
        assert!(!options.strict_mode);
    }

    #[test]
    fn limits_and_strict() {
        let matches = create_cmd_args()
            .try_get_matches_from(["ppmedit", "--max-width", "10", "--strict", "a", "b", "invert"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.max_width, 10);
        assert!(options.strict_mode);
        assert_eq!(options.decoder_options().get_max_width(), 10);
        assert!(options.decoder_options().get_strict_mode());
    }
}
