/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub static FILTER_HELP: &str = "Filter to apply to the image

grayscale, greyscale: set each pixel to the mean of its channels
invert:               replace each channel with 255 minus its value
emboss:               compare each pixel with its up-left neighbour
motionblur:           average each pixel with the pixels to its right,
                      takes the window length as an extra argument";

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ppmedit")
        .about("Apply a filter to a plain text (P3) PPM image")
        .arg(Arg::new("in")
            .index(1)
            .help("Input file to read data from")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("out")
            .index(2)
            .help("Output to write the data to")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("filter")
            .index(3)
            .help("Filter to apply to the image")
            .long_help(FILTER_HELP))
        .arg(Arg::new("params")
            .index(4)
            .num_args(1..)
            .allow_negative_numbers(true)
            .help("Numeric filter parameters, motionblur takes its length here"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject files whose magic number is not P3 or whose max value is not 255"))
}
