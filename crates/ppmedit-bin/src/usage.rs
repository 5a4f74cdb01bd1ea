/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Usage text printed when the arguments cannot be understood

/// The usage line, listing every filter
pub fn usage() -> String {
    format!(
        "USAGE: ppmedit <in-file> <out-file> <{}> {{motion-blur-length}}",
        ppmedit_imageprocs::filter::FILTER_NAMES.join("|")
    )
}

#[cfg(test)]
mod tests {
    use crate::usage::usage;

    #[test]
    fn lists_every_filter() {
        assert_eq!(
            usage(),
            "USAGE: ppmedit <in-file> <out-file> <grayscale|greyscale|invert|emboss|motionblur> {motion-blur-length}"
        );
    }
}
