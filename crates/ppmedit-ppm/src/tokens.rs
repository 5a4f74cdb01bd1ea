/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whitespace separated tokens with `#` comments removed
use std::str::{Lines, SplitAsciiWhitespace};

/// A single token and the (1-based) line it was found on
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Token<'a> {
    pub line: usize,
    pub text: &'a str
}

pub(crate) struct TokenStream<'a> {
    lines:   std::iter::Enumerate<Lines<'a>>,
    current: Option<(usize, SplitAsciiWhitespace<'a>)>
}

impl<'a> TokenStream<'a> {
    pub fn new(data: &'a str) -> TokenStream<'a> {
        TokenStream {
            lines:   data.lines().enumerate(),
            current: None
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((line, words)) = &mut self.current {
                if let Some(text) = words.next() {
                    return Some(Token { line: *line, text });
                }
            }
            // blank and comment-only lines yield no words and are skipped here
            let (number, line) = self.lines.next()?;
            let data = line.split_once('#').map_or(line, |(data, _)| data);

            self.current = Some((number + 1, data.split_ascii_whitespace()));
        }
    }
}
