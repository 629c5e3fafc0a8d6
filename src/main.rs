// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

mod output;
mod print;
mod words;

use crate::output::{default_output_path, write_word_file};
use crate::print::Print;
use crate::words::WordGenerator;
use anyhow::{self as ah, Context as _};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qsort-input-gen", version, about, allow_negative_numbers = true)]
struct Opts {
    /// Write to this file instead of ../input_data/qsort_small_input.txt
    /// next to the executable.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print more details. May be given twice.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only print warnings and errors.
    #[arg(short, long)]
    quiet: bool,

    /// Number of words to generate.
    #[arg(value_name = "NUMBER_OF_WORDS")]
    number_of_words: Vec<String>,
}

fn usage() {
    let prog = std::env::args()
        .next()
        .unwrap_or_else(|| "qsort-input-gen".to_string());
    println!("{} [NUMBER_OF_WORDS]", prog);
}

fn main() -> ah::Result<()> {
    let opt = Opts::parse();
    Print::set_level_from_flags(opt.verbose, opt.quiet);

    if opt.number_of_words.len() != 1 {
        println!("ERROR: wrong number of parameters!");
        usage();
        std::process::exit(1);
    }
    let arg = &opt.number_of_words[0];
    let count: usize = arg
        .trim()
        .parse()
        .with_context(|| format!("Invalid number of words '{}'", arg))?;

    let path = match opt.output {
        Some(path) => path,
        None => default_output_path()?,
    };
    Print::debug(&format!("Writing {} words to '{}' ...", count, path.display()));

    let written = write_word_file(&path, count, WordGenerator::new())?;
    Print::info(&format!("Wrote {} words to '{}'.", written, path.display()));
    Ok(())
}

// vim: ts=4 sw=4 expandtab
