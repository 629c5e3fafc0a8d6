// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

use anyhow::{self as ah, Context as _};
use std::env;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output directory, relative to the directory containing the executable.
pub const OUTPUT_DIR: &str = "../input_data";
pub const OUTPUT_FILE: &str = "qsort_small_input.txt";

/// Resolve the default output file next to the executable.
/// The current working directory does not matter.
pub fn default_output_path() -> ah::Result<PathBuf> {
    let exe = env::current_exe()
        .and_then(|p| p.canonicalize())
        .context("Failed to locate the running executable")?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| ah::format_err!("Executable path '{}' has no parent", exe.display()))?;
    Ok(exe_dir.join(OUTPUT_DIR).join(OUTPUT_FILE))
}

/// Write every word followed by a newline.
/// Returns the number of lines written.
pub fn write_words<W, I>(out: &mut W, words: I) -> ah::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut count = 0;
    for word in words {
        out.write_all(word.as_bytes())?;
        out.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

/// Create or truncate `path` and fill it with `count` words from `words`.
pub fn write_word_file<I>(path: &Path, count: usize, words: I) -> ah::Result<usize>
where
    I: IntoIterator<Item = String>,
{
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed to open output file '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    let written = write_words(&mut out, words.into_iter().take(count))
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    let file = out
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Failed to flush '{}'", path.display()))?;
    file.sync_all()?;
    Ok(written)
}


// vim: ts=4 sw=4 expandtab
