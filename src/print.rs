// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    static ref PRINT_LEVEL: RwLock<PrintLevel> = RwLock::new(PrintLevel::Info);
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug)]
#[allow(dead_code)]
pub enum PrintLevel {
    Silent,
    Error,
    Warning,
    Info,
    Debug,
}

impl PrintLevel {
    /// Map the -q / -v command line flags to a level.
    pub fn from_flags(verbose: u8, quiet: bool) -> PrintLevel {
        match (quiet, verbose) {
            (true, _) => PrintLevel::Warning,
            (false, 0) => PrintLevel::Info,
            (false, _) => PrintLevel::Debug,
        }
    }
}

pub struct Print;

macro_rules! define_printer {
    ($funcname:ident, $level:path, $prefix:literal, $macro:ident) => {
        #[allow(dead_code)]
        pub fn $funcname(msg: &str) {
            if Print::enabled($level) {
                $macro!("{}{}", $prefix, msg);
            }
        }
    };
}

impl Print {
    pub fn level() -> PrintLevel {
        match PRINT_LEVEL.read() {
            Ok(level) => *level,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set_level(level: PrintLevel) {
        match PRINT_LEVEL.write() {
            Ok(mut l) => *l = level,
            Err(poisoned) => *poisoned.into_inner() = level,
        }
    }

    pub fn set_level_from_flags(verbose: u8, quiet: bool) {
        Print::set_level(PrintLevel::from_flags(verbose, quiet));
    }

    pub fn enabled(level: PrintLevel) -> bool {
        level != PrintLevel::Silent && Print::level() >= level
    }

    define_printer!(error, PrintLevel::Error, "ERROR: ", eprintln);
    define_printer!(warning, PrintLevel::Warning, "Warning: ", eprintln);
    define_printer!(info, PrintLevel::Info, "", println);
    define_printer!(debug, PrintLevel::Debug, "Debug: ", println);
}


// vim: ts=4 sw=4 expandtab
