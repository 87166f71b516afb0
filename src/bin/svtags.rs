//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Demo CLI: scans a single Verilog/SystemVerilog file
//! and prints one line per tag. Not a ctags-compatible output format, just a plain
//! dump suitable for piping through `grep`/`less`.

use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use svtags::host::{TerminalDiagnostics, VecSink};
use svtags::{Language, ScanConfig, Scanner};

fn main() -> ExitCode {
    match run(env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut path: Option<PathBuf> = None;
    let mut qualified = false;
    let mut verbose = false;

    for arg in args {
        match arg.as_str() {
            "--qualified" => qualified = true,
            "-v" | "--verbose" => verbose = true,
            other if path.is_none() => path = Some(PathBuf::from(other)),
            other => return Err(format!("unexpected argument: {}", other).into()),
        }
    }

    let path = path.ok_or("usage: svtags [--qualified] [-v|--verbose] <file>")?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| format!("{}: no file extension to detect language from", path.display()))?;
    let language = Language::from_extension(ext)
        .ok_or_else(|| format!("{}: unrecognized extension '{}'", path.display(), ext))?;

    let source = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;

    let mut config = ScanConfig::new(language);
    config.qualified_tags = qualified;

    let mut sink = VecSink::default();
    let mut diag = TerminalDiagnostics { verbose };
    Scanner::scan_str(&source, config, &mut sink, &mut diag);

    for tag in sink.tags {
        match &tag.scope_name {
            Some(scope) => println!(
                "{}\t{}\t{}\t{}",
                tag.name,
                tag.kind,
                tag.position,
                format!("scope={}", scope).dimmed()
            ),
            None => println!("{}\t{}\t{}", tag.name, tag.kind, tag.position),
        }
    }

    Ok(())
}
