// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graphedit CLI entrypoint.
//!
//! Opens a graph document (created on first save if it does not exist) in the terminal editor.

use std::error::Error;
use std::path::Path;

use graphedit::editor::Editor;
use graphedit::model::fixtures::sample_graph;
use graphedit::store::{GraphFile, WriteDurability};
use graphedit::view::ViewConfig;

const DEFAULT_GRAPH_PATH: &str = "graph.json";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<graph.json>] [--durable-writes] [--log-file <path>]\n  {program} --demo [--log-file <path>]\n\nIf <graph.json> is omitted, `{DEFAULT_GRAPH_PATH}` in the current directory is used.\nA missing file starts an empty graph that is created on the first save (Ctrl-S).\n--demo opens a built-in four-node graph with no document and cannot be combined with a path.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\n--log-file appends diagnostics to <path>; the filter is read from GRAPHEDIT_LOG (default `info`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    graph_path: Option<String>,
    durable_writes: bool,
    log_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.log_file = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.graph_path.is_some() {
                    return Err(());
                }
                options.graph_path = Some(arg);
            }
        }
    }

    if options.demo && (options.graph_path.is_some() || options.durable_writes) {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "graphedit".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if let Some(log_file) = options.log_file.as_deref() {
            graphedit::logging::init_file_logging(Path::new(log_file))?;
        }

        let editor = if options.demo {
            Editor::new(sample_graph())
        } else {
            let path = options
                .graph_path
                .unwrap_or_else(|| DEFAULT_GRAPH_PATH.to_owned());
            let durability = if options.durable_writes {
                WriteDurability::Durable
            } else {
                WriteDurability::BestEffort
            };
            let document = GraphFile::new(path).with_durability(durability);
            Editor::open_or_new(document, ViewConfig::default())?
        };

        graphedit::tui::run(editor)
    })();

    if let Err(err) = result {
        tracing::error!(error = %err, "graphedit exited with error");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
