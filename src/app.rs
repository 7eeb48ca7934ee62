use std::io::{self, BufRead, Write};

use crate::config::Settings;
use crate::data::loader::load_directory;
use crate::data::model::PriceCatalog;
use crate::ui::{console, html};

// ---------------------------------------------------------------------------
// Application shell: load → search loop → export
// ---------------------------------------------------------------------------

pub struct PriceMachineApp {
    pub settings: Settings,
    pub catalog: PriceCatalog,
}

impl PriceMachineApp {
    /// Scan the configured directory and report how many positions were found.
    pub fn load(settings: Settings) -> Self {
        let catalog = load_directory(&settings.source_dir, &settings.file_marker);
        println!("Loaded {} positions from price lists.", catalog.len());
        Self { settings, catalog }
    }

    /// Run the interactive session on the given streams, then export the
    /// full catalog exactly once.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) {
        if let Err(e) = console::run_session(&self.catalog, &self.settings.exit_command, input, out) {
            log::error!("Console session ended with an error: {e}");
        }
        html::export_report(&self.catalog, &self.settings.report_path);
    }

    /// [`run`](Self::run) on stdin/stdout.
    pub fn run_stdio(&self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run(stdin.lock(), &mut stdout);
    }
}
