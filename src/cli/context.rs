//! CLI context - bundles settings and flags, runs one generation.

use std::io::BufRead;

use chrono::Utc;
use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, warn};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::pass::{self, Hints, Mode, StrengthReport};
use crate::settings::Settings;
use crate::{Error, Result, export, rand, terminal};

/// Why a run stopped before the end.
#[derive(Debug)]
pub enum Stop {
    /// Early exit - not an error, just done.
    Done,
    Failed(Error),
}

impl From<Error> for Stop {
    fn from(err: Error) -> Self {
        Stop::Failed(err)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Load saved settings and lay the flags over them.
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load settings");
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });
        let settings = apply_flags(&saved_settings, &flags);

        Self {
            settings,
            saved_settings,
            flags,
        }
    }

    /// Run CLI. Returns `Err(Stop::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> std::result::Result<(), Stop> {
        self.handle_theme();
        self.handle_save();
        self.handle_estimate()?;
        self.handle_check()?;
        self.generate_output()?;
        Ok(())
    }

    fn handle_theme(&mut self) {
        let Some(theme) = self.flags.theme_change(self.saved_settings.theme) else {
            return;
        };
        self.settings.theme = theme;
        self.saved_settings.theme = theme;
        match self.saved_settings.save_to_file() {
            Ok(()) => prompts::theme_set(theme),
            Err(e) => prompts::warn(&format!("Failed to save theme: {}", e)),
        }
    }

    fn handle_save(&mut self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => {
                self.saved_settings = self.settings.clone();
                prompts::settings_saved(&Settings::path());
            }
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_estimate(&self) -> std::result::Result<(), Stop> {
        if !self.flags.estimate {
            return Ok(());
        }
        if self.settings.mode == Mode::Passphrase {
            prompts::estimate_unavailable();
            return Err(Stop::Done);
        }

        let report = pass::score(None, &self.settings.config().hints());
        self.render(&report);
        Err(Stop::Done)
    }

    fn handle_check(&self) -> std::result::Result<(), Stop> {
        if !self.flags.check {
            return Ok(());
        }

        prompts::password_prompt();
        let mut input = String::new();
        std::io::stdin().lock().read_line(&mut input).map_err(Error::from)?;
        if !quiet::skip_prompt() {
            eprintln!();
        }
        let password = input.trim_end_matches(['\r', '\n']);

        let report = pass::score(Some(password), &Hints::default());
        input.zeroize();

        if quiet::enabled() {
            println!("{}", report.rating());
        } else {
            self.render(&report);
        }
        Err(Stop::Done)
    }

    /// Generate one credential and hand it to every requested output.
    pub fn generate_output(&mut self) -> Result<()> {
        let config = self.settings.config();
        debug!(source = rand::source_name(self.flags.seed), mode = %config.mode(), "generating");

        if let Some(seed) = self.flags.seed {
            prompts::seeded_output(seed);
        }
        let mut rng = rand::for_seed(self.flags.seed);
        let mut credential = pass::generate(&config, &mut rng)?;
        let report = pass::score(Some(&credential), &config.hints());

        terminal::print_credential(&credential, self.settings.theme);
        self.render(&report);

        if self.flags.clipboard {
            match copy_to_clipboard(&credential) {
                Ok(()) => prompts::clipboard_copied(),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
        }

        let exported = self.export(&credential, config.mode(), &report);
        credential.zeroize();
        exported
    }

    fn export(&self, credential: &str, mode: Mode, report: &StrengthReport) -> Result<()> {
        if self.flags.export.is_empty() {
            return Ok(());
        }

        let at = Utc::now();
        let record = export::Record::new(credential, mode, report, at);
        for &format in &self.flags.export {
            let path = export::write(&self.flags.output, format, &record, at)?;
            prompts::exported(&path);
        }
        Ok(())
    }

    fn render(&self, report: &StrengthReport) {
        if quiet::enabled() {
            return;
        }
        terminal::print_meter(report);
        if self.settings.show_details {
            terminal::print_details(report);
        }
    }
}

/// Lay explicit flags over `saved`.
pub fn apply_flags(saved: &Settings, flags: &CliFlags) -> Settings {
    let mut settings = saved.clone();

    if let Some(mode) = flags.mode {
        settings.mode = mode;
    }
    if let Some(length) = flags.length {
        settings.length = length;
    }
    if let Some(on) = flags.upper() {
        settings.uppercase = on;
    }
    if let Some(on) = flags.lower() {
        settings.lowercase = on;
    }
    if let Some(on) = flags.numbers() {
        settings.numbers = on;
    }
    if let Some(on) = flags.symbols() {
        settings.symbols = on;
    }
    if let Some(ref chars) = flags.charset {
        settings.custom_charset = chars.clone();
    }
    if let Some(words) = flags.words {
        settings.word_count = words;
    }
    if let Some(on) = flags.append_number() {
        settings.append_number = on;
    }
    if let Some(on) = flags.details() {
        settings.show_details = on;
    }

    settings
}

fn copy_to_clipboard(credential: &str) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    ctx.set_contents(credential.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
