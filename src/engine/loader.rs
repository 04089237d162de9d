//! Patch line streaming and section dispatch.
//!
//! The loader owns the section state walk:
//!
//! ```text
//! (no section) ──[known header]──> active handler ──[lines]──> parse_line
//!      ▲                               │
//!      └──[unknown header]─────────────┘ (end() the old section first)
//! ```
//!
//! Blank lines and `#` comments are skipped everywhere. Lines outside
//! any active section are ignored; an unknown `[NAME]` header warns
//! once and swallows its lines until the next recognized header.

use crate::Diagnostic;
use crate::engine::SectionHandler;
use crate::engine::registry::ReplacementRegistry;
use crate::tables::Tables;

/// Source locator + warning sink threaded through a patch run.
///
/// Warnings never abort the caller; they are recorded here and surfaced
/// on the load result.
#[derive(Debug)]
pub(crate) struct DiagContext<'a> {
    source: &'a str,
    line: u32,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DiagContext<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        DiagContext { source, line: 1, diagnostics: Vec::new() }
    }

    pub(crate) fn set_line(&mut self, line: u32) {
        self.line = line;
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(source = self.source, line = self.line, "{message}");
        self.diagnostics.push(Diagnostic {
            source: self.source.to_string(),
            line: self.line,
            message,
        });
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Streams patch text line by line into the section handlers.
#[derive(Debug)]
pub(crate) struct Loader<'a> {
    tables: &'a Tables,
    ctx: DiagContext<'a>,
    active: Option<SectionHandler>,
}

impl<'a> Loader<'a> {
    pub(crate) fn new(tables: &'a Tables, source: &'a str) -> Self {
        Loader { tables, ctx: DiagContext::new(source), active: None }
    }

    /// Run the whole patch against `registry`, returning the recorded
    /// diagnostics. Never fails: every anomaly degrades to
    /// skip-and-continue.
    pub(crate) fn run(mut self, patch: &str, registry: &mut dyn ReplacementRegistry) -> Vec<Diagnostic> {
        for (idx, line) in patch.lines().enumerate() {
            self.ctx.set_line(idx as u32 + 1);

            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed.starts_with('[') {
                self.switch_section(line);
                continue;
            }
            if let Some(section) = &self.active {
                section.parse_line(&mut self.ctx, line, self.tables, registry);
            }
            // Lines before any section header are ignored.
        }

        if let Some(section) = self.active.take() {
            section.end();
        }
        self.ctx.into_diagnostics()
    }

    fn switch_section(&mut self, line: &str) {
        if let Some(previous) = self.active.take() {
            previous.end();
        }

        let token = line.split_whitespace().next().unwrap_or("");
        match SectionHandler::for_header(token) {
            Some(handler) => {
                handler.start(&mut self.ctx, line);
                self.active = Some(handler);
            }
            None => self.ctx.warning(format!("Unknown section: {token}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::StringReplacer;
    use crate::text::english;

    fn run(patch: &str) -> (StringReplacer, Vec<Diagnostic>) {
        let tables = Tables::doom();
        let mut replacer = StringReplacer::new();
        let diagnostics = Loader::new(&tables, "patch.bex").run(patch, &mut replacer);
        (replacer, diagnostics)
    }

    #[test]
    fn streams_assignments_into_the_strings_section() {
        let (replacer, diagnostics) = run(
            "[STRINGS]\n\
             GOTARMOR = Armor acquired.\n\
             GOTCLIP = Ammo clip!\n",
        );

        assert!(diagnostics.is_empty());
        assert_eq!(replacer.len(), 2);
        assert_eq!(replacer.resolve(english::GOTARMOR), "Armor acquired.");
        assert_eq!(replacer.resolve(english::GOTCLIP), "Ammo clip!");
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let (replacer, diagnostics) = run(
            "# string overrides\n\
             \n\
             [STRINGS]\n\
             \n\
             # pickups\n\
             GOTSTIM = A stimpack!\n",
        );

        assert!(diagnostics.is_empty());
        assert_eq!(replacer.resolve(english::GOTSTIM), "A stimpack!");
    }

    #[test]
    fn lines_before_any_section_are_ignored() {
        let (replacer, diagnostics) = run("GOTARMOR = too early\n[STRINGS]\nGOTARMOR = in time\n");

        assert!(diagnostics.is_empty());
        assert_eq!(replacer.resolve(english::GOTARMOR), "in time");
    }

    #[test]
    fn unknown_section_warns_once_and_swallows_its_lines() {
        let (replacer, diagnostics) = run(
            "[SPRITES]\n\
             GOTARMOR = not a string line\n\
             [STRINGS]\n\
             GOTARMOR = Armor acquired.\n",
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unknown section: [SPRITES]");
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(replacer.len(), 1);
        assert_eq!(replacer.resolve(english::GOTARMOR), "Armor acquired.");
    }

    #[test]
    fn a_new_header_ends_the_previous_section() {
        let (replacer, diagnostics) = run(
            "[STRINGS]\n\
             GOTMAP = Area map\n\
             [PARS]\n\
             GOTMAP = should not register\n",
        );

        // The unknown header is diagnosed; the line under it is not a
        // strings assignment anymore.
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(replacer.resolve(english::GOTMAP), "Area map");
    }

    #[test]
    fn diagnostics_carry_the_source_locator() {
        let (_, diagnostics) = run("[STRINGS]\ngarbage\n");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].source, "patch.bex");
        assert_eq!(diagnostics[0].line, 2);
    }
}
