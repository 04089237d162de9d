//! Section handlers.
//!
//! A patch is a sequence of `[NAME]` sections; each known name has a
//! handler with a three-step lifecycle driven by the loader:
//!
//! ```text
//! [STRINGS]            -> start(header line)
//! MNEMONIC = new text  -> parse_line(..)   (repeated)
//! [NEXT] / end of file -> end()
//! ```
//!
//! Handlers form a small closed set selected by exact header-token
//! match, so dispatch is an enum, not dynamic. `[STRINGS]` is the one
//! populated variant today.

use crate::engine::parse_assignment;
use crate::engine::registry::ReplacementRegistry;
use crate::engine::DiagContext;
use crate::tables::Tables;

/// Header token introducing the strings section. Exact and
/// case-sensitive.
pub(crate) const STRINGS_HEADER: &str = "[STRINGS]";

/// The closed set of section handlers, keyed by header token.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SectionHandler {
    Strings(StringsSection),
}

impl SectionHandler {
    /// Handler for a recognized section header token, `None` for
    /// sections unknown to this build.
    pub(crate) fn for_header(token: &str) -> Option<SectionHandler> {
        match token {
            STRINGS_HEADER => Some(SectionHandler::Strings(StringsSection)),
            _ => None,
        }
    }

    pub(crate) fn start(&self, ctx: &mut DiagContext<'_>, line: &str) {
        match self {
            SectionHandler::Strings(section) => section.start(ctx, line),
        }
    }

    pub(crate) fn parse_line(
        &self,
        ctx: &mut DiagContext<'_>,
        line: &str,
        tables: &Tables,
        registry: &mut dyn ReplacementRegistry,
    ) {
        match self {
            SectionHandler::Strings(section) => section.parse_line(ctx, line, tables, registry),
        }
    }

    pub(crate) fn end(&self) {
        match self {
            SectionHandler::Strings(section) => section.end(),
        }
    }
}

/// The `[STRINGS]` section: `MNEMONIC = text` assignments registering
/// string replacements.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StringsSection;

impl StringsSection {
    /// Validate the section header. A mismatched token is diagnosed but
    /// the section still activates; a broken header must not swallow
    /// the assignments that follow it.
    pub(crate) fn start(&self, ctx: &mut DiagContext<'_>, line: &str) {
        if line.split_whitespace().next() != Some(STRINGS_HEADER) {
            ctx.warning("Parse error on section start");
        }
    }

    /// Parse one `MNEMONIC = text` line and register the replacement.
    ///
    /// A line that fails the assignment grammar is diagnosed and
    /// dropped. A well-formed line whose mnemonic is unknown is
    /// accepted silently: patches may name mnemonics that only exist
    /// in other builds of the engine.
    pub(crate) fn parse_line(
        &self,
        ctx: &mut DiagContext<'_>,
        line: &str,
        tables: &Tables,
        registry: &mut dyn ReplacementRegistry,
    ) {
        let Some((key, value)) = parse_assignment(line) else {
            ctx.warning("Failed to parse assignment");
            return;
        };

        if let Some(id) = tables.mnemonics().lookup(key) {
            // Resolve at registration time so the replacement targets
            // whatever the bank currently holds for this slot.
            let original = tables.bank().resolve(id);
            tracing::debug!(mnemonic = key, "registering string replacement");
            registry.add_string_replacement(original, value);
        }
    }

    pub(crate) fn end(&self) {
        // No per-section finalization.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::StringReplacer;
    use crate::text::english;

    fn run_lines(header: &str, lines: &[&str]) -> (StringReplacer, Vec<crate::Diagnostic>) {
        let tables = Tables::doom();
        let mut ctx = DiagContext::new("test.bex");
        let mut replacer = StringReplacer::new();
        let section = StringsSection;

        section.start(&mut ctx, header);
        for (idx, line) in lines.iter().enumerate() {
            ctx.set_line(idx as u32 + 2);
            section.parse_line(&mut ctx, line, &tables, &mut replacer);
        }
        section.end();

        (replacer, ctx.into_diagnostics())
    }

    #[test]
    fn known_mnemonic_registers_exactly_one_replacement() {
        let (replacer, diagnostics) = run_lines("[STRINGS]", &["GOTARMOR = Armor acquired."]);

        assert!(diagnostics.is_empty());
        assert_eq!(replacer.len(), 1);
        assert_eq!(replacer.resolve(english::GOTARMOR), "Armor acquired.");
    }

    #[test]
    fn unknown_mnemonic_is_silently_accepted() {
        let (replacer, diagnostics) =
            run_lines("[STRINGS]", &["FOOBAR = baz", "GOTCLIP = Ammo clip!"]);

        // No diagnostic, no registration for the unknown key, and the
        // next line still parses.
        assert!(diagnostics.is_empty());
        assert_eq!(replacer.len(), 1);
        assert_eq!(replacer.resolve(english::GOTCLIP), "Ammo clip!");
    }

    #[test]
    fn malformed_line_is_diagnosed_and_skipped() {
        let (replacer, diagnostics) =
            run_lines("[STRINGS]", &["garbage", "GOTSTIM = A stimpack!"]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Failed to parse assignment");
        assert_eq!(diagnostics[0].line, 2);
        assert_eq!(replacer.resolve(english::GOTSTIM), "A stimpack!");
    }

    #[test]
    fn later_line_wins_for_the_same_mnemonic() {
        let (replacer, _) = run_lines("[STRINGS]", &["GOTCLIP = first", "GOTCLIP = second"]);

        assert_eq!(replacer.resolve(english::GOTCLIP), "second");
        assert_eq!(replacer.len(), 1);
    }

    #[test]
    fn header_with_trailing_tokens_is_accepted() {
        let (replacer, diagnostics) = run_lines("[STRINGS] extra", &["GOTMAP = Area map"]);

        assert!(diagnostics.is_empty());
        assert_eq!(replacer.resolve(english::GOTMAP), "Area map");
    }

    #[test]
    fn mismatched_header_warns_but_still_activates() {
        let (replacer, diagnostics) = run_lines("[WRONGSECTION]", &["GOTMEDIKIT = Medical kit."]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Parse error on section start");
        assert_eq!(replacer.resolve(english::GOTMEDIKIT), "Medical kit.");
    }

    #[test]
    fn calibration_captions_never_register() {
        let (replacer, diagnostics) =
            run_lines("[STRINGS]", &["GAMMALVL0 = Brightness off", "GAMMALV22_RUS = x"]);

        assert!(diagnostics.is_empty());
        assert!(replacer.is_empty());
    }

    #[test]
    fn replacement_targets_the_current_default() {
        let mut tables = Tables::doom();
        let id = tables.mnemonics().lookup("GOTARMOR").unwrap();
        tables.bank_mut().set_default(id, "Armor, staged earlier.");

        let mut ctx = DiagContext::new("test.bex");
        let mut replacer = StringReplacer::new();
        StringsSection.parse_line(&mut ctx, "GOTARMOR = Armor, patched.", &tables, &mut replacer);

        // Keyed on the staged default, not the compiled-in constant.
        assert_eq!(replacer.resolve("Armor, staged earlier."), "Armor, patched.");
        assert_eq!(replacer.resolve(english::GOTARMOR), english::GOTARMOR);
    }
}
