use crate::engine::Loader;
use crate::engine::registry::{ReplacementRegistry, StringReplacer};
use crate::tables::Tables;
use std::time::{Duration, Instant};

/// Loading context.
///
/// This holds the environment a patch run needs around the text itself;
/// today that is the source label stamped onto diagnostics.
#[derive(Debug, Clone)]
pub struct Context {
    /// Label identifying where the patch text came from (a file name,
    /// usually). Shown in diagnostics.
    pub source: String,
}

impl Default for Context {
    fn default() -> Self {
        Self { source: "<patch>".to_string() }
    }
}

/// Options that affect loading behavior.
///
/// This is intentionally minimal today and will grow as more of the
/// patch dialect is implemented.
#[derive(Debug, Clone, Default)]
pub struct Options {
    // later: strict section headers, dialect toggles, etc.
}

/// One recorded warning, with its source locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Source label from the [`Context`].
    pub source: String,
    /// 1-based line number within the patch text.
    pub line: u32,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.source, self.line, self.message)
    }
}

/// One registered string replacement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Replacement {
    /// The default text being replaced, as it read when the patch line
    /// was parsed.
    pub original: String,
    /// The patch-supplied override.
    pub text: String,
}

/// Result from [`load`] and [`load_with`].
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The populated replacement store.
    pub strings: StringReplacer,
    /// Warnings recorded while parsing, in file order.
    pub diagnostics: Vec<Diagnostic>,
    /// Total elapsed time spent loading.
    pub elapsed: Duration,
}

impl LoadResult {
    /// Registered replacements, sorted by original text for stable
    /// output.
    pub fn replacements(&self) -> Vec<Replacement> {
        let mut all: Vec<Replacement> = self
            .strings
            .iter()
            .map(|(original, text)| Replacement { original: original.to_string(), text: text.to_string() })
            .collect();
        all.sort();
        all
    }
}

/// Load `patch` against the stock tables with a default [`Context`].
///
/// # Example
/// ```
/// use patchling::load;
///
/// let out = load("[STRINGS]\nGOTARMOR = Armor acquired.\n");
/// assert_eq!(out.strings.resolve(patchling::text::english::GOTARMOR), "Armor acquired.");
/// ```
pub fn load(patch: &str) -> LoadResult {
    load_with(patch, &Context::default(), &Options::default())
}

/// Load `patch` with the provided `context`/`options`.
///
/// Builds the stock tables, runs the whole patch, and returns the
/// populated store. Nothing in a patch can make this fail; a thoroughly
/// broken input yields an empty store and a list of diagnostics.
pub fn load_with(patch: &str, context: &Context, _options: &Options) -> LoadResult {
    let start = Instant::now();

    let tables = Tables::doom();
    let mut strings = StringReplacer::new();
    let diagnostics = Loader::new(&tables, &context.source).run(patch, &mut strings);

    LoadResult { strings, diagnostics, elapsed: start.elapsed() }
}

/// Run `patch` against caller-owned tables and registry.
///
/// This is the embedding entry point: keep the [`Tables`] around, stage
/// default overrides through [`Tables::bank_mut`] between runs, and
/// collect replacements in your own [`ReplacementRegistry`]. Returns
/// the diagnostics recorded during the run.
pub fn load_into(
    patch: &str,
    context: &Context,
    tables: &Tables,
    registry: &mut dyn ReplacementRegistry,
) -> Vec<Diagnostic> {
    Loader::new(tables, &context.source).run(patch, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::english;

    #[test]
    fn load_applies_a_realistic_patch() {
        let patch = "\
# demo patch
[STRINGS]
GOTARMOR = Armor acquired.
GOTCLIP = Ammo clip!
FOOBAR = baz
HUSTR_E1M1 = E1M1: Landing Pad
";
        let out = load(patch);

        assert!(out.diagnostics.is_empty());
        assert_eq!(out.strings.len(), 3);
        assert_eq!(out.strings.resolve(english::GOTARMOR), "Armor acquired.");
        assert_eq!(out.strings.resolve(english::HUSTR_E1M1), "E1M1: Landing Pad");
        // Untouched defaults pass through.
        assert_eq!(out.strings.resolve(english::GOTMEGA), english::GOTMEGA);
    }

    #[test]
    fn load_with_stamps_the_source_onto_diagnostics() {
        let ctx = Context { source: "custom.bex".to_string() };
        let out = load_with("[STRINGS]\nbroken line\n", &ctx, &Options::default());

        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].source, "custom.bex");
        assert_eq!(out.diagnostics[0].to_string(), "custom.bex:2: Failed to parse assignment");
        assert!(out.strings.is_empty());
    }

    #[test]
    fn replacements_are_sorted_and_deduplicated() {
        let out = load("[STRINGS]\nGOTCLIP = first\nGOTCLIP = second\nGOTARMOR = armor\n");

        let all = out.replacements();
        assert_eq!(all.len(), 2);
        // Sorted by original text: "Picked up a clip." before
        // "Picked up the armor.".
        assert_eq!(all[0].original, english::GOTCLIP);
        assert_eq!(all[0].text, "second");
        assert_eq!(all[1].original, english::GOTARMOR);
        assert_eq!(all[1].text, "armor");
    }

    #[test]
    fn load_into_supports_staged_defaults() {
        let mut tables = Tables::doom();
        let id = tables.mnemonics().lookup("QUITMSG").unwrap();
        tables.bank_mut().set_default(id, "leaving so soon?");

        let ctx = Context::default();
        let mut replacer = StringReplacer::new();
        let diagnostics =
            load_into("[STRINGS]\nQUITMSG = come back!\n", &ctx, &tables, &mut replacer);

        assert!(diagnostics.is_empty());
        assert_eq!(replacer.resolve("leaving so soon?"), "come back!");
    }
}
