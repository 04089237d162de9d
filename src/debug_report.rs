use patchling::{Diagnostic, LoadResult};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(source: &str, result: &LoadResult, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Loaded patch: {source}"), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Diagnostics ━━━", ansi::GRAY));
    if result.diagnostics.is_empty() {
        println!("{}", palette.dim("  none"));
    } else {
        for diagnostic in &result.diagnostics {
            println!("  {}", fmt_diagnostic(diagnostic, &palette));
        }
    }

    println!("\n{}", palette.paint("━━━ Replacements ━━━", ansi::GRAY));
    let replacements = result.replacements();
    if replacements.is_empty() {
        println!("{}", palette.dim("  No replacements registered"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • The patch has no [STRINGS] section");
        println!("  • Lines failed the KEY = VALUE grammar (see diagnostics above)");
        println!("  • The mnemonics are unknown to this build");
    } else {
        for (idx, replacement) in replacements.iter().enumerate() {
            println!(
                "  {} {} {} {}",
                palette.paint(format!("[{}]", idx), ansi::GRAY),
                palette.dim(preview(&replacement.original)),
                palette.dim("→"),
                palette.bold(palette.paint(preview(&replacement.text), ansi::GREEN)),
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Replacements: {}  │  Warnings: {}",
        palette.paint(format!("{:?}", result.elapsed), ansi::GREEN),
        palette.paint(result.strings.len().to_string(), ansi::CYAN),
        palette.dim(result.diagnostics.len().to_string()),
    );
    println!();
}

fn fmt_diagnostic(diagnostic: &Diagnostic, palette: &ansi::Palette) -> String {
    format!(
        "{} {}",
        palette.paint(format!("{}:{}", diagnostic.source, diagnostic.line), ansi::YELLOW),
        diagnostic.message
    )
}

/// Single-line preview of possibly multi-line text, truncated for the
/// report.
fn preview(s: &str) -> String {
    let flat = s.replace('\n', "\\n");
    let mut out: String = flat.chars().take(48).collect();
    if flat.chars().count() > 48 {
        out.push('…');
    }
    out
}
