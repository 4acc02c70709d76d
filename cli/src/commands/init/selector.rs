//! # Lintstart Version Selector
//!
//! File: cli/src/commands/init/selector.rs
//! Author: Christi Mahu
//!
//! Interactive choice between the enhanced and the legacy pipeline, used when
//! no mode flag is given. "View comparison" prints a feature table, waits for
//! Enter and shows the menu again.
//!
use super::pipeline::Mode;
use crate::common::ui::prompts::Prompter;
use crate::core::error::Result;
use tracing::debug;

const CHOICES: [&str; 3] = [
    "Enhanced - presets, framework support, progress and editor config (recommended)",
    "Legacy - the classic, fixed standard setup",
    "View the comparison of both versions",
];

/// (feature, enhanced, legacy)
const FEATURES: [(&str, &str, &str); 10] = [
    ("Project detection", "language + framework", "language + framework"),
    ("Configuration presets", "4 presets", "standard only"),
    ("Progress display", "yes", "yes"),
    ("Editor (VSCode) config", "yes", "yes"),
    ("Framework rules and packages", "Next.js, Vue, Vite", "no"),
    ("TSLint support", "optional", "no"),
    ("package.json scripts", "yes", "no"),
    ("Remediation hints", "yes", "yes"),
    ("Legacy Node.js support", "pinned versions", "pinned versions"),
    ("Stability", "new", "proven"),
];

/// # Select Mode (`select_mode`)
///
/// Loops until the user picks the enhanced or the legacy pipeline.
pub fn select_mode(prompter: &dyn Prompter) -> Result<Mode> {
    let items: Vec<String> = CHOICES.iter().map(|c| c.to_string()).collect();
    loop {
        match prompter.select("Choose the lintstart version to run", &items, 0)? {
            0 => return Ok(Mode::Enhanced),
            1 => return Ok(Mode::Legacy),
            _ => {
                debug!("Showing the version comparison");
                println!("\n{}", comparison_table());
                prompter.pause("Press Enter to return to the menu")?;
            }
        }
    }
}

/// Renders the feature comparison as an aligned text table.
pub fn comparison_table() -> String {
    let w0 = column_width("Feature", FEATURES.iter().map(|row| row.0));
    let w1 = column_width("Enhanced", FEATURES.iter().map(|row| row.1));
    let w2 = column_width("Legacy", FEATURES.iter().map(|row| row.2));

    let mut lines = vec![
        "📊 Version comparison".to_string(),
        format!("{:<w0$}  {:<w1$}  {:<w2$}", "Feature", "Enhanced", "Legacy"),
        format!("{}  {}  {}", "-".repeat(w0), "-".repeat(w1), "-".repeat(w2)),
    ];
    lines.extend(
        FEATURES
            .iter()
            .map(|(feature, enhanced, legacy)| format!("{:<w0$}  {:<w1$}  {:<w2$}", feature, enhanced, legacy)),
    );
    lines.join("\n")
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .fold(header.chars().count(), usize::max)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ui::prompts::scripted::ScriptedPrompter;

    #[test]
    fn test_direct_choices() -> Result<()> {
        assert_eq!(select_mode(&ScriptedPrompter::new(&[0], &[]))?, Mode::Enhanced);
        assert_eq!(select_mode(&ScriptedPrompter::new(&[1], &[]))?, Mode::Legacy);
        Ok(())
    }

    #[test]
    fn test_comparison_loops_back() -> Result<()> {
        let prompter = ScriptedPrompter::new(&[2, 2, 1], &[]);
        assert_eq!(select_mode(&prompter)?, Mode::Legacy);
        assert_eq!(prompter.pauses(), 2);
        Ok(())
    }

    #[test]
    fn test_comparison_table_rows() {
        let table = comparison_table();
        assert_eq!(table.lines().count(), 3 + FEATURES.len());
        assert!(table.contains("Framework rules and packages"));
        assert!(!table.contains("language only"));
        assert!(table.lines().nth(1).unwrap().starts_with("Feature"));
    }
}
