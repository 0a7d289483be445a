//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::line::{Line, StressPolicy, StressScheme};
use crate::meter::{classify, Foot};
use crate::phonetic::{consonance_form, pseudo_phonetic};
use crate::rhyme::{RhymeMatcher, RhymeVerdict};
use crate::verse::{VerseAnalyzer, VerseInfo};

use super::args::{Cli, Commands, OutputFormat};
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Sample lines of the demo run, one per foot.
pub const DEMO_LINES: [&str; 5] = [
    "Мои́ боги́ни! что́ вы? где́ вы?",
    "Выхожу́ оди́н я на доро́гу...",
    "Ту́чки небе́сные, ве́чные стра́нники…",
    "Не с го́р побежа́ли ручьи́",
    "О, весна́ без конца́ и без кра́ю —",
];

/// Sample stanza of the demo run.
pub const DEMO_VERSE: [&str; 6] = [
    "Не ве́тер бушу́ет над бо́ром,",
    "Не с го́р побежа́ли ручьи́ -",
    "Моро́з-воево́да дозо́ром",
    "Обхо́дит владе́нья свои́.",
    "Моро́з-воево́да позо́ром",
    "Моро́з-воево́да дозо́ром",
];

/// Everything the `line` command reports about one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// The line as given
    pub text: String,
    /// Stress scheme
    pub scheme: StressScheme,
    /// Feet consistent with the scheme
    pub meters: Vec<Foot>,
    /// Clause
    pub clause: String,
    /// Words holding the clause
    pub clause_words: String,
    /// Anacrusis
    pub anacrusis: String,
}

impl LineReport {
    /// Analyze `text` under `policy`.
    pub fn build(text: &str, policy: StressPolicy) -> crate::Result<Self> {
        let line = Line::new(text);
        let scheme = line.try_stress_scheme(policy)?;
        Ok(Self {
            text: text.to_string(),
            meters: classify(&scheme),
            scheme,
            clause: line.clause(),
            clause_words: line.clause_as_words(),
            anacrusis: line.anacrusis(),
        })
    }
}

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    let config = PersistentConfig::load_from(config_path)?;

    match cli.command {
        Commands::Line {
            lines,
            format,
            policy,
        } => cmd_line(&lines, &config.merge_with_cli(None, policy, format)),
        Commands::Meter { scheme } => cmd_meter(&scheme),
        Commands::Rhyme {
            first,
            second,
            lines,
            threshold,
        } => cmd_rhyme(
            &first,
            &second,
            lines,
            &config.merge_with_cli(threshold, None, None),
        ),
        Commands::Verse {
            file,
            name,
            format,
            threshold,
        } => cmd_verse(
            file.as_deref(),
            &name,
            &config.merge_with_cli(threshold, None, format),
        ),
        Commands::Phonetic { clauses } => cmd_phonetic(&clauses),
        Commands::Demo => cmd_demo(&config),
        Commands::Settings {
            set_threshold,
            set_policy,
            set_format,
            reset,
        } => cmd_settings(config_path, config, set_threshold, set_policy, set_format, reset),
    }
}

/// Line command
fn cmd_line(lines: &[String], config: &PersistentConfig) -> Result<()> {
    let policy = config.stress_policy();
    let reports = lines
        .iter()
        .map(|text| {
            LineReport::build(text, policy).with_context(|| format!("Malformed line: {}", text))
        })
        .collect::<Result<Vec<_>>>()?;

    match config.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                print_line_report(report);
            }
        }
    }
    Ok(())
}

fn format_meters(meters: &[Foot]) -> String {
    if meters.is_empty() {
        "irregular".yellow().to_string()
    } else {
        meters
            .iter()
            .map(|foot| foot.name())
            .collect::<Vec<_>>()
            .join(", ")
            .green()
            .to_string()
    }
}

fn print_line_report(report: &LineReport) {
    println!("{} {}", "Line:".bold(), report.text);
    println!("  {:<11}{}", "Scheme:", report.scheme.to_string().cyan());
    println!("  {:<11}{}", "Metre:", format_meters(&report.meters));
    println!("  {:<11}{}", "Clause:", report.clause);
    println!("  {:<11}{}", "Words:", report.clause_words);
    println!("  {:<11}{}", "Anacrusis:", report.anacrusis);
}

/// Meter command
fn cmd_meter(scheme: &str) -> Result<()> {
    let parsed: StressScheme = scheme.parse()?;
    println!("{} {}", "Scheme:".bold(), parsed.to_string().cyan());
    println!("{} {}", "Metre:".bold(), format_meters(&classify(&parsed)));
    Ok(())
}

/// Rhyme command
fn cmd_rhyme(first: &str, second: &str, as_lines: bool, config: &PersistentConfig) -> Result<()> {
    let matcher = RhymeMatcher::with_threshold(config.threshold())?;
    let (a, b) = if as_lines {
        (Line::new(first).clause(), Line::new(second).clause())
    } else {
        (first.to_lowercase(), second.to_lowercase())
    };
    if a.is_empty() || b.is_empty() {
        println!("{}", "A clause is empty: no stress mark found".yellow());
    }

    let verdict = matcher.compare(&a, &b);
    println!("{} {} / {}", "Clauses:".bold(), a, b);
    print_verdict(&verdict, matcher.threshold());
    Ok(())
}

fn print_verdict(verdict: &RhymeVerdict, threshold: f64) {
    println!("  {:<12}{:.3}", "Ratio:", verdict.ratio);
    if let Some(consonance) = verdict.consonance_ratio {
        println!("  {:<12}{:.3}", "Consonance:", consonance);
    }
    println!("  {:<12}{:.3}", "Threshold:", threshold);
    let result = if verdict.alike {
        "alike".green().bold()
    } else {
        "different".red()
    };
    println!("  {:<12}{}", "Result:", result);
}

/// Read stanza lines, skipping blank ones
pub fn read_verse<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read verse line")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

/// Verse command
fn cmd_verse(file: Option<&Path>, name: &str, config: &PersistentConfig) -> Result<()> {
    let lines = match file {
        Some(path) => {
            let handle = std::fs::File::open(path)
                .with_context(|| format!("Failed to open verse file: {}", path.display()))?;
            read_verse(BufReader::new(handle))?
        }
        None => read_verse(io::stdin().lock())?,
    };
    if lines.is_empty() {
        bail!("No verse lines to analyze");
    }

    let analyzer = VerseAnalyzer::new(RhymeMatcher::with_threshold(config.threshold())?.cached());
    let info = analyzer.try_analyze(&lines, name)?;

    match config.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Text => print_verse(&info),
    }
    Ok(())
}

fn print_verse(info: &VerseInfo) {
    println!(
        "{} ({} lines)  scheme {}  {}",
        info.name.bold(),
        info.line_count,
        info.scheme_string().cyan(),
        info.scheme_letters().cyan().bold()
    );
    let letters: Vec<char> = info.scheme_letters().chars().collect();
    for line in &info.lines {
        let label = letters.get(line.index - 1).copied().unwrap_or('-');
        print!(
            "  {:>2} [{}] {:<12} {:<14}",
            line.index,
            label,
            line.scheme.to_string(),
            line.rhyme
        );
        if line.rhymes_with.is_empty() {
            println!();
        } else {
            let links: Vec<String> = line
                .rhymes_with
                .iter()
                .map(|link| format!("{} ({})", link.words, link.line))
                .collect();
            println!("→ {}", links.join(", "));
        }
    }
}

/// Phonetic command
fn cmd_phonetic(clauses: &[String]) -> Result<()> {
    for clause in clauses {
        let clause = clause.to_lowercase();
        let form = pseudo_phonetic(&clause);
        let consonance: String = consonance_form(&clause).into_iter().collect();
        println!("{} {}", "Input:".bold(), clause);
        println!("  {:<15}{}", "Pseudo-phonetic:", form.to_string().cyan());
        println!("  {:<15}{}", "Consonance:", consonance.cyan());
    }
    Ok(())
}

/// Demo command
fn cmd_demo(config: &PersistentConfig) -> Result<()> {
    for text in DEMO_LINES {
        print_line_report(&LineReport::build(text, StressPolicy::Ignore)?);
        println!();
    }

    let analyzer = VerseAnalyzer::new(RhymeMatcher::with_threshold(config.threshold())?.cached());
    let info = analyzer.analyze(&DEMO_VERSE, "NEKR");
    print_verse(&info);
    println!();
    for line in &info.lines {
        for link in &line.rhymes_with {
            println!(
                "Line {}: {} rhymes with {} from line {}",
                line.index, line.rhyme, link.words, link.line
            );
        }
    }
    Ok(())
}

/// Settings command
fn cmd_settings(
    config_path: Option<&Path>,
    mut config: PersistentConfig,
    set_threshold: Option<f64>,
    set_policy: Option<StressPolicy>,
    set_format: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = PersistentConfig::default();
        config.save_to(config_path)?;
        println!("{}", "Settings reset to defaults".green());
    } else if set_threshold.is_some() || set_policy.is_some() || set_format.is_some() {
        if let Some(threshold) = set_threshold {
            RhymeMatcher::with_threshold(threshold)?;
        }
        config = config.merge_with_cli(set_threshold, set_policy, set_format);
        config.save_to(config_path)?;
        println!("{}", "Settings updated".green());
    }

    let path = config_file_path_with_override(config_path)?;
    println!("{} {}", "Config file:".bold(), path.display());
    println!("  {:<14}{}", "Threshold:", config.threshold());
    println!("  {:<14}{}", "Stress policy:", config.stress_policy());
    println!("  {:<14}{}", "Format:", config.format());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_report() {
        let report = LineReport::build(DEMO_LINES[0], StressPolicy::Ignore).unwrap();
        assert_eq!(report.scheme.to_string(), "010101010");
        assert_eq!(report.meters, vec![Foot::Iambus]);
        assert_eq!(report.clause, "е́вы");
        assert_eq!(report.clause_words, "где́вы");
        assert_eq!(report.anacrusis, "мои́");
    }

    #[test]
    fn test_line_report_strict_policy() {
        assert!(LineReport::build("\u{301}а", StressPolicy::Strict).is_err());
        assert!(LineReport::build("\u{301}а", StressPolicy::Ignore).is_ok());
    }

    #[test]
    fn test_line_report_json() {
        let report = LineReport::build("Не с го́р побежа́ли ручьи́", StressPolicy::Ignore).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["scheme"], "01001001");
        assert_eq!(json["meters"], serde_json::json!(["amphibrach"]));
    }

    #[test]
    fn test_read_verse_skips_blank_lines() {
        let input = "Моро́з-воево́да дозо́ром\n\n   \r\nОбхо́дит владе́нья свои́.\r\n";
        let lines = read_verse(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["Моро́з-воево́да дозо́ром", "Обхо́дит владе́нья свои́."]);
    }

    #[test]
    fn test_demo_meters_cover_every_foot() {
        let meters: Vec<Vec<Foot>> = DEMO_LINES
            .iter()
            .map(|text| LineReport::build(text, StressPolicy::Ignore).unwrap().meters)
            .collect();
        let expected: Vec<Vec<Foot>> = Foot::ALL.iter().map(|&foot| vec![foot]).collect();
        assert_eq!(meters, expected);
    }
}
