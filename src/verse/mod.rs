//! Stanza-level rhyme analysis.
//!
//! Every line's clause is compared with every other line's clause. The
//! result lists, per line, the words that carry its rhyme and the lines it
//! rhymes with, and labels rhyme groups: when lines `i` and `j` rhyme and
//! either of them is still unlabeled, both get label `i` (1-based).
//!
//! ```rust
//! use versemeter::verse::analyze_verse;
//!
//! let info = analyze_verse(
//!     &["Не ве́тер бушу́ет над бо́ром,", "Не с го́р побежа́ли ручьи́ -",
//!       "Моро́з-воево́да дозо́ром", "Обхо́дит владе́нья свои́."],
//!     "NEKR",
//! );
//! assert_eq!(info.scheme_string(), "1212");
//! assert_eq!(info.scheme_letters(), "ABAB");
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VerseError};
use crate::line::{Line, StressScheme};
use crate::meter::{classify, Foot};
use crate::rhyme::RhymeMatcher;

/// Another line a line rhymes with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeLink {
    /// Clause words of the other line
    pub words: String,
    /// 1-based index of the other line
    pub line: usize,
}

/// Verdict for one unordered pair of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymePair {
    /// 1-based index of the earlier line
    pub first: usize,
    /// 1-based index of the later line
    pub second: usize,
    /// Clause of the earlier line
    pub first_clause: String,
    /// Clause of the later line
    pub second_clause: String,
    /// Whether the clauses are alike
    pub alike: bool,
}

/// Analysis of a single line within a stanza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInfo {
    /// 1-based line index
    pub index: usize,
    /// The line as given
    pub text: String,
    /// Clause of the line
    pub clause: String,
    /// Words holding the clause
    pub rhyme: String,
    /// Stress scheme
    pub scheme: StressScheme,
    /// Feet consistent with the scheme
    pub meters: Vec<Foot>,
    /// Lines this one rhymes with, in line order
    pub rhymes_with: Vec<RhymeLink>,
}

/// Analysis of a stanza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseInfo {
    /// Name given to the stanza
    pub name: String,
    /// Number of lines
    pub line_count: usize,
    /// Rhyme group label per line, `None` for lines without a rhyme
    pub groups: Vec<Option<usize>>,
    /// Per-line details
    pub lines: Vec<LineInfo>,
    /// Every unordered pair of lines with its verdict
    pub pairs: Vec<RhymePair>,
}

impl VerseInfo {
    /// Group labels as digits, `-` for unlabeled lines (e.g. `121211`).
    pub fn scheme_string(&self) -> String {
        self.groups
            .iter()
            .map(|group| match group {
                Some(label) => label.to_string(),
                None => "-".to_string(),
            })
            .collect()
    }

    /// Group labels as letters in order of first appearance (e.g. `ABAB`).
    pub fn scheme_letters(&self) -> String {
        let mut letters: FxHashMap<usize, char> = FxHashMap::default();
        self.groups
            .iter()
            .map(|group| match group {
                Some(label) => {
                    let next = letters.len();
                    *letters.entry(*label).or_insert_with(|| group_letter(next))
                }
                None => '-',
            })
            .collect()
    }

    /// Pairs whose clauses are alike.
    pub fn rhyme_pairs(&self) -> impl Iterator<Item = &RhymePair> {
        self.pairs.iter().filter(|pair| pair.alike)
    }
}

fn group_letter(n: usize) -> char {
    const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    LETTERS.get(n).map_or('?', |&b| b as char)
}

/// Pairwise rhyme analysis over a stanza.
#[derive(Debug)]
pub struct VerseAnalyzer {
    matcher: RhymeMatcher,
}

impl Default for VerseAnalyzer {
    fn default() -> Self {
        Self::new(RhymeMatcher::new().cached())
    }
}

impl VerseAnalyzer {
    /// Analyzer using `matcher` for every pair.
    pub fn new(matcher: RhymeMatcher) -> Self {
        Self { matcher }
    }

    /// The matcher in use.
    pub fn matcher(&self) -> &RhymeMatcher {
        &self.matcher
    }

    /// Analyze a stanza, failing on an empty one.
    pub fn try_analyze<S: AsRef<str>>(&self, verse: &[S], name: &str) -> Result<VerseInfo> {
        if verse.is_empty() {
            return Err(VerseError::EmptyVerse);
        }
        Ok(self.analyze(verse, name))
    }

    /// Analyze a stanza.
    pub fn analyze<S: AsRef<str>>(&self, verse: &[S], name: &str) -> VerseInfo {
        let lines: Vec<Line> = verse.iter().map(|raw| Line::new(raw.as_ref())).collect();
        let clauses: Vec<String> = lines.iter().map(Line::clause).collect();
        let words: Vec<String> = lines.iter().map(Line::clause_as_words).collect();
        let n = lines.len();

        tracing::debug!(name, lines = n, "analyzing verse");

        let pairs = self.pair_verdicts(&clauses);
        let mut alike = vec![false; n * n];
        for pair in &pairs {
            let (i, j) = (pair.first - 1, pair.second - 1);
            alike[i * n + j] = pair.alike;
            alike[j * n + i] = pair.alike;
        }

        let mut groups: Vec<Option<usize>> = vec![None; n];
        let mut infos = Vec::with_capacity(n);
        for (i, line) in lines.iter().enumerate() {
            let mut rhymes_with = Vec::new();
            for j in (0..n).filter(|&j| j != i) {
                if !alike[i * n + j] {
                    continue;
                }
                rhymes_with.push(RhymeLink {
                    words: words[j].clone(),
                    line: j + 1,
                });
                if groups[i].is_none() || groups[j].is_none() {
                    groups[i] = Some(i + 1);
                    groups[j] = Some(i + 1);
                }
            }
            let scheme = line.stress_scheme();
            infos.push(LineInfo {
                index: i + 1,
                text: verse[i].as_ref().to_string(),
                clause: clauses[i].clone(),
                rhyme: words[i].clone(),
                meters: classify(&scheme),
                scheme,
                rhymes_with,
            });
        }

        let info = VerseInfo {
            name: name.to_string(),
            line_count: n,
            groups,
            lines: infos,
            pairs,
        };
        tracing::debug!(name, scheme = %info.scheme_string(), "verse analyzed");
        info
    }

    fn pair_indices(n: usize) -> Vec<(usize, usize)> {
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect()
    }

    fn verdict(&self, clauses: &[String], (i, j): (usize, usize)) -> RhymePair {
        RhymePair {
            first: i + 1,
            second: j + 1,
            first_clause: clauses[i].clone(),
            second_clause: clauses[j].clone(),
            alike: self.matcher.alike(&clauses[i], &clauses[j]),
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn pair_verdicts(&self, clauses: &[String]) -> Vec<RhymePair> {
        Self::pair_indices(clauses.len())
            .into_iter()
            .map(|pair| self.verdict(clauses, pair))
            .collect()
    }

    #[cfg(feature = "rayon")]
    fn pair_verdicts(&self, clauses: &[String]) -> Vec<RhymePair> {
        use rayon::prelude::*;
        Self::pair_indices(clauses.len())
            .into_par_iter()
            .map(|pair| self.verdict(clauses, pair))
            .collect()
    }
}

/// Analyze a stanza with the default analyzer.
pub fn analyze_verse<S: AsRef<str>>(verse: &[S], name: &str) -> VerseInfo {
    VerseAnalyzer::default().analyze(verse, name)
}

/// Analyze a stanza with the default analyzer, failing on an empty one.
pub fn try_analyze_verse<S: AsRef<str>>(verse: &[S], name: &str) -> Result<VerseInfo> {
    VerseAnalyzer::default().try_analyze(verse, name)
}
