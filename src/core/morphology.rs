// src/core/morphology.rs
use crate::core::types::Candidate;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// One piece of a decomposed lujvo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LujvoPart {
    /// The rafsi as it appears inside the compound.
    pub rafsi: String,
    /// The source root word, when the piece maps back to one. Hyphen
    /// letters and glue pieces carry no selrafsi.
    pub selrafsi: Option<String>,
    /// True when the rafsi is only proposed experimentally.
    pub experimental: bool,
}

/// Everything the generator returns for one construction query: the
/// recognized component words plus the candidate list, sorted best-first.
/// The list may be empty; that is a valid answer, not an error.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    pub components: Vec<String>,
    pub results: Vec<Candidate>,
}

/// Reverse rafsi lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelrafsiMatch {
    pub selrafsi: String,
    pub experimental: bool,
}

/// One affix from a root word's rafsi list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RafsiAffix {
    pub rafsi: String,
    pub experimental: bool,
}

/// The morphology backend boundary. The linguistic work (segmentation,
/// candidate generation, scoring, flaw tagging) happens behind this trait;
/// the plugin only consumes its outputs.
pub trait Morphology {
    /// Splits a lujvo into its rafsi. Fails with the backend's own
    /// message when the word does not decompose.
    fn decompose(&self, lujvo: &str) -> Result<Vec<LujvoPart>>;

    /// Builds lujvo candidates from a list of component words. Never
    /// fails for well-formed input; an unknown word simply produces an
    /// empty result list.
    fn generate(&self, words: &[&str]) -> Generation;

    /// Looks up which root a rafsi belongs to.
    fn selrafsi_of(&self, rafsi: &str) -> Option<SelrafsiMatch>;

    /// Lists the affixes of a root word, or `None` when it has no entry.
    fn rafsi_list(&self, word: &str) -> Option<Vec<RafsiAffix>>;
}

/// A canned-table backend: every query is answered from prepared tables.
/// This is what the demo binary and the test suite run against; it knows
/// no formation rules at all.
#[derive(Default)]
pub struct StaticMorphology {
    decompositions: HashMap<String, Vec<LujvoPart>>,
    generations: HashMap<String, Generation>,
    selrafsi: HashMap<String, SelrafsiMatch>,
    affixes: HashMap<String, Vec<RafsiAffix>>,
}

impl StaticMorphology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decomposition(mut self, lujvo: &str, parts: Vec<LujvoPart>) -> Self {
        self.decompositions.insert(lujvo.to_string(), parts);
        self
    }

    /// Registers a generation answer for a space-joined component query.
    pub fn with_generation(mut self, query: &str, generation: Generation) -> Self {
        self.generations.insert(query.to_string(), generation);
        self
    }

    pub fn with_selrafsi(mut self, rafsi: &str, selrafsi: &str, experimental: bool) -> Self {
        self.selrafsi.insert(
            rafsi.to_string(),
            SelrafsiMatch {
                selrafsi: selrafsi.to_string(),
                experimental,
            },
        );
        self
    }

    pub fn with_affixes(mut self, word: &str, affixes: Vec<RafsiAffix>) -> Self {
        self.affixes.insert(word.to_string(), affixes);
        self
    }

    /// A small illustrative table for the REPL binary. The entries are
    /// hand-picked words, not generator output.
    pub fn demo() -> Self {
        use crate::core::types::FlawMask;

        let part = |rafsi: &str, selrafsi: &str| LujvoPart {
            rafsi: rafsi.to_string(),
            selrafsi: Some(selrafsi.to_string()),
            experimental: false,
        };
        let affix = |rafsi: &str| RafsiAffix {
            rafsi: rafsi.to_string(),
            experimental: false,
        };

        Self::new()
            .with_decomposition(
                "bramlatu",
                vec![part("bra", "barda"), part("mlatu", "mlatu")],
            )
            .with_decomposition(
                "klagau",
                vec![part("kla", "klama"), part("gau", "gasnu")],
            )
            .with_generation(
                "barda mlatu",
                Generation {
                    components: vec!["barda".to_string(), "mlatu".to_string()],
                    results: vec![
                        Candidate::new("bramlatu", 5878, false),
                        Candidate::new("bardymlatu", 7772, false),
                        Candidate::new("bramlat", 6831, true),
                    ],
                },
            )
            .with_generation(
                "zirpu mlatu",
                Generation {
                    components: vec!["zirpu".to_string(), "mlatu".to_string()],
                    results: vec![
                        Candidate {
                            lujvo: "zipmlatu".to_string(),
                            score: 5588,
                            cmevla: false,
                            flaws: FlawMask::NONE.with(0),
                        },
                        Candidate::new("zirpymlatu", 7105, false),
                    ],
                },
            )
            .with_selrafsi("bra", "barda", false)
            .with_selrafsi("lat", "mlatu", false)
            .with_selrafsi("gau", "gasnu", false)
            .with_affixes("barda", vec![affix("bra")])
            .with_affixes("mlatu", vec![affix("lat")])
            .with_affixes("klama", vec![affix("kla")])
            .with_affixes("gasnu", vec![affix("gau")])
    }
}

impl Morphology for StaticMorphology {
    fn decompose(&self, lujvo: &str) -> Result<Vec<LujvoPart>> {
        self.decompositions
            .get(lujvo)
            .cloned()
            .ok_or_else(|| Error::Morphology(format!("{lujvo} is not a decomposable lujvo")))
    }

    fn generate(&self, words: &[&str]) -> Generation {
        self.generations
            .get(&words.join(" "))
            .cloned()
            .unwrap_or_default()
    }

    fn selrafsi_of(&self, rafsi: &str) -> Option<SelrafsiMatch> {
        self.selrafsi.get(rafsi).cloned()
    }

    fn rafsi_list(&self, word: &str) -> Option<Vec<RafsiAffix>> {
        self.affixes.get(word).cloned()
    }
}
