// src/core/types.rs
use std::fmt;

/// Position of a flaw within the registry order.
pub type FlawIndex = usize;

/// One entry of the flaw registry: the flaw's wire name plus the two
/// locale catalog keys used to describe it ("has it" / "no longer has it").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlawSpec {
    pub name: &'static str,
    pub present_key: &'static str,
    pub absent_key: &'static str,
}

/// The shipped flaw registry. Slice order is both the ranker's branch
/// order and the presentation order. Extending the registry is a matter
/// of appending a record here; nothing downstream hardcodes the pair.
pub const FLAW_REGISTRY: &[FlawSpec] = &[
    FlawSpec {
        name: "experimental-rafsi",
        present_key: "has-experimental-rafsi",
        absent_key: "no-experimental-rafsi",
    },
    FlawSpec {
        name: "forbidden-la-lai-doi",
        present_key: "has-forbidden-la-lai-doi",
        absent_key: "no-forbidden-la-lai-doi",
    },
];

/// Registry membership as a bitmask indexed by registry position.
/// Supports up to 32 registry entries, far beyond the shipped two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlawMask(u32);

impl FlawMask {
    pub const NONE: FlawMask = FlawMask(0);

    pub fn has(&self, index: FlawIndex) -> bool {
        self.0 & (1 << index) != 0
    }

    pub fn set(&mut self, index: FlawIndex) {
        debug_assert!(index < 32, "flaw registry larger than the mask width");
        self.0 |= 1 << index;
    }

    pub fn with(mut self, index: FlawIndex) -> Self {
        self.set(index);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// One generated compound-word candidate, as handed over by the
/// morphology backend. Immutable once produced; the score is an opaque
/// ordering key already applied by the generator (the input candidate
/// list arrives sorted best-first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The compound word itself.
    pub lujvo: String,
    /// Cumulative generator score.
    pub score: i64,
    /// True when the word is a name-form (cmevla) rather than an
    /// ordinary brivla.
    pub cmevla: bool,
    /// Quality flaws the generator tagged this candidate with.
    pub flaws: FlawMask,
}

impl Candidate {
    pub fn new(lujvo: impl Into<String>, score: i64, cmevla: bool) -> Self {
        Self {
            lujvo: lujvo.into(),
            score,
            cmevla,
            flaws: FlawMask::NONE,
        }
    }

    /// Builder-style flaw tagging, used by backends and test fixtures.
    pub fn with_flaw(mut self, index: FlawIndex) -> Self {
        self.flaws.set(index);
        self
    }

    pub fn has_flaw(&self, index: FlawIndex) -> bool {
        self.flaws.has(index)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.lujvo, self.score)
    }
}

/// A ranked candidate plus the registry flaws its presentation line must
/// mention. Mentions accumulate down the elimination search: once a flaw
/// was called out for an ancestor, every descendant entry mentions it
/// too, so the line can read "no longer has X" for a fixed flaw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationEntry {
    pub candidate: Candidate,
    /// Registry indices in first-observed order.
    pub noted_flaws: Vec<FlawIndex>,
}
