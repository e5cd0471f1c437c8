// src/commands.rs
use crate::core::morphology::{Morphology, RafsiAffix};
use crate::core::ranker::rank;
use crate::core::types::{FlawSpec, PresentationEntry, FLAW_REGISTRY};
use crate::input::{classify, consonant_count, normalize, InputShape};
use crate::locale::Locale;
use tracing::debug;

/// The plugin is composed of a morphology backend and a text catalog.
/// It holds no per-query state; every call works on fresh data.
pub struct LojbanPlugin<M> {
    morphology: M,
    locale: Locale,
    registry: &'static [FlawSpec],
}

impl<M: Morphology> LojbanPlugin<M> {
    pub fn new(morphology: M, locale: Locale) -> Self {
        Self {
            morphology,
            locale,
            registry: FLAW_REGISTRY,
        }
    }

    /// The `lujvo` command: one reply string per query, never an error.
    pub fn handle_lujvo(&self, raw: &str) -> String {
        let input = normalize(raw);
        if input.is_empty() {
            return self.locale.text("invalid-input");
        }
        let shape = classify(&input);
        debug!(input = %input, ?shape, "lujvo query");
        match shape {
            InputShape::LujvoLookup => self.decompose_reply(&input),
            InputShape::TanruCompose => self.compose_reply(&input),
            InputShape::SingleWord => self
                .single_word_reply(&input)
                .unwrap_or_else(|| self.locale.text("invalid-input")),
            InputShape::Invalid => self.locale.text("invalid-input"),
        }
    }

    /// `bramlatu` → `bra-mlatu → barda mlatu`, starring experimental
    /// rafsi. A backend failure is reported in the backend's own words.
    fn decompose_reply(&self, input: &str) -> String {
        let parts = match self.morphology.decompose(input) {
            Ok(parts) => parts,
            Err(err) => return err.to_string(),
        };

        let star = self.locale.text("star");
        let word = parts
            .iter()
            .map(|p| {
                if p.experimental {
                    format!("{}{}", p.rafsi, star)
                } else {
                    p.rafsi.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("-");
        let components = parts
            .iter()
            .filter_map(|p| p.selrafsi.as_deref())
            .collect::<Vec<_>>()
            .join(" ");

        let mut reply = format!("{word} → {components}");
        if parts.iter().any(|p| p.experimental) {
            reply.push('\n');
            reply.push_str(&self.locale.text("star-experimental-rafsi"));
        }
        reply
    }

    /// The construction path: generate, split name-forms from ordinary
    /// words, rank each group, render the concatenated entries.
    fn compose_reply(&self, input: &str) -> String {
        let words: Vec<&str> = input.split(' ').collect();
        let generation = self.morphology.generate(&words);
        if generation.results.is_empty() {
            return self.locale.text("no-result");
        }
        debug!(
            components = generation.components.len(),
            candidates = generation.results.len(),
            "generation done"
        );

        let brivla: Vec<_> = generation
            .results
            .iter()
            .filter(|c| !c.cmevla)
            .cloned()
            .collect();
        let cmevla: Vec<_> = generation
            .results
            .iter()
            .filter(|c| c.cmevla)
            .cloned()
            .collect();

        let mut lines = Vec::new();
        for entry in rank(&brivla, self.registry)
            .iter()
            .chain(rank(&cmevla, self.registry).iter())
        {
            lines.push(self.render_entry(entry));
        }

        format!("{}:\n{}", generation.components.join(" "), lines.join("\n"))
    }

    fn render_entry(&self, entry: &PresentationEntry) -> String {
        let mut desc = self.locale.text(if entry.candidate.cmevla {
            "best-cmevla"
        } else {
            "best-brivla"
        });
        if !entry.noted_flaws.is_empty() {
            let phrases = entry
                .noted_flaws
                .iter()
                .map(|&index| {
                    let spec = &self.registry[index];
                    self.locale.text(if entry.candidate.has_flaw(index) {
                        spec.present_key
                    } else {
                        spec.absent_key
                    })
                })
                .collect::<Vec<_>>()
                .join(&self.locale.text("comma"));
            desc = self
                .locale
                .render("jvozba-result-key-paren", &[desc.as_str(), phrases.as_str()]);
        }
        self.locale.render(
            "jvozba-result-item",
            &[
                desc.as_str(),
                entry.candidate.lujvo.as_str(),
                entry.candidate.score.to_string().as_str(),
            ],
        )
    }

    /// Single-word queries collect up to two lines: which root the word
    /// is a rafsi of, and (for an unhyphenated word) the root's own
    /// affix list. Nothing found means the caller falls back to the
    /// invalid-input text.
    fn single_word_reply(&self, input: &str) -> Option<String> {
        let mut output = Vec::new();

        let stripped: String = input.chars().filter(|&c| c != '-').collect();
        if let Some(found) = self.morphology.selrafsi_of(&stripped) {
            if found.selrafsi != stripped {
                let kind = self.locale.text(if found.experimental {
                    "experimental-rafsi"
                } else {
                    "rafsi"
                });
                output.push(self.locale.render(
                    "rafsi-of",
                    &[
                        format!("-{stripped}-").as_str(),
                        found.selrafsi.as_str(),
                        kind.as_str(),
                    ],
                ));
            }
        }

        if !input.contains('-') {
            if let Some(affixes) = self.morphology.rafsi_list(input) {
                output.push(self.affix_list_line(input, &affixes));
                if affixes.iter().any(|a| a.experimental) {
                    output.push(self.locale.text("star-experimental-rafsi"));
                }
            }
        }

        if output.is_empty() {
            None
        } else {
            Some(output.join("\n"))
        }
    }

    fn affix_list_line(&self, word: &str, affixes: &[RafsiAffix]) -> String {
        let star = self.locale.text("star");
        let listed = affixes
            .iter()
            .map(|a| {
                if a.experimental {
                    format!("-{}-{}", a.rafsi, star)
                } else {
                    format!("-{}-", a.rafsi)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        // The same consonant threshold that gates decomposition decides
        // whether the word is introduced as a gismu or a cmavo.
        let word_class = self.locale.text(if consonant_count(word) > 2 {
            "gismu"
        } else {
            "cmavo"
        });
        self.locale
            .render("rafsi-list", &[word_class.as_str(), word, listed.as_str()])
    }
}
