// src/core/ranker.rs
use crate::core::types::{Candidate, FlawIndex, FlawSpec, PresentationEntry};

/// Turns the generator's raw best-first candidate list into the minimal
/// presentation list: the best candidate, then for each flaw it carries
/// the best alternative without that flaw, recursively, until a clean
/// candidate is reached or no alternative remains.
///
/// The registry is taken as a parameter so callers (and tests) can rank
/// against an extended flaw set; candidate masks must be indexed by the
/// same registry order.
///
/// Empty input yields an empty output. This is a contract, not an error.
pub fn rank(candidates: &[Candidate], registry: &[FlawSpec]) -> Vec<PresentationEntry> {
    let view: Vec<&Candidate> = candidates.iter().collect();
    eliminate(&view, &[], registry)
}

/// Depth-first walk of the flaw lattice. `carried` holds the flaw indices
/// already called out by ancestors; each call works on its own copy, so a
/// sibling branch never sees flaws first observed by another sibling.
///
/// Each recursion excludes at least the current best candidate from the
/// filtered list, so the walk terminates.
fn eliminate(
    list: &[&Candidate],
    carried: &[FlawIndex],
    registry: &[FlawSpec],
) -> Vec<PresentationEntry> {
    let Some((&best, _)) = list.split_first() else {
        return Vec::new();
    };

    // Flaws the best candidate adds to the carried set. The best entry's
    // own line mentions the union: inherited mentions plus its new ones.
    let mut carried = carried.to_vec();
    for (index, _spec) in registry.iter().enumerate() {
        if best.has_flaw(index) && !carried.contains(&index) {
            carried.push(index);
        }
    }

    let mut results = vec![PresentationEntry {
        candidate: best.clone(),
        noted_flaws: carried.clone(),
    }];

    // One branch per flaw the best candidate exhibits, in registry order.
    // Within a branch the input order (best-first) is preserved, so the
    // branch's own best is the first candidate lacking the flaw.
    for (index, _spec) in registry.iter().enumerate() {
        if !best.has_flaw(index) {
            continue;
        }
        let fix: Vec<&Candidate> = list
            .iter()
            .copied()
            .filter(|cand| !cand.has_flaw(index))
            .collect();
        for entry in eliminate(&fix, &carried, registry) {
            // First occurrence wins; later branches that converge on the
            // same word are dropped silently.
            if results
                .iter()
                .any(|seen| seen.candidate.lujvo == entry.candidate.lujvo)
            {
                continue;
            }
            results.push(entry);
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FLAW_REGISTRY;

    const EXPERIMENTAL: FlawIndex = 0;
    const FORBIDDEN: FlawIndex = 1;

    fn brivla(lujvo: &str, score: i64) -> Candidate {
        Candidate::new(lujvo, score, false)
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(rank(&[], FLAW_REGISTRY).is_empty());
    }

    #[test]
    fn clean_top_candidate_is_the_only_entry() {
        let candidates = vec![
            brivla("bramlatu", 5878),
            brivla("bardymlatu", 7772).with_flaw(EXPERIMENTAL),
        ];
        let out = rank(&candidates, FLAW_REGISTRY);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].candidate, candidates[0]);
        assert!(out[0].noted_flaws.is_empty());
    }

    #[test]
    fn first_entry_always_equals_first_input() {
        let candidates = vec![
            brivla("zipmlatu", 5588).with_flaw(EXPERIMENTAL),
            brivla("zirpymlatu", 7105),
        ];
        let out = rank(&candidates, FLAW_REGISTRY);
        assert_eq!(out[0].candidate.lujvo, "zipmlatu");
    }

    #[test]
    fn flawed_top_is_followed_by_first_clean_alternative() {
        // The A/B/C shape: A carries flaw 0, B is clean, C carries flaw 1.
        // B fixes A's flaw and is earlier than C, so C never surfaces.
        let candidates = vec![
            brivla("aaa", 5).with_flaw(EXPERIMENTAL),
            brivla("bbb", 4),
            brivla("ccc", 3).with_flaw(FORBIDDEN),
        ];
        let out = rank(&candidates, FLAW_REGISTRY);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].candidate.lujvo, "aaa");
        assert_eq!(out[0].noted_flaws, vec![EXPERIMENTAL]);
        assert_eq!(out[1].candidate.lujvo, "bbb");
        // B still mentions the flaw it fixed, and does not carry it.
        assert_eq!(out[1].noted_flaws, vec![EXPERIMENTAL]);
        assert!(!out[1].candidate.has_flaw(EXPERIMENTAL));
    }

    #[test]
    fn no_output_entry_repeats_a_word() {
        // Both flaw branches of the doubly-flawed top converge on "ddd".
        let candidates = vec![
            brivla("top", 9).with_flaw(EXPERIMENTAL).with_flaw(FORBIDDEN),
            brivla("ddd", 8),
        ];
        let out = rank(&candidates, FLAW_REGISTRY);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].candidate.lujvo, "ddd");
        let mut words: Vec<&str> = out.iter().map(|e| e.candidate.lujvo.as_str()).collect();
        words.sort();
        words.dedup();
        assert_eq!(words.len(), out.len());
    }

    #[test]
    fn converging_branches_keep_first_branch_position() {
        // Fixing the experimental flaw finds "mid" (still forbidden), whose
        // own branch then finds "clean". The forbidden branch of the top
        // also reaches "clean" but the earlier discovery wins.
        let candidates = vec![
            brivla("top", 9).with_flaw(EXPERIMENTAL).with_flaw(FORBIDDEN),
            brivla("mid", 8).with_flaw(FORBIDDEN),
            brivla("clean", 7),
        ];
        let out = rank(&candidates, FLAW_REGISTRY);
        let words: Vec<&str> = out.iter().map(|e| e.candidate.lujvo.as_str()).collect();
        assert_eq!(words, vec!["top", "mid", "clean"]);
    }

    #[test]
    fn carried_flaws_accumulate_down_the_chain() {
        let candidates = vec![
            brivla("top", 9).with_flaw(EXPERIMENTAL),
            brivla("mid", 8).with_flaw(FORBIDDEN),
            brivla("clean", 7),
        ];
        let out = rank(&candidates, FLAW_REGISTRY);
        assert_eq!(out.len(), 3);
        // "mid" fixes the experimental flaw but introduces the forbidden
        // one; "clean" mentions both, carrying neither.
        assert_eq!(out[1].noted_flaws, vec![EXPERIMENTAL, FORBIDDEN]);
        assert_eq!(out[2].noted_flaws, vec![EXPERIMENTAL, FORBIDDEN]);
        assert!(out[2].candidate.flaws.is_empty());
    }

    #[test]
    fn unexhibited_registry_flaws_never_branch() {
        // Everything clean: a single entry regardless of registry size.
        let candidates = vec![brivla("bramlatu", 5), brivla("bardymlatu", 6)];
        let out = rank(&candidates, FLAW_REGISTRY);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn flaw_with_no_clean_alternative_prunes_the_branch() {
        let candidates = vec![
            brivla("aaa", 2).with_flaw(EXPERIMENTAL),
            brivla("bbb", 1).with_flaw(EXPERIMENTAL),
        ];
        let out = rank(&candidates, FLAW_REGISTRY);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].candidate.lujvo, "aaa");
    }

    #[test]
    fn extended_registry_is_honored() {
        const WIDE: &[FlawSpec] = &[
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
            FlawSpec {
                name: "tosmabru",
                present_key: "has-tosmabru",
                absent_key: "no-tosmabru",
            },
        ];
        let candidates = vec![
            brivla("aaa", 3).with_flaw(2),
            brivla("bbb", 2).with_flaw(0),
            brivla("ccc", 1),
        ];
        let out = rank(&candidates, WIDE);
        let words: Vec<&str> = out.iter().map(|e| e.candidate.lujvo.as_str()).collect();
        // Fixing the third registry flaw surfaces "bbb", whose own branch
        // then surfaces "ccc".
        assert_eq!(words, vec!["aaa", "bbb", "ccc"]);
        assert_eq!(out[1].noted_flaws, vec![2, 0]);
    }

    #[test]
    fn input_order_is_preserved_within_a_branch() {
        // Among candidates lacking the flaw, the earliest wins even when a
        // later one has a lower score. Scores are opaque here.
        let candidates = vec![
            brivla("flawed", 5).with_flaw(EXPERIMENTAL),
            brivla("first-clean", 4),
            brivla("second-clean", 3),
        ];
        let out = rank(&candidates, FLAW_REGISTRY);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].candidate.lujvo, "first-clean");
    }
}
