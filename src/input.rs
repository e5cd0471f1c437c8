// src/input.rs

/// How a normalized query should be dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// A hyphen-free word of six or more letters with more than two
    /// consonants: try to take it apart as a lujvo.
    LujvoLookup,
    /// Two or more words: try to build lujvo out of them.
    TanruCompose,
    /// One word, optionally hyphen-affixed: rafsi lookups.
    SingleWord,
    Invalid,
}

/// Letters of the Lojban alphabet: ASCII lowercase without `h`, `q`, `w`,
/// plus the apostrophe.
pub fn is_lojban_letter(c: char) -> bool {
    c == '\'' || (c.is_ascii_lowercase() && !matches!(c, 'h' | 'q' | 'w'))
}

/// The Lojban consonants. Vowels, the apostrophe and `y` are excluded.
pub fn is_consonant(c: char) -> bool {
    matches!(
        c,
        'b' | 'c'
            | 'd'
            | 'f'
            | 'g'
            | 'j'
            | 'k'
            | 'l'
            | 'm'
            | 'n'
            | 'p'
            | 'r'
            | 's'
            | 't'
            | 'v'
            | 'x'
            | 'z'
    )
}

pub fn consonant_count(s: &str) -> usize {
    s.chars().filter(|&c| is_consonant(c)).count()
}

/// Cleans up a raw chat message: collapse whitespace runs to single
/// spaces, fold curly apostrophes and `h` to `'`, drop commas and
/// periods, lowercase the rest.
pub fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    for c in collapsed.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | 'h' => out.push('\''),
            ',' | '.' => {}
            _ => out.push(c.to_ascii_lowercase()),
        }
    }
    out
}

/// One query word: a run of Lojban letters with at most one leading and
/// one trailing hyphen.
fn is_query_word(word: &str) -> bool {
    let word = word.strip_prefix('-').unwrap_or(word);
    let word = word.strip_suffix('-').unwrap_or(word);
    !word.is_empty() && word.chars().all(is_lojban_letter)
}

/// Classifies a normalized query. The lujvo test runs first: a six-letter
/// hyphen-free word with enough consonants is a decomposition query, not
/// a rafsi lookup.
pub fn classify(input: &str) -> InputShape {
    if input.is_empty() {
        return InputShape::Invalid;
    }
    if input.len() >= 6 && input.chars().all(is_lojban_letter) && consonant_count(input) > 2 {
        return InputShape::LujvoLookup;
    }
    let words: Vec<&str> = input.split(' ').collect();
    match words.as_slice() {
        [only] if is_query_word(only) => InputShape::SingleWord,
        many if many.len() >= 2 && many.iter().all(|w| is_query_word(w)) => {
            InputShape::TanruCompose
        }
        _ => InputShape::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_spacing_and_punctuation() {
        assert_eq!(normalize("  Barda   MLATU. "), "barda mlatu");
        assert_eq!(normalize("ko\u{2019}a"), "ko'a");
        assert_eq!(normalize("kanohi"), "kano'i");
    }

    #[test]
    fn long_compound_is_a_lujvo_lookup() {
        assert_eq!(classify("bramlatu"), InputShape::LujvoLookup);
        assert_eq!(classify("klagau"), InputShape::LujvoLookup);
    }

    #[test]
    fn short_or_consonant_poor_words_are_single_words() {
        // Five letters only.
        assert_eq!(classify("mlatu"), InputShape::SingleWord);
        // Six letters but just two consonants.
        assert_eq!(classify("cauoie"), InputShape::SingleWord);
    }

    #[test]
    fn several_words_compose() {
        assert_eq!(classify("barda mlatu"), InputShape::TanruCompose);
        assert_eq!(classify("-bra- mlatu"), InputShape::TanruCompose);
    }

    #[test]
    fn hyphen_affixed_word_is_a_single_word() {
        assert_eq!(classify("-bra-"), InputShape::SingleWord);
        assert_eq!(classify("bra-"), InputShape::SingleWord);
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(classify(""), InputShape::Invalid);
        assert_eq!(classify("--"), InputShape::Invalid);
        assert_eq!(classify("hello world!"), InputShape::Invalid);
        assert_eq!(classify("qwq"), InputShape::Invalid);
    }
}
