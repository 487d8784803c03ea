use std::collections::HashSet;

/// Connectives ignored when comparing word sets.
const STOP_WORDS: [&str; 9] = ["de", "da", "do", "na", "no", "em", "para", "com", "por"];

/// Words that alone are enough to link two phrases when both contain them.
const IMPORTANT_WORDS: [&str; 6] = ["dor", "febre", "tosse", "náusea", "fadiga", "sangue"];

/// Minimum shared meaningful words for a word-overlap match.
const MIN_SHARED_WORDS: usize = 2;

/// Decide whether an extracted symptom label and a catalog phrase refer to
/// the same thing.
///
/// True on exact equality, substring containment in either direction, at
/// least two shared non-stop words, or a shared important word.
pub fn symptoms_match(extracted: &str, catalog_phrase: &str) -> bool {
    let a = extracted.trim().to_lowercase();
    let b = catalog_phrase.trim().to_lowercase();

    if a == b {
        return true;
    }

    if a.contains(b.as_str()) || b.contains(a.as_str()) {
        return true;
    }

    let words_a = meaningful_words(&a);
    let words_b = meaningful_words(&b);

    if words_a.intersection(&words_b).count() >= MIN_SHARED_WORDS {
        return true;
    }

    IMPORTANT_WORDS
        .iter()
        .any(|word| words_a.contains(word) && words_b.contains(word))
}

fn meaningful_words(text: &str) -> HashSet<&str> {
    text.split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_case_and_padding() {
        assert!(symptoms_match("  Tontura ", "tontura"));
    }

    #[test]
    fn substring_either_direction() {
        assert!(symptoms_match("dor de cabeça intensa", "dor de cabeça"));
        assert!(symptoms_match("tosse", "tosse com catarro"));
    }

    #[test]
    fn two_shared_meaningful_words() {
        // "no" is a stop word; "aperto" and "peito" are shared.
        assert!(symptoms_match("aperto forte no peito", "peito com aperto"));
    }

    #[test]
    fn stop_words_do_not_count_towards_overlap() {
        // Only "de" and "para" would be shared.
        assert!(!symptoms_match("falta de ar para andar", "vontade de comer para viver"));
    }

    #[test]
    fn one_shared_ordinary_word_is_not_enough() {
        assert!(!symptoms_match("visão turva", "urina turva"));
    }

    #[test]
    fn shared_important_word_matches() {
        assert!(symptoms_match("dor abdominal", "dor lombar"));
        assert!(symptoms_match("febre súbita", "alta febre"));
    }

    #[test]
    fn important_word_requires_literal_identity() {
        assert!(!symptoms_match("sangue nas fezes", "sangramento no nariz"));
    }

    #[test]
    fn important_word_must_be_whole_word() {
        // "dores" is not "dor"; no other overlap exists.
        assert!(!symptoms_match("dores musculares", "dor lombar"));
    }

    #[test]
    fn unrelated_phrases_do_not_match() {
        assert!(!symptoms_match("tontura", "azia"));
    }
}
