//! Reduces a text snippet to its binary attribute vector.
//!
//! The five attributes are orthographic cues that separate Dutch from
//! English prose: characteristic word-initial consonants, doubled
//! vowels, characteristic suffixes, `j` in consonant clusters, and the
//! balance of definite/indefinite articles. Bit set means "looks Dutch".

use std::sync::OnceLock;

use regex::Regex;

use super::Attributes;


/// Width of the attribute vector produced by [`extract`].
pub const ATTRIBUTE_COUNT: usize = 5;

const DUTCH_ARTICLES: [&str; 3] = ["de", "het", "een"];
const ENGLISH_ARTICLES: [&str; 3] = ["a", "an", "the"];
const DUTCH_INITIALS: [char; 5] = ['k', 'j', 'z', 'v', 'g'];
const DUTCH_SUFFIXES: [&str; 3] = ["en", "ij", "ig"];
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];


fn non_alphabetic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z\s]").expect("fixed pattern"))
}


/// Lowercase `text` and blank out everything outside ASCII letters and
/// whitespace.
pub fn normalize(text: &str) -> String {
    non_alphabetic()
        .replace_all(&text.to_lowercase(), " ")
        .into_owned()
}


/// Derive the binary attribute vector of a normalized snippet.
///
/// The attribute order is fixed; see [`ATTRIBUTE_COUNT`].
pub fn extract(text: &str) -> Attributes {
    let words = text.split_whitespace().collect::<Vec<_>>();

    let initial_count = words.iter()
        .copied()
        .filter(|word| starts_with_dutch_initial(word))
        .count();
    let double_vowel = words.iter()
        .any(|word| word.contains("aa") || word.contains("uu"));
    let suffix_count = words.iter()
        .copied()
        .filter(|word| has_dutch_suffix(word))
        .count();
    let j_cluster = words.iter()
        .copied()
        .any(has_j_before_consonant);
    let dutch_articles = words.iter()
        .filter(|word| DUTCH_ARTICLES.contains(word))
        .count();
    let english_articles = words.iter()
        .filter(|word| ENGLISH_ARTICLES.contains(word))
        .count();

    Attributes::from_bits([
        initial_count >= 3,
        double_vowel,
        suffix_count >= 2,
        j_cluster,
        dutch_articles >= english_articles,
    ])
}


fn starts_with_dutch_initial(word: &str) -> bool {
    word.chars()
        .next()
        .map_or(false, |first| DUTCH_INITIALS.contains(&first))
}


fn has_dutch_suffix(word: &str) -> bool {
    word.len() >= 2 && DUTCH_SUFFIXES.iter().any(|suffix| word.ends_with(suffix))
}


/// `j` followed by a non-vowel, or closing a word, marks a Dutch
/// consonant cluster. Only the first `j` of a word is inspected.
fn has_j_before_consonant(word: &str) -> bool {
    let characters = word.chars().collect::<Vec<_>>();
    match characters.iter().position(|&c| c == 'j') {
        Some(at) if at + 1 == characters.len() => true,
        Some(at) => !VOWELS.contains(&characters[at + 1]),
        None => false,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn bits(attributes: &Attributes) -> Vec<bool> {
        (0..ATTRIBUTE_COUNT).map(|i| attributes.has(i)).collect()
    }

    #[test]
    fn normalization_strips_punctuation_and_case() {
        assert_eq!(normalize("Zij keek; 'n mooie dag!"), "zij keek   n mooie dag ");
    }

    #[test]
    fn dutch_snippet_sets_dutch_bits() {
        let text = normalize("Zij kijken graag naar een vogel bij het kanaal");
        let attributes = extract(&text);

        // zij/kijken/graag/vogel start with dutch initials; graag/naar/kanaal
        // carry doubled vowels; kijken/bij/zij end in dutch suffixes; zij and
        // bij close on `j`; een and het outnumber the english articles.
        assert_eq!(bits(&attributes), vec![true, true, true, true, true]);
    }

    #[test]
    fn english_snippet_stays_mostly_unset() {
        let text = normalize("The quick brown fox jumped over a lazy dog");
        let attributes = extract(&text);

        // `jumped` has a j-cluster reading (`j` is word-initial, followed
        // by `u`), so bit 3 stays clear; two english articles beat zero
        // dutch ones, so bit 4 stays clear too.
        assert_eq!(bits(&attributes), vec![false, false, false, false, false]);
    }

    #[test]
    fn article_balance_ties_count_as_dutch() {
        let attributes = extract("de the");
        assert!(attributes.has(4));
    }

    #[test]
    fn word_final_j_counts_as_cluster() {
        assert!(has_j_before_consonant("zij"));
        assert!(has_j_before_consonant("vrijdag"));
        assert!(!has_j_before_consonant("ja"));
        assert!(has_j_before_consonant("fjord"));
    }

    #[test]
    fn suffix_rule_needs_two_words() {
        let one = extract("kijken stond");
        assert!(!one.has(2));

        let two = extract("kijken lopen");
        assert!(two.has(2));
    }
}
