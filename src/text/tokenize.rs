// Term tokenizer shared by vocabulary fitting and vectorization.
//
// A term is a maximal run of word characters (Unicode alphanumerics and `_`)
// at least two characters long, lowercased. Single-character runs such as
// stray digits or unit letters are dropped.

/// Minimum term length in characters.
pub const MIN_TERM_CHARS: usize = 2;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into lowercase terms, preserving order and repeats.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|run| run.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_lowercase)
        .collect()
}
