//! Input cleaning for the REPL

/// Lower-cases `text` and splits it into words on any run of whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}
