//! Plain argument files: every whitespace-separated word is one argument.

use crate::tokenizer::tokenize;

pub fn parse(src: &str) -> Vec<String> {
    src.lines().flat_map(tokenize).collect()
}
