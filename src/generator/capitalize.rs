/// Uppercases the first character of `word`, leaving the rest untouched.
/// Characters with multi-char uppercase forms (e.g. `ß`) expand in place.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}
