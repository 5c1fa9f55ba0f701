/// The stock greeting phrases, one per language, shown in rotation on the
/// landing page. Used as the built-in pool when no phrases are configured.
pub const DEFAULT_GREETINGS: [&str; 8] = [
    "Hello world!",
    "¡Hola Mundo!",
    "你好，世界！",
    "Bonjour le monde!",
    "Hallo Welt!",
    "こんにちは世界",
    "안녕하세요 세계!",
    "Привет мир!",
];

/// Returns the default greeting set as owned strings, ready for a pool.
pub fn default_greetings() -> Vec<String> {
    DEFAULT_GREETINGS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_greetings_match_the_const_set() {
        let owned = default_greetings();
        assert_eq!(owned.len(), DEFAULT_GREETINGS.len());
        for (owned_phrase, phrase) in owned.iter().zip(DEFAULT_GREETINGS.iter()) {
            assert_eq!(owned_phrase, phrase);
        }
    }
}
