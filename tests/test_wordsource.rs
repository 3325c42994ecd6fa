use rpawogen::wordsource::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn dictionary(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write dictionary");
    file
}

#[test]
fn test_fallback_respects_length_range() {
    let words = WordSource::new();
    for _ in 0..50 {
        let word = words.next_word(4, 5);
        assert!((4..=5).contains(&word.len()), "{}", word);
        assert!(FALLBACK_WORDS.contains(&word.as_str()));
    }
}

#[test]
fn test_fallback_without_match_is_unfiltered() {
    let words = WordSource::new();
    let word = words.next_word(20, 30);
    assert!(FALLBACK_WORDS.contains(&word.as_str()));
}

#[test]
fn test_dictionary_file_provider() {
    let file = dictionary("zebra\n# comment\n\n  yak  \n");
    let words = WordSource::with_dictionary(file.path());
    assert!(words.has_provider());
    assert_eq!(words.next_word(3, 3), "yak");
    assert_eq!(words.next_word(5, 5), "zebra");

    // 字典中没有合适长度时使用内置单词
    let word = words.next_word(8, 8);
    assert_eq!(word.len(), 8);
    assert!(FALLBACK_WORDS.contains(&word.as_str()));
}

#[test]
fn test_missing_dictionary_falls_back() {
    let words = WordSource::with_dictionary("/nonexistent/rpawogen/words.txt");
    assert!(!words.has_provider());
    let word = words.next_word(3, 8);
    assert!(FALLBACK_WORDS.contains(&word.as_str()));
}

#[test]
fn test_empty_dictionary_is_rejected() {
    let file = dictionary("# nothing here\n\n");
    assert!(WordListProvider::from_file(file.path()).is_err());
    let words = WordSource::with_dictionary(file.path());
    assert!(!words.has_provider());
}

#[test]
fn test_word_list_provider() {
    let provider = WordListProvider::new(["ant", "otter", "élan"]);
    assert_eq!(provider.len(), 3);
    assert_eq!(provider.word(5, 5).as_deref(), Some("otter"));
    assert_eq!(provider.word(4, 4).as_deref(), Some("élan"));
    assert_eq!(provider.word(6, 9), None);
}
