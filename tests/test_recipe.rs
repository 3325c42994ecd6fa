use rpawogen::charset::CharacterClass;
use rpawogen::memorable::WordCase;
use rpawogen::recipe::*;
use rpawogen::wordsource::{WordProvider, WordSource};
use rpawogen::PassgenError;

struct FixedWord(&'static str);

impl WordProvider for FixedWord {
    fn word(&self, _min_length: usize, _max_length: usize) -> Option<String> {
        Some(self.0.to_string())
    }
}

fn fixed_source(word: &'static str) -> WordSource {
    WordSource::with_provider(Box::new(FixedWord(word)))
}

#[test]
fn test_empty_recipe() {
    assert_eq!(build_password(&WordSource::new(), &[]).unwrap(), "");
}

#[test]
fn test_single_literal() {
    let recipe = vec![RecipeComponent::Literal("X".to_string())];
    assert_eq!(build_password(&WordSource::new(), &recipe).unwrap(), "X");
}

#[test]
fn test_number_padding() {
    let words = WordSource::new();
    let padded = vec![RecipeComponent::Number { min: 5, max: 5, padding: 3 }];
    for _ in 0..10 {
        assert_eq!(build_password(&words, &padded).unwrap(), "005");
    }
    let unpadded = vec![RecipeComponent::Number { min: 42, max: 42, padding: 0 }];
    assert_eq!(build_password(&words, &unpadded).unwrap(), "42");
    let wide = vec![RecipeComponent::Number { min: 12345, max: 12345, padding: 3 }];
    assert_eq!(build_password(&words, &wide).unwrap(), "12345");
}

#[test]
fn test_number_within_range() {
    let words = WordSource::new();
    let recipe = vec![RecipeComponent::Number { min: 10, max: 20, padding: 0 }];
    for _ in 0..100 {
        let n: u64 = build_password(&words, &recipe).unwrap().parse().unwrap();
        assert!((10..=20).contains(&n));
    }
}

#[test]
fn test_order_is_preserved_without_implicit_separators() {
    let words = fixed_source("tiger");
    let recipe = vec![
        RecipeComponent::Literal("a".to_string()),
        RecipeComponent::Separator(vec!["-".to_string()]),
        RecipeComponent::Word(WordComponent::default()),
        RecipeComponent::Number { min: 7, max: 7, padding: 2 },
    ];
    assert_eq!(build_password(&words, &recipe).unwrap(), "a-tiger07");
}

#[test]
fn test_word_case_then_replacements() {
    let words = fixed_source("alpha");
    let recipe = vec![RecipeComponent::Word(WordComponent {
        case: WordCase::Capitalize,
        replacements: vec![
            ("a".to_string(), "4".to_string()),
            ("4".to_string(), "@".to_string()),
        ],
        ..Default::default()
    })];
    // 替换按顺序作用于整个单词
    assert_eq!(build_password(&words, &recipe).unwrap(), "Alph@");
}

#[test]
fn test_random_chars() {
    let words = WordSource::new();
    let digits = vec![RecipeComponent::RandomChars {
        length: 6,
        classes: vec![CharacterClass::Digit],
    }];
    let password = build_password(&words, &digits).unwrap();
    assert_eq!(password.len(), 6);
    assert!(password.chars().all(|c| c.is_ascii_digit()));

    let none = vec![
        RecipeComponent::Literal("x".to_string()),
        RecipeComponent::RandomChars { length: 6, classes: vec![] },
    ];
    assert_eq!(build_password(&words, &none).unwrap(), "x");
}

#[test]
fn test_separator_choice() {
    let words = WordSource::new();
    let options: Vec<String> = vec!["!".to_string(), "@".to_string()];
    let recipe = vec![RecipeComponent::Separator(options.clone())];
    for _ in 0..20 {
        assert!(options.contains(&build_password(&words, &recipe).unwrap()));
    }
}

#[test]
fn test_invalid_components_produce_no_output() {
    let words = WordSource::new();
    let recipe = vec![
        RecipeComponent::Literal("prefix".to_string()),
        RecipeComponent::Number { min: 9, max: 1, padding: 0 },
    ];
    assert!(matches!(
        build_password(&words, &recipe),
        Err(PassgenError::InvalidConstraints(_))
    ));
    let recipe = vec![RecipeComponent::Separator(vec![])];
    assert!(build_password(&words, &recipe).is_err());
}

#[test]
fn test_parse_recipe_components() {
    let json = r#"[
        {"type": "text", "value": "id"},
        {"type": "word", "config": {"min_length": 4, "max_length": 6, "uppercase": true,
                                    "replacements": [["a", "4"], ["e", "3"]]}},
        {"type": "random_chars", "config": {"length": 2, "types": ["digits", "special"]}},
        {"type": "number", "config": {"min": 1, "max": 99, "padding": 2}},
        {"type": "separator", "options": ["+"]}
    ]"#;
    let recipe = parse_recipe(json).unwrap();
    assert_eq!(recipe.len(), 5);
    assert_eq!(recipe[0], RecipeComponent::Literal("id".to_string()));
    assert_eq!(
        recipe[1],
        RecipeComponent::Word(WordComponent {
            min_length: 4,
            max_length: 6,
            case: WordCase::Uppercase,
            replacements: vec![
                ("a".to_string(), "4".to_string()),
                ("e".to_string(), "3".to_string()),
            ],
        })
    );
    assert_eq!(
        recipe[2],
        RecipeComponent::RandomChars {
            length: 2,
            classes: vec![CharacterClass::Digit, CharacterClass::Special],
        }
    );
    assert_eq!(recipe[3], RecipeComponent::Number { min: 1, max: 99, padding: 2 });
    assert_eq!(recipe[4], RecipeComponent::Separator(vec!["+".to_string()]));
}

#[test]
fn test_parse_recipe_defaults() {
    let json = r#"[
        {"value": "plain"},
        {"type": "word"},
        {"type": "random_chars"},
        {"type": "number"},
        {"type": "separator"}
    ]"#;
    let recipe = parse_recipe(json).unwrap();
    assert_eq!(recipe[0], RecipeComponent::Literal("plain".to_string()));
    assert_eq!(recipe[1], RecipeComponent::Word(WordComponent::default()));
    assert_eq!(
        recipe[2],
        RecipeComponent::RandomChars {
            length: 4,
            classes: vec![
                CharacterClass::Lowercase,
                CharacterClass::Uppercase,
                CharacterClass::Digit,
            ],
        }
    );
    assert_eq!(recipe[3], RecipeComponent::Number { min: 0, max: 9999, padding: 0 });
    assert_eq!(
        recipe[4],
        RecipeComponent::Separator(DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect())
    );
}

#[test]
fn test_parse_recipe_case_flag_priority() {
    let json = r#"[{"type": "word", "config": {"random_case": true, "uppercase": true, "capitalize": true}},
                   {"type": "word", "config": {"random_case": true, "lowercase": true}}]"#;
    let recipe = parse_recipe(json).unwrap();
    match (&recipe[0], &recipe[1]) {
        (RecipeComponent::Word(first), RecipeComponent::Word(second)) => {
            assert_eq!(first.case, WordCase::Capitalize);
            assert_eq!(second.case, WordCase::Lowercase);
        }
        other => panic!("unexpected components: {:?}", other),
    }
}

#[test]
fn test_parse_recipe_unknown_type() {
    let json = r#"[{"type": "text", "value": "ok"}, {"type": "emoji"}]"#;
    assert_eq!(
        parse_recipe(json),
        Err(PassgenError::UnknownComponentType("emoji".to_string()))
    );
}

#[test]
fn test_parse_recipe_malformed() {
    assert!(matches!(parse_recipe("not json"), Err(PassgenError::InvalidRecipe(_))));
    assert!(matches!(
        parse_recipe(r#"[{"type": 3}]"#),
        Err(PassgenError::InvalidRecipe(_))
    ));
    assert!(matches!(
        parse_recipe(r#"[{"type": "number", "config": {"min": -1}}]"#),
        Err(PassgenError::InvalidRecipe(_))
    ));
    assert!(matches!(
        parse_recipe(r#"[{"type": "random_chars", "config": {"types": ["emoji"]}}]"#),
        Err(PassgenError::InvalidRecipe(_))
    ));
}

#[test]
fn test_demo_recipe_builds() {
    let recipe = parse_recipe(include_str!("../demos/recipe.json")).unwrap();
    assert_eq!(recipe.len(), 6);
    let password = build_password(&WordSource::new(), &recipe).unwrap();
    assert!(password.ends_with('!'));
}
