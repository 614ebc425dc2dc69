use rulecheck::api::*;
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_validate_string_integration() {
    init_logging();
    let rules = StringRules::new().min_chars(2).max_chars(4).alias("Code");

    assert!(validate_string(&json!("ab"), &rules).is_ok());
    assert!(validate_string(&json!("abcd"), &rules).is_ok());

    let err = validate_string(&json!("a"), &rules).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BelowMinimum);
    assert_eq!(err.message(), "Code must contain at least 2 characters");

    let err = validate_string(&json!("abcde"), &rules).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AboveMaximum);

    assert!(matches!(
        validate_string(&json!(""), &StringRules::new()),
        Err(ProjectError::Validation {
            kind: ErrorKind::EmptyValue,
            ..
        })
    ));
    assert!(validate_string(&json!(""), &StringRules::new().allow_empty()).is_ok());
}

#[test]
fn test_single_char_allow_list_integration() {
    init_logging();
    let rules = StringRules::new().max_chars(1).allow_chars(["a", "b"]);
    assert_eq!(
        validate_string(&json!("x"), &rules).unwrap_err().kind(),
        ErrorKind::NotAllowed
    );
    assert!(validate_string(&json!("a"), &rules).is_ok());
}

#[test]
fn test_validate_number_integration() {
    init_logging();
    let rules = NumberRules::new().min(0.0);
    assert!(validate_number(&json!(5), &rules).is_ok());
    assert_eq!(
        validate_number(&json!(-1), &rules).unwrap_err().kind(),
        ErrorKind::BelowMinimum
    );
    assert_eq!(
        validate_number(&json!("5"), &rules).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_validate_array_integration() {
    init_logging();
    assert_eq!(
        validate_array(&json!([]), &ArrayRules::new()).unwrap_err().kind(),
        ErrorKind::EmptyValue
    );

    let numbers = ArrayRules::new().of_type(JsonType::Number);
    assert!(validate_array(&json!([1, 2]), &numbers).is_ok());

    let err = validate_array(&json!([1, "x"]), &numbers).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert!(err.message().contains("index 1"));
}

#[test]
fn test_rules_loaded_from_json_config() {
    init_logging();
    let rules: NumberRules = serde_json::from_value(json!({
        "min": 0,
        "max_value": 10,
        "alias": "Rating"
    }))
    .unwrap();
    assert!(validate_number(&json!(0), &rules).is_ok());
    assert_eq!(
        validate_number(&json!(11), &rules).unwrap_err().message(),
        "Rating must be less than or equal to 10"
    );
}

#[test]
fn test_format_checks_integration() {
    init_logging();
    assert!(validate_name(&json!("Ada Lovelace"), "Full name").is_ok());
    assert!(validate_email(&json!("ada@example.org"), "Email").is_ok());
    assert_eq!(
        validate_email(&json!("ada@"), "Email").unwrap_err().kind(),
        ErrorKind::WrongFormat
    );
}

#[test]
fn test_select_integration() {
    init_logging();
    let single = vec![WeightedEntry::new("A", 100.0)];
    for _ in 0..100 {
        assert_eq!(select(&single).unwrap(), Some(&"A"));
    }

    let pair = vec![WeightedEntry::new("A", 60.0), WeightedEntry::new("B", 40.0)];
    assert_eq!(select_with_draw(&pair, 60.0).unwrap(), Some(&"A"));
    assert_eq!(select_with_draw(&pair, 60.5).unwrap(), Some(&"B"));

    let over = vec![WeightedEntry::new("A", 150.0)];
    assert_eq!(select(&over).unwrap_err().kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn test_select_json_integration() {
    init_logging();
    let err = select_json(&json!([{"weight": 10}])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingField);
    assert!(err.message().contains("index 0"));

    let config = json!([{"item": "gold", "weight": 5}, {"item": "coal", "weight": 95}]);
    let entries: Vec<WeightedEntry<String>> = serde_json::from_value(config).unwrap();
    let mut selector = WeightedSelector::seeded(2024);
    for _ in 0..100 {
        let picked = selector.select(&entries).unwrap();
        assert!(matches!(picked.map(String::as_str), Some("gold") | Some("coal")));
    }
}

#[test]
fn test_partial_weights_may_select_nothing() {
    init_logging();
    let entries = vec![WeightedEntry::new("rare", 1.0)];
    let mut selector = WeightedSelector::seeded(11);
    let outcomes: Vec<_> = (0..1000).map(|_| selector.select(&entries).unwrap()).collect();
    assert!(outcomes.iter().any(Option::is_none));
    assert!(outcomes.iter().flatten().all(|item| **item == "rare"));
}

#[test]
fn test_random_float_integration() {
    init_logging();
    let mut rng = seeded_rng(9);
    for _ in 0..100 {
        let x = random_float(10.0, 20.0, 1, &mut rng).unwrap();
        assert!((10.0..20.0).contains(&x));
    }
    assert_eq!(
        random_float(1.0, 0.0, 2, &mut rng).unwrap_err().kind(),
        ErrorKind::InvalidConfiguration
    );
}
