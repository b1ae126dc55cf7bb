use argmark::{ConfigError, Flag, ParseError, QueryError, Registry, ValueFlag};

#[test]
fn flags_match() {
    let mut registry = Registry::new();
    let verbose = registry
        .add(Flag::new(["-v", "--verbose"], "Log verbosely.").unwrap())
        .unwrap();
    let watch = registry
        .add(Flag::new(["-w", "--watch"], "Watch the file system for changes.").unwrap())
        .unwrap();

    let result = registry.parse(&["-v", "--watch"]).unwrap();

    assert!(result.has(&verbose));
    assert!(result.has(&watch));
    assert_eq!(result.len(), 2);
}

#[test]
fn unknown_argument() {
    let mut registry = Registry::new();
    registry
        .add(ValueFlag::integer(["-b", "--bbb"], "B.", "<value>").unwrap().required())
        .unwrap();

    let error = registry.parse(&["-a"]).unwrap_err();

    assert_eq!(error, ParseError::UnknownArgument("-a".to_string()));
}

#[test]
fn missing_required() {
    let mut registry = Registry::new();
    registry
        .add(ValueFlag::boolean(["-a", "--aaa"], "A.", "<value>").unwrap())
        .unwrap();
    registry
        .add(ValueFlag::integer(["-b", "--bbb"], "B.", "<value>").unwrap().required())
        .unwrap();

    let error = registry.parse(&[]).unwrap_err();

    assert_eq!(
        error.to_string(),
        "Expected the following non-optional arguments: -b."
    );
}

#[test]
fn string_value() {
    let mut registry = Registry::new();
    let d = registry
        .add(ValueFlag::string(["-d"], "D.", "<value>").unwrap().required())
        .unwrap();

    let result = registry.parse(&["-d", "This is a test"]).unwrap();

    assert_eq!(result.value(&d).unwrap(), "This is a test");
}

#[test]
fn invalid_boolean() {
    let mut registry = Registry::new();
    registry
        .add(ValueFlag::boolean(["-a", "--aaa"], "A.", "<value>").unwrap())
        .unwrap();

    let error = registry.parse(&["-a", "maybe"]).unwrap_err();

    assert!(matches!(error, ParseError::InvalidValue { .. }));
    let message = error.to_string();
    assert!(message.contains("-a"), "{message}");
    assert!(message.contains("maybe"), "{message}");
}

#[test]
fn missing_value() {
    let mut registry = Registry::new();
    let a = registry
        .add(ValueFlag::boolean(["-a", "--aaa"], "A.", "<value>").unwrap())
        .unwrap();
    registry
        .add(ValueFlag::integer(["-b", "--bbb"], "B.", "<value>").unwrap())
        .unwrap();
    let flag = registry.add(Flag::new(["-f"], "F.").unwrap()).unwrap();

    assert_eq!(
        registry.parse(&["-a", "true", "-b"]).unwrap_err(),
        ParseError::MissingValue("-b".to_string())
    );

    let result = registry.parse(&["-a", "true", "-f"]).unwrap();
    assert!(result.has(&flag));
    assert_eq!(result.value(&a), Ok(&true));
}

#[test]
fn duplicate_form() {
    let mut registry = Registry::new();
    registry
        .add(Flag::new(["-v", "--verbose"], "help text").unwrap().required())
        .unwrap();

    let error = registry
        .add(Flag::new(["-v", "--verbose"], "help text").unwrap().required())
        .unwrap_err();

    assert_eq!(error, ConfigError::DuplicateForm("-v".to_string()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn empty_forms() {
    let forms: [&str; 0] = [];
    assert_eq!(Flag::new(forms, "help").unwrap_err(), ConfigError::NoForms);
}

#[test]
fn value_round_trip() {
    let mut registry = Registry::new();
    let c = registry
        .add(ValueFlag::float(["-c", "--ccc"], "C.", "<value>").unwrap())
        .unwrap();
    let n = registry
        .add(ValueFlag::<u16>::parsed(["-n"], "N.", "<value>").unwrap())
        .unwrap();

    let result = registry.parse(&["--ccc", "123.4", "-n", "8080"]).unwrap();

    assert_eq!(result.value(&c), Ok(&argmark::value::float("123.4").unwrap()));
    assert_eq!(result.value(&n), Ok(&8080));
}

#[test]
fn query_unmatched() {
    let mut registry = Registry::new();
    let c = registry
        .add(ValueFlag::float(["-c", "--ccc"], "C.", "<value>").unwrap())
        .unwrap();

    let result = registry.parse(&[]).unwrap();

    assert_eq!(
        result.value(&c),
        Err(QueryError::NotMatched("-c".to_string()))
    );
}

#[test]
fn help_idempotent() {
    let mut registry = Registry::new();
    registry
        .add(Flag::new(["-v", "--verbose"], "Log things verbosely. Optional.").unwrap())
        .unwrap();
    registry
        .add(
            ValueFlag::string(
                ["-i", "--input"],
                "This is a help text that is way\nto long. So we stretch it out to multiple\nlines. Hopefully this is readable.",
                "<path>",
            )
            .unwrap(),
        )
        .unwrap();

    let first = registry.help();
    let _ = registry.parse(&["-v"]).unwrap();
    let second = registry.help();

    assert_eq!(first, second);
    assert!(first.starts_with("-v                Log things verbosely. Optional.\n"));
}
