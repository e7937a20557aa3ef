//! Integration tests for patterns, match results and the operations built
//! on them.

use regex_scan::{
    compat, CompileConfig, Encoding, Options, Pattern, RegexError, Segment, Span, Syntax,
    Template,
};

#[test]
fn test_lastindex() {
    let flat = Pattern::new("(a)(b)").unwrap();
    let m = flat.match_prefix("ab").unwrap().unwrap();
    assert_eq!(m.lastindex(), Some(2));

    let nested = Pattern::new("((a)(b))").unwrap();
    let m = nested.match_prefix("ab").unwrap().unwrap();
    assert_eq!(m.lastindex(), Some(1));

    let none = Pattern::new("(x)?y").unwrap();
    let m = none.search("y").unwrap().unwrap();
    assert_eq!(m.lastindex(), None);
    assert_eq!(m.lastgroup(), None);
}

#[test]
fn test_lastgroup() {
    let pattern = Pattern::new(r"(?P<word>\w+)(\d)?").unwrap();

    let m = pattern.match_prefix("abc").unwrap().unwrap();
    assert_eq!(m.lastgroup(), Some("word"));

    // group 2 ends last but has no name
    let m = Pattern::new(r"(?P<word>[a-z]+)(\d)")
        .unwrap()
        .match_prefix("abc1")
        .unwrap()
        .unwrap();
    assert_eq!(m.lastindex(), Some(2));
    assert_eq!(m.lastgroup(), None);
}

#[test]
fn test_expand() {
    let pattern = Pattern::new(r"(a)(?P<name>b)").unwrap();
    let m = pattern.search("xab").unwrap().unwrap();
    assert_eq!(m.expand(r"\1-\g<name>").unwrap(), "a-b");
}

#[test]
fn test_group_access() {
    let pattern = Pattern::new(r"(?P<user>\w+)@(?P<host>\w+)(\.com)?").unwrap();
    let m = pattern.search("mail: me@example").unwrap().unwrap();

    assert_eq!(m.as_str(), "me@example");
    assert_eq!(m.span(), Span::new(6, 16));
    assert_eq!(m.group(0).unwrap(), Some("me@example"));
    assert_eq!(m.group("host").unwrap(), Some("example"));
    assert_eq!(m.group(3).unwrap(), None);
    assert_eq!(m.span_of("user").unwrap(), Some(Span::new(6, 8)));
    assert_eq!(m.start_of(2).unwrap(), Some(9));
    assert_eq!(m.end_of(3).unwrap(), None);
    assert_eq!(m.groups(), vec![Some("me"), Some("example"), None]);
    assert_eq!(m.groups_or(""), vec!["me", "example", ""]);

    let dict = m.groupdict();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict["user"], Some("me"));

    assert_eq!(
        m.group("port"),
        Err(RegexError::NoSuchGroup("port".to_string()))
    );
    assert!(matches!(m.group(4), Err(RegexError::NoSuchGroup(_))));
}

#[test]
fn test_unmatched_group_distinct_from_empty_match() {
    let pattern = Pattern::new("(a*)(b)?").unwrap();
    let m = pattern.match_prefix("c").unwrap().unwrap();
    assert_eq!(m.group(1).unwrap(), Some(""));
    assert_eq!(m.group(2).unwrap(), None);
}

#[test]
fn test_match_window() {
    let pattern = Pattern::new(r"\w+$").unwrap();

    // endpos acts as the end of the subject
    let m = pattern.search_at("hello world", 0, Some(5)).unwrap().unwrap();
    assert_eq!(m.as_str(), "hello");
    assert_eq!((m.pos(), m.endpos()), (0, 5));

    // text before pos is still context for \b
    let word = Pattern::new(r"\bo").unwrap();
    assert!(word.search_at("foo", 2, None).unwrap().is_none());
}

#[test]
fn test_templates_are_reusable() {
    let template = Template::parse(r"\2/\1");
    let pattern = Pattern::new(r"(\d+)-(\d+)").unwrap();
    let out = pattern.sub(&template, "1-2 3-4").unwrap();
    assert_eq!(out, "2/1 4/3");
}

#[test]
fn test_split_with_groups() {
    let pattern = Pattern::new(r"\s*([,;])\s*").unwrap();
    assert_eq!(
        pattern.split("a , b;c"),
        vec![
            Segment::Text("a"),
            Segment::Groups(vec![Some(",")]),
            Segment::Text("b"),
            Segment::Groups(vec![Some(";")]),
            Segment::Text("c"),
        ]
    );
}

#[test]
fn test_options() {
    let verbose = CompileConfig::new().with_options(Options::VERBOSE);
    let pattern = Pattern::with_config(r"\d+ \s* - \s* \d+  # a range", verbose).unwrap();
    assert!(pattern.is_match("10-20"));

    let dotall = CompileConfig::new().with_options(Options::DOTALL);
    assert!(Pattern::with_config("a.b", dotall).unwrap().is_match("a\nb"));
    assert!(!Pattern::new("a.b").unwrap().is_match("a\nb"));

    let no_groups = CompileConfig::new().with_options(Options::DONT_CAPTURE_GROUP);
    let pattern = Pattern::with_config("(a)(b)", no_groups).unwrap();
    assert_eq!(pattern.group_len(), 0);
    assert_eq!(pattern.search("ab").unwrap().unwrap().as_str(), "ab");
}

#[test]
fn test_unsupported_configuration() {
    for options in [Options::FIND_LONGEST, Options::NOTBOL, Options::NOTEOL] {
        let config = CompileConfig::new().with_options(options);
        assert!(matches!(
            Pattern::with_config("a", config),
            Err(RegexError::Engine(_))
        ));
    }

    let config = CompileConfig::new().with_encoding(Encoding::Sjis);
    assert!(Pattern::with_config("a", config).is_err());

    let config = CompileConfig::new().with_syntax(Syntax::Emacs);
    assert!(Pattern::with_config("a", config).is_err());
}

#[test]
fn test_config_json() {
    let config = CompileConfig::new()
        .with_options(Options::IGNORECASE | Options::MULTILINE)
        .with_syntax(Syntax::Ruby);
    let json = config.to_json().unwrap();
    assert_eq!(CompileConfig::from_json(&json).unwrap(), config);
    assert_eq!(CompileConfig::from_json("{}").unwrap(), CompileConfig::default());
    assert!(matches!(
        CompileConfig::from_json(r#"{"options":"loud"}"#),
        Err(RegexError::Config(_))
    ));
}

#[test]
fn test_compat_functions() {
    let m = compat::match_prefix(r"(\w+)", "hi there", Options::NONE)
        .unwrap()
        .unwrap();
    assert_eq!(m.group(1).unwrap(), Some("hi"));

    assert_eq!(
        compat::find_all("[A-Z]", "aBcD", Options::NONE).unwrap(),
        vec!["B", "D"]
    );
    assert_eq!(
        compat::find_all("b", "aBcD", Options::IGNORECASE).unwrap(),
        vec!["B"]
    );
    assert_eq!(compat::subn(" ", "_", "a b c", 0).unwrap(), ("a_b_c".to_string(), 2));
}
