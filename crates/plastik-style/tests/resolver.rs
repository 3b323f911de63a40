//! Integration tests covering the resolution pipeline end to end.

use plastik_style::{
    parse_stylesheet, Color, Constraint, Schema, StyleError, StyleKey, StyleLayer, StyleResolver,
    ValueKind,
};

fn key(s: &str) -> StyleKey {
    StyleKey::new(s).unwrap()
}

fn schema() -> Schema {
    Schema::new()
        .declare_with("axes.linewidth", ValueKind::Number, Constraint::Positive)
        .unwrap()
        .declare_with("legend.fontsize", ValueKind::Number, Constraint::Positive)
        .unwrap()
        .declare_with(
            "legend.framealpha",
            ValueKind::Number,
            Constraint::unit_interval(),
        )
        .unwrap()
        .declare_with(
            "xtick.direction",
            ValueKind::Str,
            Constraint::one_of(&["in", "out", "inout"]),
        )
        .unwrap()
        .declare("axes.edgecolor", ValueKind::Color)
        .unwrap()
        .declare_with("figure.figsize", ValueKind::NumberSeq, Constraint::Positive)
        .unwrap()
        .declare("axes.grid", ValueKind::Bool)
        .unwrap()
}

#[test]
fn repeated_resolution_is_deterministic() {
    let mut resolver = StyleResolver::new(schema());
    resolver.register_default(key("axes.linewidth"), 0.5).unwrap();
    resolver
        .register_default(key("figure.figsize"), vec![3.37, 2.08277])
        .unwrap();
    resolver
        .with_theme(
            "print",
            StyleLayer::new("print").with(key("legend.fontsize"), 8),
        )
        .unwrap();

    let overrides = StyleLayer::new("overrides").with(key("axes.linewidth"), 1.0);

    let first = resolver.resolve(&overrides).unwrap();
    let second = resolver.resolve(&overrides).unwrap();
    assert_eq!(first, second);

    let first_entries: Vec<_> = first.iter().collect();
    let second_entries: Vec<_> = second.iter().collect();
    assert_eq!(first_entries, second_entries);
}

#[test]
fn resolving_empty_overrides_twice_is_idempotent() {
    let mut resolver = StyleResolver::new(schema());
    resolver.register_default(key("axes.linewidth"), 0.5).unwrap();

    let empty = StyleLayer::new("overrides");
    let once = resolver.resolve(&empty).unwrap();
    let twice = resolver.resolve(&empty).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn precedence_law_override_always_wins() {
    let mut resolver = StyleResolver::new(schema());
    resolver.register_default(key("axes.linewidth"), 0.5).unwrap();
    resolver.register_default(key("legend.fontsize"), 6).unwrap();

    let overrides = StyleLayer::new("overrides")
        .with(key("axes.linewidth"), 1.0)
        .with(key("legend.fontsize"), 9);
    let resolved = resolver.resolve(&overrides).unwrap();

    assert_eq!(resolved.number("axes.linewidth"), Some(1.0));
    assert_eq!(resolved.number("legend.fontsize"), Some(9.0));
}

#[test]
fn unknown_key_rejected_by_name() {
    let resolver = StyleResolver::new(schema());
    let overrides = StyleLayer::new("overrides").with(key("nonexistent.key"), 1.0);

    match resolver.resolve(&overrides) {
        Err(StyleError::UnknownKeys { keys }) => {
            assert_eq!(keys, vec![key("nonexistent.key")]);
        }
        other => panic!("expected UnknownKeys, got {:?}", other),
    }
}

#[test]
fn two_simultaneous_violations_both_reported() {
    let resolver = StyleResolver::new(schema());
    let overrides = StyleLayer::new("overrides")
        .with(key("legend.fontsize"), -2.0)
        .with(key("legend.framealpha"), 2.0);

    match resolver.resolve(&overrides) {
        Err(err @ StyleError::InvalidValues { .. }) => {
            let pairs = err.violations();
            assert_eq!(pairs.len(), 2);
            let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
            assert!(keys.contains(&"legend.fontsize"));
            assert!(keys.contains(&"legend.framealpha"));
        }
        other => panic!("expected InvalidValues, got {:?}", other),
    }
}

#[test]
fn negative_fontsize_rejected() {
    let resolver = StyleResolver::new(schema());
    let overrides = StyleLayer::new("overrides").with(key("legend.fontsize"), -2.0);

    match resolver.resolve(&overrides) {
        Err(StyleError::InvalidValues { violations }) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].key, key("legend.fontsize"));
            assert!(violations[0].reason.contains("positive"));
        }
        other => panic!("expected InvalidValues, got {:?}", other),
    }
}

#[test]
fn stylesheet_file_feeds_the_resolver() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.style");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(
        f,
        "# paper defaults\n\
         axes.linewidth: 0.5\n\
         figure.figsize: 3.37, 2.08277\n\
         axes.edgecolor: bfbfbf\n\
         xtick.direction: in\n\
         axes.grid: False\n"
    )
    .unwrap();

    let defaults = StyleLayer::from_file(&path).unwrap();
    assert_eq!(defaults.name(), "paper");

    let mut resolver = StyleResolver::new(schema());
    resolver.register_defaults(&defaults).unwrap();

    let resolved = resolver.resolve(&StyleLayer::new("overrides")).unwrap();
    assert_eq!(resolved.number("axes.linewidth"), Some(0.5));
    assert_eq!(
        resolved.number_seq("figure.figsize"),
        Some(&[3.37, 2.08277][..])
    );
    // Bare hex in the file arrives as a color after validation.
    assert_eq!(
        resolved.color("axes.edgecolor"),
        Some(Color::rgb(191, 191, 191))
    );
    assert_eq!(resolved.flag("axes.grid"), Some(false));
}

#[test]
fn yaml_theme_feeds_the_resolver() {
    let theme = StyleLayer::from_yaml(
        "dark",
        "axes.edgecolor: \"e0e0e0\"\nlegend.fontsize: 8\n",
    )
    .unwrap();

    let mut resolver = StyleResolver::new(schema());
    resolver.register_default(key("axes.edgecolor"), Color::rgb(0, 0, 0)).unwrap();
    resolver.with_theme("dark", theme).unwrap();

    let resolved = resolver.resolve(&StyleLayer::new("overrides")).unwrap();
    assert_eq!(
        resolved.color("axes.edgecolor"),
        Some(Color::rgb(224, 224, 224))
    );
}

#[test]
fn stylesheet_parse_error_names_the_line() {
    let err = parse_stylesheet("bad", "axes.linewidth: 0.5\nbroken line\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn error_display_is_batch_friendly() {
    let resolver = StyleResolver::new(schema());
    let overrides = StyleLayer::new("overrides")
        .with(key("first.unknown"), 1.0)
        .with(key("second.unknown"), 2.0);

    let err = resolver.resolve(&overrides).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("first.unknown"));
    assert!(msg.contains("second.unknown"));
}
