use crate::{Style, StyleDefinition, StyleError, StyleOverride, StyleRegistry, TextAlign};
use quire_types::Color;

fn body(size: f32) -> Style {
    Style {
        font_size: size,
        leading: size * 1.6,
        ..Style::default()
    }
}

#[test]
fn test_last_registration_wins() {
    let mut registry = StyleRegistry::new();
    registry.register("Body", body(11.0)).unwrap();
    registry
        .register(
            "Body",
            Style {
                font_family: "Times-Roman".into(),
                ..body(9.0)
            },
        )
        .unwrap();

    let resolved = registry.resolve("Body").unwrap();
    assert_eq!(resolved.font_size, 9.0);
    assert_eq!(resolved.font_family, "Times-Roman");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_resolve_missing_has_no_fallback() {
    let registry = StyleRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(
        registry.resolve("Heading").unwrap_err(),
        StyleError::NotFound("Heading".into())
    );
}

#[test]
fn test_register_rejects_unknown_font() {
    let mut registry = StyleRegistry::new();
    let err = registry
        .register(
            "Fancy",
            Style {
                font_family: "Papyrus".into(),
                ..Style::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StyleError::Config(msg) if msg.contains("Papyrus")));
    assert!(!registry.contains("Fancy"));
}

#[test]
fn test_register_rejects_bad_numbers() {
    let mut registry = StyleRegistry::new();
    assert!(registry.register("Zero", body(0.0)).is_err());
    let negative_space = Style {
        space_after: -2.0,
        ..Style::default()
    };
    assert!(registry.register("Neg", negative_space).is_err());
}

#[test]
fn test_derive_snapshots_parent() {
    let mut registry = StyleRegistry::new();
    registry.register("Body", body(11.0)).unwrap();
    registry
        .derive(
            "Small",
            "Body",
            &StyleOverride {
                font_size: Some(9.0),
                color: Some(Color::rgb(0x64, 0x74, 0x8b)),
                ..Default::default()
            },
        )
        .unwrap();

    // Re-registering the parent leaves the derived snapshot alone.
    registry.register("Body", body(20.0)).unwrap();

    let small = registry.resolve("Small").unwrap();
    assert_eq!(small.font_size, 9.0);
    assert!((small.leading - 10.8).abs() < 1e-4);
    assert_eq!(small.color, Color::rgb(0x64, 0x74, 0x8b));
}

#[test]
fn test_derive_keeps_explicit_leading() {
    let mut registry = StyleRegistry::new();
    registry.register("Body", body(11.0)).unwrap();
    registry
        .derive(
            "Loose",
            "Body",
            &StyleOverride {
                font_size: Some(9.0),
                leading: Some(14.4),
                ..Default::default()
            },
        )
        .unwrap();
    assert!((registry.resolve("Loose").unwrap().leading - 14.4).abs() < 1e-4);
}

#[test]
fn test_derive_from_missing_parent() {
    let mut registry = StyleRegistry::new();
    let err = registry
        .derive("Child", "Nope", &StyleOverride::default())
        .unwrap_err();
    assert_eq!(err, StyleError::NotFound("Nope".into()));
}

#[test]
fn test_from_definitions_json() {
    let json = r##"[
        {"name": "Body", "fontSize": 11, "leading": 17.6},
        {"name": "Title", "parent": "Body", "fontFamily": "Helvetica-Bold", "fontSize": 18, "alignment": "center"},
        {"name": "Muted", "parent": "Body", "color": "#64748b"}
    ]"##;
    let defs: Vec<StyleDefinition> = serde_json::from_str(json).unwrap();
    let registry = StyleRegistry::from_definitions(&defs).unwrap();

    assert_eq!(registry.names(), vec!["Body", "Muted", "Title"]);
    let title = registry.resolve("Title").unwrap();
    assert_eq!(title.font_family, "Helvetica-Bold");
    assert_eq!(title.alignment, TextAlign::Center);
    assert!((title.leading - 21.6).abs() < 1e-4);
    assert!((registry.resolve("Muted").unwrap().leading - 17.6).abs() < 1e-4);
}

#[test]
fn test_from_definitions_forward_parent_fails() {
    let defs = vec![
        StyleDefinition {
            name: "Child".into(),
            parent: Some("Body".into()),
            properties: StyleOverride::default(),
        },
        StyleDefinition {
            name: "Body".into(),
            parent: None,
            properties: StyleOverride::default(),
        },
    ];
    assert!(StyleRegistry::from_definitions(&defs).is_err());
}
