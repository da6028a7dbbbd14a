#![cfg(feature = "serialization")]

use justify_text::{Color, JustifyConfig, Side, SideStyle, WidthIntent};

#[test]
fn test_width_intent_from_raw() {
    let intents: Vec<WidthIntent> = serde_json::from_str("[-1, -2, 120.0]").unwrap();
    assert_eq!(
        intents,
        vec![
            WidthIntent::Fill,
            WidthIntent::Shrink,
            WidthIntent::Exact(120.0)
        ]
    );
    assert_eq!(
        serde_json::to_string(&WidthIntent::Shrink).unwrap(),
        "-2.0"
    );
}

#[test]
fn test_bad_width_intent_is_rejected() {
    let err = serde_json::from_str::<WidthIntent>("0").unwrap_err();
    assert!(err.to_string().contains("invalid width 0"), "{}", err);
    assert!(serde_json::from_str::<WidthIntent>("-3").is_err());
}

#[test]
fn test_missing_fields_take_defaults() {
    let config: JustifyConfig = serde_json::from_str(
        r#"{
            "left": { "text": "Name", "width": 80 },
            "right": { "text": "Alice", "weight": 2 },
            "weighted_free_side": "Right"
        }"#,
    )
    .unwrap();
    assert_eq!(config.left.visible_text(), Some("Name"));
    assert_eq!(config.left.width, WidthIntent::Exact(80.0));
    assert_eq!(config.left.font_size, SideStyle::default().font_size);
    assert_eq!(config.right.width, WidthIntent::Shrink);
    assert_eq!(config.right.weight, 2.0);
    assert_eq!(config.weighted_free_side, Side::Right);
    assert_eq!(config.spacing, JustifyConfig::default().spacing);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_config_survives_json() {
    let mut config = JustifyConfig::default();
    config.left = config.left.with_text("Total").with_weight(1.5);
    config.right = config
        .right
        .with_text("$42.00")
        .with_width(WidthIntent::Exact(64.0))
        .with_weight(0.5);
    config.right.color = Color::from_argb(0x80ff_0000);
    config.bottom_line.stroke = 1.0;
    config.constraints.min_height = 24.0;

    let json = serde_json::to_string(&config).unwrap();
    let loaded: JustifyConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, config);
}
