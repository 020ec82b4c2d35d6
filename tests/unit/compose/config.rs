use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = CompositionConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.max_columns, 3);
    assert_eq!(cfg.base_height, 600);
    assert_eq!(cfg.padding, 50);
    assert_eq!(cfg.font_size, 45);
    assert!(cfg.show_labels);
    assert_eq!(cfg.label_style, LabelStyle::Number);
    assert_eq!(cfg.background, Background::WHITE);
}

#[test]
fn zero_ranges_are_rejected() {
    for cfg in [
        CompositionConfig {
            max_columns: 0,
            ..Default::default()
        },
        CompositionConfig {
            base_height: 0,
            ..Default::default()
        },
        CompositionConfig {
            font_size: 0,
            ..Default::default()
        },
    ] {
        assert!(matches!(cfg.validate(), Err(FigureError::InvalidConfig(_))));
    }
}

#[test]
fn zero_padding_is_allowed() {
    CompositionConfig {
        padding: 0,
        ..Default::default()
    }
    .validate()
    .unwrap();
}

#[test]
fn text_area_rounds_half_up() {
    let cfg = CompositionConfig::default();
    assert_eq!(cfg.text_area_height(), 68);

    let cfg = CompositionConfig {
        font_size: 20,
        ..Default::default()
    };
    assert_eq!(cfg.text_area_height(), 30);

    let cfg = CompositionConfig {
        show_labels: false,
        ..Default::default()
    };
    assert_eq!(cfg.text_area_height(), 0);
}

#[test]
fn json_partial_documents_fill_defaults() {
    let cfg = CompositionConfig::from_json_str(
        r#"{"max_columns": 2, "background": "light_blue", "label_style": "roman"}"#,
    )
    .unwrap();
    assert_eq!(cfg.max_columns, 2);
    assert_eq!(cfg.background, Background::Solid([240, 248, 255]));
    assert_eq!(cfg.label_style, LabelStyle::Roman);
    assert_eq!(cfg.base_height, 600);
}

#[test]
fn json_errors_are_config_errors() {
    for doc in [
        r#"{"max_columns": 0}"#,
        r#"{"padding": -5}"#,
        r#"{"unknown_field": true}"#,
        r#"{"background": "plaid"}"#,
        "not json",
    ] {
        assert!(
            matches!(
                CompositionConfig::from_json_str(doc),
                Err(FigureError::InvalidConfig(_))
            ),
            "{doc}"
        );
    }
}

#[test]
fn heights_past_the_canvas_limit_are_rejected_up_front() {
    let tall = CompositionConfig {
        base_height: 100_000,
        show_labels: false,
        ..Default::default()
    };
    assert!(matches!(tall.validate(), Err(FigureError::InvalidConfig(_))));

    // 65_300 + round(1.5 * 100) + 2 * 50 = 65_550
    let with_captions = CompositionConfig {
        base_height: 65_300,
        font_size: 100,
        ..Default::default()
    };
    assert!(matches!(
        with_captions.validate(),
        Err(FigureError::InvalidConfig(_))
    ));

    let fits = CompositionConfig {
        show_labels: false,
        ..with_captions
    };
    fits.validate().unwrap();
}

#[test]
fn padding_past_the_canvas_limit_is_rejected() {
    let cfg = CompositionConfig {
        padding: 40_000,
        base_height: 10,
        ..Default::default()
    };
    assert!(matches!(cfg.validate(), Err(FigureError::InvalidConfig(_))));
}
