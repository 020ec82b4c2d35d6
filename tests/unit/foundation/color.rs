use super::*;
use serde_json::json;

#[test]
fn palette_names_resolve() {
    assert_eq!("white".parse::<Background>().unwrap(), Background::WHITE);
    assert_eq!(
        "light_gray".parse::<Background>().unwrap(),
        Background::Solid([245, 245, 245])
    );
    assert_eq!(
        "Light-Blue".parse::<Background>().unwrap(),
        Background::Solid([240, 248, 255])
    );
    assert_eq!(
        "transparent".parse::<Background>().unwrap(),
        Background::Transparent
    );
}

#[test]
fn parses_hex() {
    assert_eq!(
        "#ff8000".parse::<Background>().unwrap(),
        Background::Solid([255, 128, 0])
    );
    assert!("#ff80".parse::<Background>().is_err());
    assert!("#gg0000".parse::<Background>().is_err());
}

#[test]
fn unknown_name_is_config_error() {
    let err = "mauve".parse::<Background>().unwrap_err();
    assert!(matches!(err, FigureError::InvalidConfig(_)));
}

#[test]
fn serde_accepts_names_hex_and_arrays() {
    let bg: Background = serde_json::from_value(json!("cream")).unwrap();
    assert_eq!(bg, Background::Solid([255, 253, 248]));

    let bg: Background = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(bg, Background::Solid([1, 2, 3]));

    assert!(serde_json::from_value::<Background>(json!("nope")).is_err());
}

#[test]
fn display_roundtrips_through_from_str() {
    for (_, bg) in Background::PALETTE {
        assert_eq!(bg.to_string().parse::<Background>().unwrap(), bg);
    }
}

#[test]
fn fill_pixel_matches_mode() {
    assert_eq!(Background::WHITE.fill_rgba(), [255, 255, 255, 255]);
    assert_eq!(Background::Transparent.fill_rgba(), [0, 0, 0, 0]);
}
