use super::*;

#[test]
fn reference_values() {
    assert_eq!(label(1, LabelStyle::Letter), "a");
    assert_eq!(label(27, LabelStyle::Letter), "27");
    assert_eq!(label(4, LabelStyle::Roman), "iv");
    assert_eq!(label(3, LabelStyle::Parenthesis), "(3)");
    assert_eq!(label(5, LabelStyle::Number), "5");
}

#[test]
fn letter_range_edges() {
    assert_eq!(label(26, LabelStyle::Letter), "z");
    assert_eq!(label(0, LabelStyle::Letter), "0");
}

#[test]
fn roman_table_and_fallback() {
    assert_eq!(label(1, LabelStyle::Roman), "i");
    assert_eq!(label(9, LabelStyle::Roman), "ix");
    assert_eq!(label(14, LabelStyle::Roman), "xiv");
    assert_eq!(label(20, LabelStyle::Roman), "xx");
    assert_eq!(label(21, LabelStyle::Roman), "21");
}

#[test]
fn unknown_style_names_number() {
    assert_eq!("roman".parse::<LabelStyle>(), Ok(LabelStyle::Roman));
    assert_eq!(" Letter ".parse::<LabelStyle>(), Ok(LabelStyle::Letter));
    assert_eq!("greek".parse::<LabelStyle>(), Ok(LabelStyle::Number));
    assert_eq!("".parse::<LabelStyle>(), Ok(LabelStyle::Number));
}

#[test]
fn serde_uses_lowercase_names_with_fallback() {
    let s: LabelStyle = serde_json::from_str("\"parenthesis\"").unwrap();
    assert_eq!(s, LabelStyle::Parenthesis);
    let s: LabelStyle = serde_json::from_str("\"whatever\"").unwrap();
    assert_eq!(s, LabelStyle::Number);
    assert_eq!(
        serde_json::to_string(&LabelStyle::Roman).unwrap(),
        "\"roman\""
    );
}
