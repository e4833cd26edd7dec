use serde_json::json;

use crate::*;

fn styled_settings() -> BurnInDestinationSettings {
    BurnInDestinationSettings::default()
        .alignment(BurnInAlignment::Centered)
        .background_color(BurnInBackgroundColor::Black)
        .background_opacity(128)
        .font(InputLocation::default().uri("s3://fonts/captions.ttf"))
        .font_color(BurnInFontColor::White)
        .font_resolution(96)
        .font_size("auto")
        .x_position(10)
}

#[test]
fn test_field_by_field_copy_is_equal() {
    let settings = styled_settings();
    let copy = BurnInDestinationSettings {
        alignment: Some(BurnInAlignment::Centered),
        background_color: Some(BurnInBackgroundColor::Black),
        background_opacity: Some(128),
        font: Some(InputLocation {
            uri: Some("s3://fonts/captions.ttf".to_owned()),
            ..Default::default()
        }),
        font_color: Some(BurnInFontColor::White),
        font_resolution: Some(96),
        font_size: Some("auto".to_owned()),
        x_position: Some(10),
        ..Default::default()
    };

    assert_eq!(settings, copy);
    assert_eq!(settings.clone(), copy);
    assert_ne!(settings, copy.y_position(10));
}

#[test]
fn test_string_and_enum_overloads() {
    let typed = BurnInDestinationSettings::default()
        .alignment(BurnInAlignment::Smart)
        .teletext_grid_control(BurnInTeletextGridControl::Scaled);
    let raw = BurnInDestinationSettings::default()
        .alignment("SMART")
        .teletext_grid_control("SCALED");

    assert_eq!(typed, raw);
    assert_eq!(
        typed.alignment.as_ref().map(ToString::to_string),
        Some(BurnInAlignment::Smart.to_string())
    );
}

#[test]
fn test_unset_field_equals_default() {
    let mut settings = BurnInDestinationSettings::default().shadow_color("BLACK");
    settings.shadow_color = None;

    assert_eq!(settings, BurnInDestinationSettings::default());
    assert_eq!(serde_json::to_value(&settings).unwrap(), json!({}));
    assert!(!format!("{settings:?}").contains("BLACK"));
}

#[test]
fn test_serialize_wire_names() {
    assert_eq!(
        serde_json::to_value(styled_settings()).unwrap(),
        json!({
            "alignment": "CENTERED",
            "backgroundColor": "BLACK",
            "backgroundOpacity": 128,
            "font": { "uri": "s3://fonts/captions.ttf" },
            "fontColor": "WHITE",
            "fontResolution": 96,
            "fontSize": "auto",
            "xPosition": 10,
        })
    );
}

#[test]
fn test_validate_ranges() {
    assert_eq!(styled_settings().validate(), Ok(()));

    let settings = styled_settings().font_resolution(72);
    assert!(matches!(
        settings.validate(),
        Err(ModelError::OutOfRange {
            field: "BurnInDestinationSettings.fontResolution",
            ..
        })
    ));

    let settings = styled_settings().background_opacity(256);
    assert!(settings.validate().is_err());
}

#[test]
fn test_validate_font_size() {
    assert_eq!(styled_settings().font_size("24").validate(), Ok(()));
    assert!(styled_settings().font_size("0").validate().is_err());
    assert!(styled_settings().font_size("large").validate().is_err());
}
