//! Integration tests for the public icon and image style APIs.

use proptest::prelude::*;
use promptstyle::{catalog, icon, image, StyleKind, PROMPT_PREFIX};
use serde_json::Value;

fn payload(prompt: &str) -> Value {
    let body = prompt
        .strip_prefix(PROMPT_PREFIX)
        .expect("structured prompt should start with the instruction line");
    serde_json::from_str(body).expect("prompt body should be valid JSON")
}

/// Reads the leaf each icon style substitutes the subject into.
fn icon_subject(key: u32, json: &Value) -> &Value {
    match key {
        1 | 3 => &json["subject"]["type"],
        _ => &json["object"],
    }
}

#[test]
fn test_icon_red_shoe() {
    let prompt = icon::generate_icon_prompt(1, "a red shoe");
    assert!(prompt.starts_with("Create an image:\n{\n  \"object\": \"spot_illustration\""));
    assert_eq!(payload(&prompt)["subject"]["type"], "a red shoe");
}

#[test]
fn test_every_icon_style_embeds_subject() {
    for key in 1..=4 {
        let json = payload(&icon::generate_icon_prompt(key, "a lighthouse"));
        assert_eq!(icon_subject(key, &json), "a lighthouse", "style {key}");
    }
}

#[test]
fn test_image_sentinel_and_placeholders() {
    assert_eq!(image::generate_image_prompt(0, "anything"), "anything");
    assert_eq!(image::generate_image_prompt(2, "anything"), "anything");
    assert_eq!(image::generate_image_prompt(3, "anything"), "anything");
    assert_eq!(image::generate_image_prompt(4, "anything"), "anything");
}

#[test]
fn test_counts() {
    assert_eq!(icon::style_count(), 4);
    assert_eq!(image::image_style_count(), 4);
}

#[test]
fn test_metadata_for_defined_and_undefined_keys() {
    let expected = [
        (1, "Spot Illustration", "✏️", "Flat 2D geometric"),
        (2, "3D Clay", "🏺", "Dark blue matte"),
        (3, "Photo Realism", "📷", "Hyperrealistic"),
        (4, "Isometric Flat", "🔷", "Corporate geometric"),
    ];
    for (key, name, emoji, description) in expected {
        let meta = icon::style_metadata(key).unwrap();
        assert_eq!((meta.name, meta.emoji, meta.description), (name, emoji, description));
    }

    let macro_style = image::style_metadata(1).unwrap();
    assert_eq!(macro_style.name, "Macro Close-up");
    assert_eq!(
        macro_style.preview_style,
        "background: linear-gradient(135deg, #2d5016, #4a7c23);"
    );

    assert!(icon::style_metadata(5).is_none());
    assert!(image::style_metadata(5).is_none());
}

#[test]
fn test_metadata_json_shape() {
    let value = serde_json::to_value(icon::style_metadata(1).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Spot Illustration",
            "emoji": "✏️",
            "description": "Flat 2D geometric",
            "previewStyle": "background: #FFFFFF; border: 2px solid #000B39;"
        })
    );
}

#[test]
fn test_catalog_lookup_matches_module_functions() {
    let icons = catalog(StyleKind::Icon);
    let images = catalog(StyleKind::Image);
    for key in 0..=5 {
        assert_eq!(icons.is_valid(key), icon::is_valid_style(key));
        assert_eq!(images.is_available(key), image::is_image_style_available(key));
        assert_eq!(
            images.generate(key, "a glacier"),
            image::generate_image_prompt(key, "a glacier")
        );
    }
}

#[test]
fn test_structural_characters_do_not_change_shape() {
    let subject = "x\", \"object\": \"injected";
    let json = payload(&icon::generate_icon_prompt(2, subject));
    assert_eq!(json["object"], subject);
    assert_eq!(json["task_type"], "generation");
}

proptest! {
    #[test]
    fn prop_icon_subject_survives_serialization(key in 1u32..=4, subject in any::<String>()) {
        let json = payload(&icon::generate_icon_prompt(key, &subject));
        prop_assert_eq!(icon_subject(key, &json), &Value::String(subject));
    }

    #[test]
    fn prop_image_subject_survives_serialization(subject in any::<String>()) {
        let json = payload(&image::generate_image_prompt(1, &subject));
        prop_assert_eq!(&json["subject"]["type"], &Value::String(subject));
    }

    #[test]
    fn prop_unavailable_image_styles_pass_prompt_through(key in prop_oneof![Just(0u32), 2u32..=1000], subject in ".*") {
        prop_assert_eq!(image::generate_image_prompt(key, &subject), subject);
    }

    #[test]
    fn prop_unknown_icon_styles_use_plain_prompt(key in 5u32..=u32::MAX, subject in "[a-z ]{0,40}") {
        prop_assert_eq!(
            icon::generate_icon_prompt(key, &subject),
            format!("Icon of {subject}, clean simple design, centered, high quality")
        );
    }

    #[test]
    fn prop_generation_is_idempotent(key in 0u32..=6, subject in ".{0,64}") {
        prop_assert_eq!(
            icon::generate_icon_prompt(key, &subject),
            icon::generate_icon_prompt(key, &subject)
        );
        prop_assert_eq!(
            image::generate_image_prompt(key, &subject),
            image::generate_image_prompt(key, &subject)
        );
    }
}
