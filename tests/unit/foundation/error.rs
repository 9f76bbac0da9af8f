use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpriteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SpriteError::format("x").to_string().contains("format error:"));
    assert!(SpriteError::render("x").to_string().contains("render error:"));
    assert!(
        SpriteError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpriteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
