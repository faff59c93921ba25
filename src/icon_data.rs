use base64::{Engine as _, engine::general_purpose};

use crate::error::IconError;

pub const PLACEHOLDER_WIDTH: u32 = 1;
pub const PLACEHOLDER_HEIGHT: u32 = 1;

/// 1x1 PNG used for every generated icon, whatever size it is named after.
pub const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVQYV2NgYAAAAAMAAWgmWQ0AAAAASUVORK5CYII=";

pub fn decode_base64(literal: &str) -> Result<Vec<u8>, IconError> {
    Ok(general_purpose::STANDARD.decode(literal)?)
}

pub fn decode_placeholder() -> Result<Vec<u8>, IconError> {
    decode_base64(PLACEHOLDER_PNG_BASE64)
}
