/// Media container types eqselect is willing to hand to the player.
/// The list is fixed; there is deliberately no runtime override.
const VALID_EXTENSIONS: &[&str] = &[
    "avi", "flv", "mkv", "mov", "mp3", "mp4", "mpeg", "mpg", "ogg", "ts", "wav", "wmv",
];

/// Whether `name` carries a recognized media extension.
///
/// The extension is whatever follows the last `.` in the name, compared
/// against the allow-list as a whole token, ASCII case-insensitive. Names of
/// two bytes or fewer never qualify, which also rules out `.` and `..`.
pub fn valid_extension(name: &str) -> bool {
    if name.len() <= 2 {
        return false;
    }
    let Some(dot) = name.rfind('.') else {
        return false;
    };
    let ext = &name[dot + 1..];
    if ext.is_empty() {
        return false;
    }
    VALID_EXTENSIONS
        .iter()
        .any(|valid| ext.eq_ignore_ascii_case(valid))
}

#[cfg(test)]
pub(crate) fn all_valid_extensions() -> &'static [&'static str] {
    VALID_EXTENSIONS
}
