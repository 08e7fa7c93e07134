//! Translation key to identifier normalization.

/// Names the generated translator defines itself. A translation key must not
/// normalize to any of them.
pub const RESERVED_NAMES: &[&str] = &["SetLanguage", "NewTranslator"];

/// Returns the reserved name `name` collides with, if any.
pub fn reserved_conflict(name: &str) -> Option<&'static str> {
    RESERVED_NAMES.iter().copied().find(|reserved| *reserved == name)
}

/// Turn a translation key into an exported PascalCase identifier.
///
/// Every character that is not a letter or an ASCII digit separates words.
/// The first character of each word is upper-cased and the rest is kept, so
/// both `root_message` and `rootMessage` become `RootMessage`, and `größe`
/// becomes `Größe`. A result that does not start with an upper-case letter
/// (a digit, or a letter without case such as `名`) gets a `T` prefix, which
/// keeps the Go method exported.
///
/// ```
/// use lingo::core::to_public_name;
///
/// assert_eq!(to_public_name("root_message"), "RootMessage");
/// assert_eq!(to_public_name("multiline-notification"), "MultilineNotification");
/// assert_eq!(to_public_name("404_title"), "T404Title");
/// ```
pub fn to_public_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for word in key.split(|c: char| !(c.is_alphabetic() || c.is_ascii_digit())) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.extend(chars);
        }
    }

    if !name.starts_with(char::is_uppercase) {
        name.insert(0, 'T');
    }
    name
}
