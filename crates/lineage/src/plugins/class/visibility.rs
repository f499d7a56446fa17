//! Visibility classification from member naming conventions
//!
//! A leading underscore marks a protected member; a leading underscore
//! together with a double underscore marks a private (name-mangled) one.

use super::database::Visibility;

/// Deduce the implied visibility of a member name
pub fn classify(name: &str) -> Visibility {
    if name.starts_with('_') && name.contains("__") {
        Visibility::Private
    } else if name.starts_with('_') {
        Visibility::Protected
    } else {
        Visibility::Public
    }
}

/// Returns true for special `__name__` members
pub fn is_dunder(name: &str) -> bool {
    name.starts_with("__") && name.ends_with("__")
}

/// Undo owner-prefix mangling (`_Owner__name` becomes `__name`)
pub fn unmangle<'a>(owner: &str, name: &'a str) -> &'a str {
    name.strip_prefix('_')
        .and_then(|rest| rest.strip_prefix(owner))
        .filter(|rest| rest.starts_with("__"))
        .unwrap_or(name)
}

/// Visibility and display name of a data member
///
/// Visibility comes from the unmangled name; the display name drops the
/// leading underscores.
pub fn data_member(owner: &str, name: &str) -> (Visibility, String) {
    let unmangled = unmangle(owner, name);
    let display = unmangled.trim_start_matches('_');
    let display = if display.is_empty() { unmangled } else { display };
    (classify(unmangled), display.to_string())
}
