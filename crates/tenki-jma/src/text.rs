/// Tidy a raw JMA weather sentence for display.
///
/// Plain substitutions in a fixed order: full-width spaces become ASCII
/// spaces, `時々` gets a leading `、`, and every `後` becomes `のち`.
pub fn normalize(text: &str) -> String {
    text.replace('\u{3000}', " ")
        .replace("時々", "、時々")
        .replace('後', "のち")
}
