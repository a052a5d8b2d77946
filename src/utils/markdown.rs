/// Escapes text for Telegram's legacy `Markdown` parse mode.
///
/// Telegram rejects a message whose entities do not balance, so a student
/// name such as `snake_case*` would make the whole report undeliverable.
/// Outside of an entity, `_`, `*`, `` ` `` and `[` are escaped with a backslash.
pub fn escape_markdown(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_markdown("Олена Коваль, PI-21"), "Олена Коваль, PI-21");
    }

    #[test]
    fn entity_markers_are_escaped() {
        assert_eq!(escape_markdown("a_b*c`d[e]"), "a\\_b\\*c\\`d\\[e]");
    }
}
