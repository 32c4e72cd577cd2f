//! `{name}` 形式のプレースホルダー置換
//!
//! 置換は常に成功する。値が渡されなかったプレースホルダーがあれば
//! テキスト全体が未整形のまま返り、壊れた波括弧はそのまま
//! 出力にコピーされる。

/// Substitute `{name}` placeholders in `text` with the supplied values.
///
/// A placeholder name consists of ASCII alphanumerics and `_`. Substitution
/// is all-or-nothing: if any placeholder lacks a supplied value, the text is
/// returned entirely unformatted. Anything that is not a well-formed
/// placeholder is copied through unchanged.
///
/// # Examples
/// ```
/// use webapp_i18n::interpolate::interpolate;
///
/// assert_eq!(interpolate("Hello {name}", &[("name", "X")]), "Hello X");
/// assert_eq!(interpolate("Hello {name}", &[]), "Hello {name}");
/// ```
#[must_use]
pub fn interpolate(text: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let (before, tail) = rest.split_at(open);
        result.push_str(before);

        let Some(inner) = tail.strip_prefix('{') else {
            rest = tail;
            break;
        };

        match inner.find(['{', '}']) {
            Some(pos) => {
                let (name, after) = inner.split_at(pos);
                if after.starts_with('}') && is_placeholder_name(name) {
                    match args.iter().find(|(key, _)| *key == name) {
                        Some((_, value)) => result.push_str(value),
                        // Any missing value drops all substitutions.
                        None => return text.to_string(),
                    }
                    rest = after.strip_prefix('}').unwrap_or(after);
                } else {
                    // Nested brace or invalid name: emit the brace and rescan.
                    result.push('{');
                    rest = inner;
                }
            }
            None => {
                // Unterminated placeholder: copy through unchanged.
                result.push_str(tail);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
