/// Converts a type or field identifier to `snake_case`.
///
/// Word boundaries are found in two passes. The first splits before every
/// capitalized word (`UserComment` -> `User_Comment`), the second splits
/// between a lowercase letter or digit and the uppercase letter that follows
/// it (`EMail` -> `E_Mail`). The result is then lowercased. Underscores and
/// other characters already present are kept as-is, so converting an
/// identifier that is already snake case returns it unchanged.
pub fn snake_case(src: &str) -> String {
    split_lower_upper(&split_capitalized_words(src)).to_lowercase()
}

// Inserts `_` between any character and a following `[A-Z][a-z]+` run.
fn split_capitalized_words(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut dst = String::with_capacity(src.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        dst.push(c);

        let starts_word = c != '\n'
            && chars.get(i + 1).is_some_and(char::is_ascii_uppercase)
            && chars.get(i + 2).is_some_and(char::is_ascii_lowercase);

        if !starts_word {
            i += 1;
            continue;
        }

        // Consume the whole capitalized word so the next match starts after it.
        let mut end = i + 3;
        while chars.get(end).is_some_and(char::is_ascii_lowercase) {
            end += 1;
        }

        dst.push('_');
        dst.extend(&chars[i + 1..end]);
        i = end;
    }

    dst
}

// Inserts `_` between `[a-z0-9]` and a following `[A-Z]`.
fn split_lower_upper(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut dst = String::with_capacity(src.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        dst.push(c);

        let lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();

        match chars.get(i + 1) {
            Some(next) if lower_or_digit && next.is_ascii_uppercase() => {
                dst.push('_');
                dst.push(*next);
                i += 2;
            }
            _ => i += 1,
        }
    }

    dst
}
