// ABOUTME: Case transforms: whole-string title casing and first-character capitalization.
// ABOUTME: Lower-casing uses Rust's Unicode default tables; word starts use title case where it differs from upper case.

/// Lower-case the whole input, then title-case the first letter of every
/// whitespace-delimited word. Leading punctuation is skipped when looking for
/// that letter, but a leading digit ends the search (`1st` stays `1st`).
/// Whitespace runs are preserved as-is.
///
/// ```
/// assert_eq!(eventkit_text::to_title("hello world"), "Hello World");
/// assert_eq!(eventkit_text::to_title("HELLO"), "Hello");
/// assert_eq!(eventkit_text::to_title("(hello) world"), "(Hello) World");
/// ```
pub fn to_title(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;

    for c in lowered.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start && c.is_alphabetic() {
            push_title_case(&mut out, c);
            at_word_start = false;
        } else {
            out.push(c);
            if c.is_alphanumeric() {
                at_word_start = false;
            }
        }
    }

    out
}

/// Title-case the first character if it is lower case; everything else is
/// left untouched.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out = String::with_capacity(input.len());
            push_title_case(&mut out, first);
            out.extend(chars);
            out
        }
        _ => input.to_string(),
    }
}

/// Append the title-case form of `c`. Upper case is used except for the
/// characters whose Unicode title case differs from it: the Latin digraphs
/// and the sharp s. Other multi-char upper cases (ligatures such as `ﬁ`)
/// still expand to all capitals.
fn push_title_case(out: &mut String, c: char) {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => out.push('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => out.push('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => out.push('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => out.push('ǲ'),
        'ß' => out.push_str("Ss"),
        _ => out.extend(c.to_uppercase()),
    }
}
