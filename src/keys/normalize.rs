// ---------------------------------------------------------------------------
// Diacritic folding
// ---------------------------------------------------------------------------

/// Fold a lowercase accented character to its plain Latin letter.
fn fold(c: char) -> char {
    match c {
        'å' | 'ä' | 'à' | 'á' => 'a',
        'ö' | 'ó' | 'ò' => 'o',
        'é' | 'è' | 'ë' => 'e',
        'ü' => 'u',
        other => other,
    }
}

/// Lookup form of an identifier: lowercased, with the covered diacritics
/// folded away. `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(input: &str) -> String {
    input.to_lowercase().chars().map(fold).collect()
}

// ---------------------------------------------------------------------------
// Mojibake repair
// ---------------------------------------------------------------------------

/// Second half of a UTF-8 sequence for `Ã?` misread as Windows-1252,
/// mapped back to the intended character.
const MOJIBAKE: &[(char, char)] = &[
    ('¥', 'å'),
    ('¤', 'ä'),
    ('¶', 'ö'),
    ('…', 'Å'),
    ('„', 'Ä'),
    ('–', 'Ö'),
    ('©', 'é'),
    ('¼', 'ü'),
];

/// Replace known garbled two-character sequences (`Ã¶` → `ö`, ...) with the
/// character they were meant to be. Anything not in the table is kept.
pub fn repair_mojibake(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == 'Ã' {
            let repaired = chars.peek().and_then(|next| {
                MOJIBAKE
                    .iter()
                    .find(|(garbled, _)| garbled == next)
                    .map(|&(_, fixed)| fixed)
            });
            if let Some(fixed) = repaired {
                chars.next();
                out.push(fixed);
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Title-case each whitespace-separated word: leading punctuation is kept
/// as-is, the first letter or digit is uppercased and the rest lowercased.
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_word_char = false;
    for c in input.chars() {
        if c.is_whitespace() {
            seen_word_char = false;
            out.push(c);
        } else if seen_word_char {
            out.extend(c.to_lowercase());
        } else if c.is_alphanumeric() || c == '_' {
            seen_word_char = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
