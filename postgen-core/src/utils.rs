//! Shared string utilities for name sanitization.

/// Convert a string to camelCase by splitting on non-alphanumeric separators
/// (e.g., "get user-list" -> "getUserList").
///
/// The first segment is kept as written; every following segment gets its
/// first character upper-cased. Letters of any script count as alphanumeric,
/// so the function is idempotent.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for segment in s.split(|c: char| !c.is_alphanumeric()) {
        if segment.is_empty() {
            continue;
        }
        if result.is_empty() {
            result.push_str(segment);
        } else {
            result.push_str(&uppercase_first(segment));
        }
    }
    result
}

/// Upper-case the first character of a string, leaving the rest untouched.
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Transliterate Cyrillic characters to their Latin phonetic equivalents.
///
/// Characters from other scripts are passed through unchanged.
pub fn transliterate_cyrillic(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        match cyrillic_to_latin(lower) {
            Some(latin) if lower != c => result.push_str(&uppercase_first(latin)),
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }
    result
}

fn cyrillic_to_latin(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'ґ' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'є' => "ye",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'і' => "i",
        'ї' => "yi",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ў' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}
