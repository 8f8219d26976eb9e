// Country Collation
// Locale-style string ordering for the sort-by-country view

use std::cmp::Ordering;

/// Compare two strings the way a root-locale collator would for Latin text.
///
/// Levels, most significant first:
/// 1. base letters, ignoring case and diacritics; `æ`, `œ`, `ß` and `þ`
///    count as the two letters they expand to
/// 2. diacritics (unaccented before accented)
/// 3. case (lowercase before uppercase)
/// 4. code points, so the order is total
pub fn compare(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(&primary(b))
        .then_with(|| a.chars().map(is_accented).cmp(b.chars().map(is_accented)))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

fn primary(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match expansion(c) {
            Some(expanded) => key.push_str(expanded),
            None => key.push(base_letter(c)),
        }
    }
    key
}

fn is_accented(c: char) -> bool {
    c.to_lowercase()
        .any(|l| base_letter(l) != l || expansion(l).is_some())
}

/// Letters a root collator sorts as two base letters
fn expansion(c: char) -> Option<&'static str> {
    match c {
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ß' => Some("ss"),
        'þ' => Some("th"),
        _ => None,
    }
}

/// Map a lowercase Latin letter with a diacritic to its base letter
fn base_letter(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' | 'ĺ' | 'ļ' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}
