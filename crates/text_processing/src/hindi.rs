//! Hindi language utilities
//!
//! Number words and Devanagari digits, shared by the age and income parsers.

/// Convert a Hindi number word (Devanagari script) to its value
///
/// Covers the words people actually use when stating an age or an income in
/// lakh: units, round tens and the fractional डेढ़ / ढाई / साढ़े forms. Input
/// must already be NFKC-normalized.
///
/// # Examples
/// ```
/// use sahaj_seva_text_processing::hindi::word_to_number;
/// assert_eq!(word_to_number("पांच"), Some(5.0));
/// assert_eq!(word_to_number("साठ"), Some(60.0));
/// assert_eq!(word_to_number("ढाई"), Some(2.5));
/// ```
pub fn word_to_number(word: &str) -> Option<f64> {
    let word = crate::normalize::normalize_str(word);
    match word.as_str() {
        "एक" => Some(1.0),
        "दो" => Some(2.0),
        "तीन" => Some(3.0),
        "चार" => Some(4.0),
        "पांच" | "पाँच" => Some(5.0),
        "छह" | "छः" | "छे" => Some(6.0),
        "सात" => Some(7.0),
        "आठ" => Some(8.0),
        "नौ" => Some(9.0),
        "दस" => Some(10.0),

        "बीस" => Some(20.0),
        "पच्चीस" => Some(25.0),
        "तीस" => Some(30.0),
        "पैंतीस" => Some(35.0),
        "चालीस" => Some(40.0),
        "पैंतालीस" => Some(45.0),
        "पचास" => Some(50.0),
        "पचपन" => Some(55.0),
        "साठ" => Some(60.0),
        "पैंसठ" => Some(65.0),
        "सत्तर" => Some(70.0),
        "पचहत्तर" => Some(75.0),
        "अस्सी" => Some(80.0),
        "नब्बे" => Some(90.0),
        "सौ" => Some(100.0),

        "आधा" => Some(0.5),
        "सवा" => Some(1.25),
        _ if word == normalized("डेढ़") => Some(1.5),
        _ if word == normalized("ढाई") => Some(2.5),
        _ => None,
    }
}

fn normalized(word: &str) -> String {
    crate::normalize::normalize_str(word)
}

/// Replace Devanagari digits (०-९) with ASCII digits
///
/// Parsers match `[0-9]` only, so this runs before any numeric pattern.
pub fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{0966}'..='\u{096F}' => char::from(b'0' + (c as u32 - 0x0966) as u8),
            _ => c,
        })
        .collect()
}
