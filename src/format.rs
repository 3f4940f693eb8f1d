//! Hebrew month names and gematria date rendering.

use crate::HebrewDate;
use crate::arith::is_leap_year;
use crate::consts::ADAR;

/// Hebrew month names (index 0 unused, months are 1-indexed; index 12 is
/// plain Adar, index 13 is Adar II)
const HEBREW_MONTHS: [&str; 14] = [
    "",
    "ניסן",
    "אייר",
    "סיוון",
    "תמוז",
    "אב",
    "אלול",
    "תשרי",
    "חשוון",
    "כסלו",
    "טבת",
    "שבט",
    "אדר",
    "אדר ב׳",
];

/// Transliterated month names, same indexing
const HEBREW_MONTHS_EN: [&str; 14] = [
    "",
    "Nisan",
    "Iyyar",
    "Sivan",
    "Tammuz",
    "Av",
    "Elul",
    "Tishrei",
    "Cheshvan",
    "Kislev",
    "Tevet",
    "Shevat",
    "Adar",
    "Adar II",
];

const GEMATRIA_ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
const GEMATRIA_TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
const GEMATRIA_HUNDREDS: [&str; 10] = ["", "ק", "ר", "ש", "ת", "תק", "תר", "תש", "תת", "תתק"];

/// Punctuation mark after a single-letter numeral
const GERESH: char = '׳';
/// Punctuation mark before the last letter of a multi-letter numeral
const GERSHAYIM: char = '״';

/// Returns the Hebrew name of a month; month 12 is Adar I in leap years.
pub fn month_name(month: u8, leap: bool) -> &'static str {
    if month == ADAR && leap {
        return "אדר א׳";
    }
    HEBREW_MONTHS.get(usize::from(month)).copied().unwrap_or("")
}

/// Returns the transliterated name of a month; month 12 is Adar I in leap
/// years.
pub fn month_name_en(month: u8, leap: bool) -> &'static str {
    if month == ADAR && leap {
        return "Adar I";
    }
    HEBREW_MONTHS_EN
        .get(usize::from(month))
        .copied()
        .unwrap_or("")
}

/// Appends a geresh to a single letter or inserts a gershayim before the
/// last letter of a longer numeral.
fn punctuate(letters: &str) -> String {
    let mut chars: Vec<char> = letters.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 => {
            chars.push(GERESH);
            chars.into_iter().collect()
        }
        n => {
            chars.insert(n - 1, GERSHAYIM);
            chars.into_iter().collect()
        }
    }
}

fn number_to_gematria(value: u8) -> String {
    // 15 and 16 are written tet-vav / tet-zayin to avoid spelling a
    // divine name
    if value == 15 {
        return "ט״ו".to_owned();
    }
    if value == 16 {
        return "ט״ז".to_owned();
    }

    let tens = GEMATRIA_TENS[usize::from(value / 10)];
    let ones = GEMATRIA_ONES[usize::from(value % 10)];
    punctuate(&format!("{tens}{ones}"))
}

fn year_to_gematria(year: u16) -> String {
    // Years render without the thousands digit, as is conventional
    let y = year % 1000;
    let hundreds = GEMATRIA_HUNDREDS[usize::from(y / 100)];
    let remainder = y % 100;

    if remainder == 0 {
        let mut result = hundreds.to_owned();
        result.push(GERESH);
        return result;
    }
    if remainder == 15 {
        return format!("{hundreds}ט״ו");
    }
    if remainder == 16 {
        return format!("{hundreds}ט״ז");
    }

    let tens = GEMATRIA_TENS[usize::from(remainder / 10)];
    let ones = GEMATRIA_ONES[usize::from(remainder % 10)];
    punctuate(&format!("{hundreds}{tens}{ones}"))
}

/// Renders a date fully in Hebrew, e.g. `א׳ תשרי תשפ״ה`.
pub fn format_hebrew(date: &HebrewDate) -> String {
    let day = number_to_gematria(date.day());
    let month = month_name(date.month(), is_leap_year(date.year()));
    let year = year_to_gematria(date.year());
    format!("{day} {month} {year}")
}

/// Renders a date with the transliterated month name, e.g. `1 Tishrei 5785`.
pub fn format_hebrew_en(date: &HebrewDate) -> String {
    let month = month_name_en(date.month(), is_leap_year(date.year()));
    format!("{} {month} {}", date.day(), date.year())
}
