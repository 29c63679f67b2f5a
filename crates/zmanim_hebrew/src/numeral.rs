//! Hebrew numerals (gematria) for days and years.

const UNITS: [char; 10] = ['\0', 'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];
const TENS: [char; 10] = ['\0', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const HUNDREDS: [char; 5] = ['\0', 'ק', 'ר', 'ש', 'ת'];

const GERESH: char = '׳';
const GERSHAYIM: char = '״';

/// Letters for 1..=999 without punctuation.
fn letters(n: u32) -> Vec<char> {
    let mut out = Vec::new();
    let mut hundreds = (n / 100) % 10;
    while hundreds > 4 {
        out.push(HUNDREDS[4]);
        hundreds -= 4;
    }
    if hundreds > 0 {
        out.push(HUNDREDS[hundreds as usize]);
    }

    // 15 and 16 avoid spelling the divine name
    match n % 100 {
        15 => out.extend(['ט', 'ו']),
        16 => out.extend(['ט', 'ז']),
        rest => {
            let (tens, units) = (rest / 10, rest % 10);
            if tens > 0 {
                out.push(TENS[tens as usize]);
            }
            if units > 0 {
                out.push(UNITS[units as usize]);
            }
        }
    }
    out
}

/// Gematria for 1..=999 with geresh or gershayim. Thousands are dropped,
/// as is customary for years (5785 → תשפ״ה). Zero gives an empty string.
pub fn hebrew_numeral(n: u32) -> String {
    let mut glyphs = letters(n % 1000);
    match glyphs.len() {
        0 => String::new(),
        1 => {
            glyphs.push(GERESH);
            glyphs.into_iter().collect()
        }
        len => {
            glyphs.insert(len - 1, GERSHAYIM);
            glyphs.into_iter().collect()
        }
    }
}

/// Day of month 1..=30 (`י״ד`, `ט״ו`, `כ׳`). Out-of-range days give an
/// empty string.
pub fn day_numeral(day: u8) -> String {
    if (1..=30).contains(&day) {
        hebrew_numeral(u32::from(day))
    } else {
        String::new()
    }
}

/// Year without thousands.
pub fn year_numeral(year: i32) -> String {
    u32::try_from(year).map(hebrew_numeral).unwrap_or_default()
}
