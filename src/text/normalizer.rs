use once_cell::sync::Lazy;
use regex::Regex;

static LOWER_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("lower/upper pattern"));
static PERIOD_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([A-Za-z])").expect("period/letter pattern"));
static COMMA_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",([A-Za-z])").expect("comma/letter pattern"));
static WORD_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w)(\d)").expect("word/digit pattern"));
static DIGIT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)(\w)").expect("digit/word pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Repair word boundaries lost during text extraction and collapse whitespace.
///
/// Each rule only inserts a single space between two adjacent characters:
///
/// 1. lowercase letter followed by an uppercase letter (`wordNext`)
/// 2. period followed by a letter (`end.Next`)
/// 3. comma followed by a letter (`a,b`)
/// 4. word character followed by a digit (`word5`)
/// 5. digit followed by a word character (`5word`)
///
/// Digits are word characters, so rules 4 and 5 also split digit runs:
/// `2023` becomes `2 0 2 3`.
///
/// The inserted spaces can never form a new match, so applying the function
/// twice gives the same result as applying it once.
pub fn normalize(raw_text: &str) -> String {
    let text = LOWER_UPPER.replace_all(raw_text, "${1} ${2}");
    let text = PERIOD_LETTER.replace_all(&text, ". ${1}");
    let text = COMMA_LETTER.replace_all(&text, ", ${1}");
    let text = split_all(&WORD_DIGIT, &text);
    let text = split_all(&DIGIT_WORD, &text);

    collapse_whitespace(&text)
}

/// Space out every match of a two-character pattern. Neighbouring matches
/// share a character (`123`), so one pass only catches every other pair.
fn split_all(pattern: &Regex, text: &str) -> String {
    let mut text = text.to_string();
    loop {
        let next = pattern.replace_all(&text, "${1} ${2}").into_owned();
        if next == text {
            return text;
        }
        text = next;
    }
}

/// Collapse every run of whitespace to one space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Number of whitespace-delimited words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
