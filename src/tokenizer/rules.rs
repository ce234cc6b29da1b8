// Character tables and static patterns shared by the tokenizer passes.

use lazy_static::lazy_static;
use regex::Regex;

/// Hyphen-class code points, treated like ASCII `-` when joining or splitting.
pub const HYPHENS: &[char] = &[
    '\u{00AD}', '\u{058A}', '\u{05BE}', '\u{0F0C}', '\u{1400}', '\u{1806}', '\u{2010}',
    '\u{2011}', '\u{2012}', '\u{2E17}', '\u{30A0}', '-',
];

/// Apostrophe lookalikes that start a contraction or possessive tail.
pub const APOSTROPHES: &[char] = &[
    '\'', '\u{00B4}', '\u{02B9}', '\u{02BC}', '\u{2019}', '\u{2032}',
];

/// Sentence-terminal marks allowed inside a lowercase-uppercase transition.
pub const TERMINALS: &[char] = &['.', '!', '?'];

/// Glue characters that are not hyphens but split like them mid-word.
pub const JOINERS: &[char] = &[',', ';', '_'];

pub const ELLIPSIS: &str = "...";

lazy_static! {
    /// A chunk is a maximal run of anything but whitespace and U+200B.
    pub static ref CHUNK: Regex =
        Regex::new(r"[^\s\x{200B}]+").expect("chunk pattern is valid");

    /// Hyphen, optional horizontal space, one newline, optional horizontal space.
    /// The surrounding letters are checked by the caller since `regex` has no lookaround.
    pub static ref HYPHEN_LINEBREAK: Regex = Regex::new(
        r"[\x{00AD}\x{058A}\x{05BE}\x{0F0C}\x{1400}\x{1806}\x{2010}\x{2011}\x{2012}\x{2E17}\x{30A0}\-][ \t\x{00A0}\r]*\n[ \t\x{00A0}]*"
    )
    .expect("hyphen line-break pattern is valid");

    static ref LETTER: Regex = Regex::new(r"\p{L}").expect("letter class is valid");
    static ref LOWERCASE: Regex = Regex::new(r"\p{Ll}").expect("lowercase class is valid");
    static ref UPPERCASE: Regex = Regex::new(r"\p{Lu}").expect("uppercase class is valid");
    static ref NUMBER: Regex = Regex::new(r"\p{N}").expect("number class is valid");
    static ref DECIMAL: Regex = Regex::new(r"\p{Nd}").expect("decimal class is valid");
    static ref BRACKET: Regex =
        Regex::new(r"[\p{Ps}\p{Pe}]").expect("bracket class is valid");
}

fn in_class(class: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    class.is_match(c.encode_utf8(&mut buf))
}

pub fn is_letter(c: char) -> bool {
    // ASCII fast path; the general category lookup covers the rest.
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    in_class(&LETTER, c)
}

pub fn is_lowercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_lowercase();
    }
    in_class(&LOWERCASE, c)
}

pub fn is_uppercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    in_class(&UPPERCASE, c)
}

pub fn is_decimal(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    in_class(&DECIMAL, c)
}

/// Letter or number in the Unicode general-category sense (`\p{L}` or `\p{N}`).
pub fn is_alphanumeric(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric();
    }
    in_class(&LETTER, c) || in_class(&NUMBER, c)
}

pub fn is_bracket(c: char) -> bool {
    in_class(&BRACKET, c)
}

pub fn is_hyphen(c: char) -> bool {
    HYPHENS.contains(&c)
}

pub fn is_apostrophe(c: char) -> bool {
    APOSTROPHES.contains(&c)
}

pub fn is_terminal(c: char) -> bool {
    TERMINALS.contains(&c)
}

/// Mid-word glue: comma, semicolon, underscore or any hyphen.
pub fn is_joiner(c: char) -> bool {
    JOINERS.contains(&c) || is_hyphen(c)
}

/// True when the separator may be folded into spacing instead of being emitted.
pub fn is_hyphen_or_underscore(separator: &str) -> bool {
    !separator.is_empty() && separator.chars().all(|c| c == '_' || is_hyphen(c))
}
