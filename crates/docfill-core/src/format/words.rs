//! Amounts in words

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Spells out a whole amount in a given locale
pub trait AmountInWords {
    fn to_words(&self, amount: u64) -> String;
}

/// Indian English: lakh and crore grouping, title case
///
/// `1_010_000` becomes `Ten Lakh, Ten Thousand`; `1_010` becomes
/// `One Thousand And Ten`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndianEnglish;

impl AmountInWords for IndianEnglish {
    fn to_words(&self, amount: u64) -> String {
        title_case(&cardinal(amount))
    }
}

/// Lower-case cardinal with Indian grouping
fn cardinal(n: u64) -> String {
    if n < 100 {
        return below_hundred(n);
    }

    let mut groups = Vec::new();
    let mut rest = n;

    if rest >= CRORE {
        groups.push(format!("{} crore", cardinal(rest / CRORE)));
        rest %= CRORE;
    }
    for (unit, name) in [(LAKH, "lakh"), (THOUSAND, "thousand"), (100, "hundred")] {
        if rest >= unit {
            groups.push(format!("{} {}", below_hundred(rest / unit), name));
            rest %= unit;
        }
    }

    let head = groups.join(", ");
    if rest == 0 {
        head
    } else {
        format!("{} and {}", head, below_hundred(rest))
    }
}

fn below_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    let n = n as usize;
    if n < 20 {
        ONES[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{}-{}", TENS[n / 10], ONES[n % 10])
    }
}

/// Upper-case the first letter of every alphabetic run
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
