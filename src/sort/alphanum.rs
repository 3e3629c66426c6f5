use std::cmp::Ordering;

use super::chunk::{is_digit_chunk, next_chunk};
use super::text::TextOrder;

/// Natural order over strings: digit runs compare as numbers, text runs
/// through a [`TextOrder`].
///
/// "item9" sorts before "item10", "Alpha 2A-900" before "Alpha 2A-8000".
#[derive(Debug, Clone)]
pub struct AlphanumComparator {
    text: TextOrder,
}

impl AlphanumComparator {
    pub fn new(text: TextOrder) -> Self {
        Self { text }
    }

    /// Comparator whose text chunks use code point order
    pub fn ordinal() -> Self {
        Self::new(TextOrder::Ordinal)
    }

    pub fn text_order(&self) -> &TextOrder {
        &self.text
    }

    pub fn compare(&self, s1: &str, s2: &str) -> Ordering {
        self.compare_chunks(s1, s2, false)
    }

    /// Like [`compare`](Self::compare), but text chunks ignore case.
    /// With a collator, collation rules decide instead.
    pub fn compare_ignore_case(&self, s1: &str, s2: &str) -> Ordering {
        self.compare_chunks(s1, s2, true)
    }

    /// Lenient entry point: an absent value on either side compares Equal
    pub fn compare_nullable(&self, s1: Option<&str>, s2: Option<&str>) -> Ordering {
        match (s1, s2) {
            (Some(s1), Some(s2)) => self.compare(s1, s2),
            _ => Ordering::Equal,
        }
    }

    fn compare_chunks(&self, s1: &str, s2: &str, ignore_case: bool) -> Ordering {
        let mut marker1 = 0;
        let mut marker2 = 0;

        while marker1 < s1.len() && marker2 < s2.len() {
            let chunk1 = next_chunk(s1, marker1);
            marker1 += chunk1.len();
            let chunk2 = next_chunk(s2, marker2);
            marker2 += chunk2.len();

            let result = if is_digit_chunk(chunk1) && is_digit_chunk(chunk2) {
                compare_digit_chunks(chunk1, chunk2)
            } else if ignore_case {
                self.text.compare_ignore_case(chunk1, chunk2)
            } else {
                self.text.compare(chunk1, chunk2)
            };

            if result != Ordering::Equal {
                return result;
            }
        }

        s1.chars().count().cmp(&s2.chars().count())
    }
}

/// Longer digit run is the larger number; equal lengths compare digit by digit.
/// "9" < "10", "09" < "10", and "9" < "09".
fn compare_digit_chunks(chunk1: &str, chunk2: &str) -> Ordering {
    chunk1
        .len()
        .cmp(&chunk2.len())
        .then_with(|| chunk1.as_bytes().cmp(chunk2.as_bytes()))
}

/// Leaf comparator for names and readings: natural order or plain text order
#[derive(Debug, Clone)]
pub enum StringOrder {
    Natural(AlphanumComparator),
    Plain(TextOrder),
}

impl StringOrder {
    pub fn new(text: TextOrder, alphanum: bool) -> Self {
        if alphanum {
            StringOrder::Natural(AlphanumComparator::new(text))
        } else {
            StringOrder::Plain(text)
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            StringOrder::Natural(alphanum) => alphanum.compare(a, b),
            StringOrder::Plain(text) => text.compare(a, b),
        }
    }

    /// The underlying text order, used for path tie-breaks
    pub fn text_order(&self) -> &TextOrder {
        match self {
            StringOrder::Natural(alphanum) => alphanum.text_order(),
            StringOrder::Plain(text) => text,
        }
    }

    pub fn is_natural(&self) -> bool {
        matches!(self, StringOrder::Natural(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference natural order list; every entry sorts after the previous one
    const ALPHA_NUM_LIST: &[&str] = &[
        "09X Radonius",
        "10X Radonius",
        "20X Radonius",
        "20X Radonius Prime",
        "30X Radonius",
        "40X Radonius",
        "200X Radonius",
        "1000X Radonius Maximus",
        "Allegia 6R Clasteron",
        "Allegia 50 Clasteron",
        "Allegia 51 Clasteron",
        "Allegia 500 Clasteron",
        "Alpha 2",
        "Alpha 2A",
        "Alpha 2A-900",
        "Alpha 2A-8000",
        "Alpha 100",
        "Alpha 200",
        "Callisto Morphamax",
        "Callisto Morphamax 500",
        "Callisto Morphamax 600",
        "Callisto Morphamax 700",
        "Callisto Morphamax 5000",
        "Callisto Morphamax 6000 SE",
        "Callisto Morphamax 6000 SE2",
        "Callisto Morphamax 7000",
        "Xiph Xlater 5",
        "Xiph Xlater 40",
        "Xiph Xlater 50",
        "Xiph Xlater 58",
        "Xiph Xlater 300",
        "Xiph Xlater 500",
        "Xiph Xlater 2000",
        "Xiph Xlater 5000",
        "Xiph Xlater 10000",
    ];

    #[test]
    fn test_numeric_chunks() {
        let c = AlphanumComparator::ordinal();
        assert_eq!(c.compare("Xiph Xlater 5", "Xiph Xlater 40"), Ordering::Less);
        assert_eq!(c.compare("Alpha 2A-900", "Alpha 2A-8000"), Ordering::Less);
        assert_eq!(c.compare("item9", "item10"), Ordering::Less);
        assert_eq!(c.compare("item10", "item9"), Ordering::Greater);
    }

    #[test]
    fn test_equal_length_digits_fall_through_to_chars() {
        let c = AlphanumComparator::ordinal();
        assert_eq!(c.compare("item09", "item10"), Ordering::Less);
        assert_eq!(c.compare("item09", "item09"), Ordering::Equal);
    }

    #[test]
    fn test_leading_zero_is_longer() {
        let c = AlphanumComparator::ordinal();
        assert_eq!(c.compare("9", "09"), Ordering::Less);
    }

    #[test]
    fn test_chunk_alignment() {
        let c = AlphanumComparator::ordinal();
        assert_eq!(c.compare("a1", "a10"), Ordering::Less);
        assert_eq!(c.compare("a10", "a1"), Ordering::Greater);
    }

    #[test]
    fn test_empty_and_prefix() {
        let c = AlphanumComparator::ordinal();
        assert_eq!(c.compare("", "a"), Ordering::Less);
        assert_eq!(c.compare("a", ""), Ordering::Greater);
        assert_eq!(c.compare("", ""), Ordering::Equal);
        assert_eq!(c.compare("Morphamax 6000 SE", "Morphamax 6000 SE2"), Ordering::Less);
    }

    #[test]
    fn test_absent_values_compare_equal() {
        let c = AlphanumComparator::ordinal();
        assert_eq!(c.compare_nullable(None, Some("a")), Ordering::Equal);
        assert_eq!(c.compare_nullable(Some("a"), None), Ordering::Equal);
        assert_eq!(c.compare_nullable(None, None), Ordering::Equal);
        assert_eq!(c.compare_nullable(Some("a"), Some("b")), Ordering::Less);
    }

    #[test]
    fn test_ignore_case_entry_point() {
        let c = AlphanumComparator::ordinal();
        assert_eq!(c.compare("episode 2", "Episode 10"), Ordering::Greater);
        assert_eq!(c.compare_ignore_case("episode 2", "Episode 10"), Ordering::Less);
    }

    #[test]
    fn test_reference_list_is_sorted() {
        let c = AlphanumComparator::ordinal();
        for pair in ALPHA_NUM_LIST.windows(2) {
            assert_eq!(
                c.compare(pair[0], pair[1]),
                Ordering::Less,
                "{:?} should sort before {:?}",
                pair[0],
                pair[1]
            );
        }

        let mut shuffled: Vec<&str> = ALPHA_NUM_LIST.iter().rev().copied().collect();
        shuffled.sort_by(|a, b| c.compare(a, b));
        assert_eq!(shuffled, ALPHA_NUM_LIST);
    }

    #[test]
    fn test_episode_ordering_by_mode() {
        let natural = StringOrder::new(TextOrder::Ordinal, true);
        let plain = StringOrder::new(TextOrder::Ordinal, false);

        let mut names = vec!["episode 19", "episode 2", "episode 1"];
        names.sort_by(|a, b| natural.compare(a, b));
        assert_eq!(names, vec!["episode 1", "episode 2", "episode 19"]);

        names.sort_by(|a, b| plain.compare(a, b));
        assert_eq!(names, vec!["episode 1", "episode 19", "episode 2"]);
        assert!(natural.is_natural());
        assert!(!plain.is_natural());
    }
}
