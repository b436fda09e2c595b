//! Localized reading reference formatting

use crate::locale::Language;

/// Separator between two references from different books
pub const PAIR_SEPARATOR: &str = " & ";

/// Suffix appended to chapter numbers
pub fn chapter_marker(language: Language) -> &'static str {
    match language {
        Language::Ko => "장",
        Language::En => "",
    }
}

/// `"{book} {chapter}"` with the language's chapter marker
pub fn single(book: &str, chapter: u32, language: Language) -> String {
    format!("{} {}{}", book, chapter, chapter_marker(language))
}

/// Reference covering two consecutive chapters.
///
/// Chapters of the same book collapse into a range; chapters from
/// different books are rendered independently and joined. A plan with a
/// single chapter pairs it with itself, which renders once.
pub fn pair(first: (&str, u32), second: (&str, u32), language: Language) -> String {
    if first == second {
        single(first.0, first.1, language)
    } else if first.0 == second.0 {
        format!(
            "{} {}-{}{}",
            first.0,
            first.1,
            second.1,
            chapter_marker(language)
        )
    } else {
        format!(
            "{}{}{}",
            single(first.0, first.1, language),
            PAIR_SEPARATOR,
            single(second.0, second.1, language)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        assert_eq!(single("말라기", 4, Language::Ko), "말라기 4장");
        assert_eq!(single("Malachi", 4, Language::En), "Malachi 4");
    }

    #[test]
    fn test_same_book_range() {
        assert_eq!(pair(("학개", 1), ("학개", 2), Language::Ko), "학개 1-2장");
        assert_eq!(pair(("Haggai", 1), ("Haggai", 2), Language::En), "Haggai 1-2");
    }

    #[test]
    fn test_same_chapter_renders_once() {
        assert_eq!(pair(("Obadiah", 1), ("Obadiah", 1), Language::En), "Obadiah 1");
        assert_eq!(pair(("오바댜", 1), ("오바댜", 1), Language::Ko), "오바댜 1장");
    }

    #[test]
    fn test_cross_book_pair() {
        assert_eq!(
            pair(("Nehemiah", 13), ("Malachi", 1), Language::En),
            "Nehemiah 13 & Malachi 1"
        );
        assert_eq!(
            pair(("느헤미야", 13), ("말라기", 1), Language::Ko),
            "느헤미야 13장 & 말라기 1장"
        );
    }
}
