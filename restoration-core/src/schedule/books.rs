//! The static book table of the restoration-era reading cycle

use crate::locale::{Language, Localized};
use serde::Serialize;

/// A book of the reading cycle with its chapter count
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct Book {
    /// Display name per language
    pub names: Localized<&'static str>,

    /// Number of chapters (must be positive)
    pub chapters: u32,
}

impl Book {
    pub const fn new(ko: &'static str, en: &'static str, chapters: u32) -> Self {
        Self {
            names: Localized::new(ko, en),
            chapters,
        }
    }

    /// Display name in the given language
    pub fn name(&self, language: Language) -> &'static str {
        self.names.get(language)
    }
}

/// Books of the return-from-exile era, ordered along the historical sequence:
/// Cyrus's decree, the first return, temple rebuilding, the second return,
/// the wall rebuilding and the closing reforms.
pub const RESTORATION_BOOKS: [Book; 6] = [
    // Call to rebuild the temple (520 BC)
    Book::new("학개", "Haggai", 2),
    // Temple rebuilding and messianic prophecy (520-518 BC)
    Book::new("스가랴", "Zechariah", 14),
    // Return from exile and temple completion (538-458 BC)
    Book::new("에스라", "Ezra", 10),
    // Deliverance of the Jews in Persia (483-473 BC)
    Book::new("에스더", "Esther", 10),
    // Wall rebuilding and community restoration (from 445 BC)
    Book::new("느헤미야", "Nehemiah", 13),
    // Last prophet, covenant renewal (c. 430 BC)
    Book::new("말라기", "Malachi", 4),
];
