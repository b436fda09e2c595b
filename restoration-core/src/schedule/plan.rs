//! Flattened chapter-by-chapter reading plan

use super::Book;
use crate::error::ScheduleError;
use serde::Serialize;

/// One chapter of the reading plan
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReadingPlanItem {
    pub book: Book,

    /// 1-based chapter number within `book`
    pub chapter: u32,
}

/// The ordered sequence of single chapters expanded from a book table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingPlan {
    items: Vec<ReadingPlanItem>,
}

impl ReadingPlan {
    /// Expand `books` in table order into one item per chapter.
    ///
    /// Fails when the table is empty or a book has no chapters, since no
    /// schedule can be derived from such a table.
    pub fn new(books: &[Book]) -> Result<Self, ScheduleError> {
        if books.is_empty() {
            return Err(ScheduleError::EmptyBookTable);
        }

        let mut items = Vec::with_capacity(books.iter().map(|b| b.chapters as usize).sum());
        for book in books {
            if book.chapters == 0 {
                return Err(ScheduleError::EmptyBook(book.names.en.to_string()));
            }
            items.extend((1..=book.chapters).map(|chapter| ReadingPlanItem {
                book: *book,
                chapter,
            }));
        }

        Ok(Self { items })
    }

    /// Total number of chapters in one cycle (never zero)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty tables
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ReadingPlanItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[ReadingPlanItem] {
        &self.items
    }

    /// Item at `index` taken modulo the plan length
    pub(crate) fn wrapping(&self, index: u64) -> &ReadingPlanItem {
        &self.items[(index % self.items.len() as u64) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::RESTORATION_BOOKS;

    #[test]
    fn test_plan_expands_books_in_order() {
        let plan = ReadingPlan::new(&RESTORATION_BOOKS).unwrap();
        assert_eq!(plan.len(), 53);

        let first = plan.get(0).unwrap();
        assert_eq!(first.book.names.en, "Haggai");
        assert_eq!(first.chapter, 1);

        let third = plan.get(2).unwrap();
        assert_eq!(third.book.names.en, "Zechariah");
        assert_eq!(third.chapter, 1);

        let last = plan.get(52).unwrap();
        assert_eq!(last.book.names.en, "Malachi");
        assert_eq!(last.chapter, 4);
    }

    #[test]
    fn test_plan_rejects_empty_table() {
        assert_eq!(ReadingPlan::new(&[]), Err(ScheduleError::EmptyBookTable));
    }

    #[test]
    fn test_plan_rejects_book_without_chapters() {
        let books = [Book::new("가", "Alpha", 3), Book::new("나", "Beta", 0)];
        assert_eq!(
            ReadingPlan::new(&books),
            Err(ScheduleError::EmptyBook("Beta".to_string()))
        );
    }

    #[test]
    fn test_wrapping_index() {
        let books = [Book::new("가", "Alpha", 3)];
        let plan = ReadingPlan::new(&books).unwrap();
        assert_eq!(plan.wrapping(3).chapter, 1);
        assert_eq!(plan.wrapping(7).chapter, 2);
    }
}
