//! Historical timeline of the Ezra-Nehemiah period

use crate::locale::{Language, Localized};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HistoricalPeriod {
    pub year: &'static str,
    pub event: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HistoricalContext {
    pub title: &'static str,
    pub periods: &'static [HistoricalPeriod],
}

const fn period(year: &'static str, event: &'static str) -> HistoricalPeriod {
    HistoricalPeriod { year, event }
}

static HISTORICAL_CONTEXT: Localized<HistoricalContext> = Localized {
    ko: HistoricalContext {
        title: "에스라-느헤미야 시대의 역사적 배경",
        periods: &[
            period("BC 586년", "예루살렘 함락, 바벨론 포로"),
            period("BC 538년", "고레스 칙령, 1차 귀환 (스룹바벨)"),
            period("BC 520-516년", "성전 재건 (학개, 스가랴 활동)"),
            period("BC 483-473년", "에스더의 이야기"),
            period("BC 458년", "2차 귀환 (에스라)"),
            period("BC 445년", "3차 귀환 (느헤미야), 성벽 재건"),
            period("BC 430년경", "말라기 선지자 활동"),
        ],
    },
    en: HistoricalContext {
        title: "Historical Background of the Ezra-Nehemiah Period",
        periods: &[
            period("586 BC", "Fall of Jerusalem, Babylonian Exile"),
            period("538 BC", "Cyrus's Decree, First Return (Zerubbabel)"),
            period("520-516 BC", "Temple Reconstruction (Haggai, Zechariah)"),
            period("483-473 BC", "Story of Esther"),
            period("458 BC", "Second Return (Ezra)"),
            period("445 BC", "Third Return (Nehemiah), Wall Rebuilding"),
            period("430 BC", "Prophet Malachi's Ministry"),
        ],
    },
};

/// Timeline of the return-from-exile era in `language`
pub fn historical_context(language: Language) -> &'static HistoricalContext {
    HISTORICAL_CONTEXT.get(language)
}
