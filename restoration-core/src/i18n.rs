//! Localized message catalog
//!
//! Every message exists in every supported language; lookups are exhaustive
//! matches, so there is no runtime fallback path.

use crate::locale::{Language, Localized};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    AppName,
    AppDescription,
    HeaderTitle,
    HeaderSubtitle,
    TodaysWord,
    NavReading,
    NavDiary,
    NavMission,
    Footer,
    Loading,
    ReadingPlanTitle,
    ReadingPlanInfo,
    Day,
    TodaysPassage,
    LoadingPassage,
    ApiQuotaExceeded,
    ContentError,
    LordsWill,
    MeditationGuide,
    TimeAndPlace,
    HistoricalContextTitle,
    DiaryTitle,
    RepentanceLabel,
    ResolveLabel,
    DreamLabel,
    Saved,
    TodaysRecord,
    NoRecords,
    NoRecordsHint,
    SavedAt,
    EvangelismTraining,
    PrayerTraining,
    MyMissionPlan,
    MyRecords,
    NoPlans,
    NoPlansHint,
    OfflineError,
    Korean,
    English,
}

impl MessageKey {
    pub const ALL: [MessageKey; 39] = [
        MessageKey::AppName,
        MessageKey::AppDescription,
        MessageKey::HeaderTitle,
        MessageKey::HeaderSubtitle,
        MessageKey::TodaysWord,
        MessageKey::NavReading,
        MessageKey::NavDiary,
        MessageKey::NavMission,
        MessageKey::Footer,
        MessageKey::Loading,
        MessageKey::ReadingPlanTitle,
        MessageKey::ReadingPlanInfo,
        MessageKey::Day,
        MessageKey::TodaysPassage,
        MessageKey::LoadingPassage,
        MessageKey::ApiQuotaExceeded,
        MessageKey::ContentError,
        MessageKey::LordsWill,
        MessageKey::MeditationGuide,
        MessageKey::TimeAndPlace,
        MessageKey::HistoricalContextTitle,
        MessageKey::DiaryTitle,
        MessageKey::RepentanceLabel,
        MessageKey::ResolveLabel,
        MessageKey::DreamLabel,
        MessageKey::Saved,
        MessageKey::TodaysRecord,
        MessageKey::NoRecords,
        MessageKey::NoRecordsHint,
        MessageKey::SavedAt,
        MessageKey::EvangelismTraining,
        MessageKey::PrayerTraining,
        MessageKey::MyMissionPlan,
        MessageKey::MyRecords,
        MessageKey::NoPlans,
        MessageKey::NoPlansHint,
        MessageKey::OfflineError,
        MessageKey::Korean,
        MessageKey::English,
    ];

    /// Stable camelCase identifier used when exporting the catalog
    pub fn name(self) -> &'static str {
        match self {
            MessageKey::AppName => "appName",
            MessageKey::AppDescription => "appDescription",
            MessageKey::HeaderTitle => "headerTitle",
            MessageKey::HeaderSubtitle => "headerSubtitle",
            MessageKey::TodaysWord => "todaysWord",
            MessageKey::NavReading => "navReading",
            MessageKey::NavDiary => "navDiary",
            MessageKey::NavMission => "navMission",
            MessageKey::Footer => "footer",
            MessageKey::Loading => "loading",
            MessageKey::ReadingPlanTitle => "readingPlanTitle",
            MessageKey::ReadingPlanInfo => "readingPlanInfo",
            MessageKey::Day => "day",
            MessageKey::TodaysPassage => "todaysPassage",
            MessageKey::LoadingPassage => "loadingPassage",
            MessageKey::ApiQuotaExceeded => "apiQuotaExceeded",
            MessageKey::ContentError => "contentError",
            MessageKey::LordsWill => "lordsWill",
            MessageKey::MeditationGuide => "meditationGuide",
            MessageKey::TimeAndPlace => "timeAndPlace",
            MessageKey::HistoricalContextTitle => "historicalContextTitle",
            MessageKey::DiaryTitle => "diaryTitle",
            MessageKey::RepentanceLabel => "repentanceLabel",
            MessageKey::ResolveLabel => "resolveLabel",
            MessageKey::DreamLabel => "dreamLabel",
            MessageKey::Saved => "saved",
            MessageKey::TodaysRecord => "todaysRecord",
            MessageKey::NoRecords => "noRecords",
            MessageKey::NoRecordsHint => "noRecordsHint",
            MessageKey::SavedAt => "savedAt",
            MessageKey::EvangelismTraining => "evangelismTraining",
            MessageKey::PrayerTraining => "prayerTraining",
            MessageKey::MyMissionPlan => "myMissionPlan",
            MessageKey::MyRecords => "myRecords",
            MessageKey::NoPlans => "noPlans",
            MessageKey::NoPlansHint => "noPlansHint",
            MessageKey::OfflineError => "offlineError",
            MessageKey::Korean => "korean",
            MessageKey::English => "english",
        }
    }

    fn text(self) -> Localized<&'static str> {
        let (ko, en) = match self {
            MessageKey::AppName => ("회복과 재건의 묵상일기", "Restoration Meditation Diary"),
            MessageKey::AppDescription => (
                "에스라-느헤미야 시대의 말씀을 통해 하나님의 경륜을 묵상하고, 회복과 재건의 삶을 기록하는 신앙 성장 앱입니다.",
                "A faith growth app to meditate on God's providence through the Ezra-Nehemiah period and record a life of restoration and rebuilding.",
            ),
            MessageKey::HeaderTitle => ("회복과 재건", "Restoration & Rebuilding"),
            MessageKey::HeaderSubtitle => (
                "에스라-느헤미야 시대: 포로귀환과 회복의 이야기",
                "Ezra-Nehemiah Era: Stories of Return and Restoration",
            ),
            MessageKey::TodaysWord => ("오늘의 말씀", "Today's Word"),
            MessageKey::NavReading => ("읽기 & 묵상", "Reading & Meditation"),
            MessageKey::NavDiary => ("신앙 일기", "Faith Diary"),
            MessageKey::NavMission => ("전도 & 선교", "Evangelism & Mission"),
            MessageKey::Footer => (
                "© {year} 선한영성서당. Powered by Google Gemini.",
                "© {year} Seonhan Yeongseong Seodang. Powered by Google Gemini.",
            ),
            MessageKey::Loading => ("불러오는 중...", "Loading..."),
            MessageKey::ReadingPlanTitle => (
                "에스라-느헤미야 시대 읽기 순서",
                "Ezra-Nehemiah Era Reading Order",
            ),
            MessageKey::ReadingPlanInfo => (
                "에스라-느헤미야 시대의 말씀을 매일 2장씩 읽으면 총 {totalDays}일이 소요됩니다. 오늘은 전체 일정 중 {currentDay}일차입니다.",
                "Reading 2 chapters daily from the Ezra-Nehemiah era will take {totalDays} days. Today is day {currentDay}.",
            ),
            MessageKey::Day => ("{day}일차", "Day {day}"),
            MessageKey::TodaysPassage => ("오늘의 말씀", "Today's Passage"),
            MessageKey::LoadingPassage => ("말씀을 불러오는 중...", "Loading passage..."),
            MessageKey::ApiQuotaExceeded => (
                "API 요청 할당량이 초과되었습니다. 나중에 다시 시도해 주세요.",
                "API quota exceeded. Please try again later.",
            ),
            MessageKey::ContentError => (
                "콘텐츠를 불러오는 중 오류가 발생했습니다. 네트워크 연결을 확인하고 다시 시도해 주세요.",
                "Error loading content. Please check your connection.",
            ),
            MessageKey::LordsWill => ("하나님의 경륜 (AI)", "God's Providence (AI)"),
            MessageKey::MeditationGuide => ("오늘의 묵상 가이드 (AI)", "Today's Meditation Guide (AI)"),
            MessageKey::TimeAndPlace => ("역사적 배경", "Historical Background"),
            MessageKey::HistoricalContextTitle => {
                ("에스라-느헤미야 시대 역사", "Ezra-Nehemiah Era History")
            }
            MessageKey::DiaryTitle => ("나의 신앙 일기", "My Faith Diary"),
            MessageKey::RepentanceLabel => ("회개와 감사", "Repentance and Gratitude"),
            MessageKey::ResolveLabel => {
                ("결단과 적용 (재건)", "Resolution & Application (Rebuilding)")
            }
            MessageKey::DreamLabel => ("하나님이 주신 비전", "God-Given Vision"),
            MessageKey::Saved => ("저장됨!", "Saved!"),
            MessageKey::TodaysRecord => ("오늘의 기록", "Today's Record"),
            MessageKey::NoRecords => ("아직 저장된 기록이 없습니다.", "No records saved yet."),
            MessageKey::NoRecordsHint => (
                "일기를 작성하고 '일기 저장' 버튼을 눌러주세요.",
                "Write in your diary and press 'Save Diary'.",
            ),
            MessageKey::SavedAt => ("저장 시간: {time}", "Saved at: {time}"),
            MessageKey::EvangelismTraining => ("전도 훈련 (AI)", "Evangelism Training (AI)"),
            MessageKey::PrayerTraining => ("기도 훈련 (AI)", "Prayer Training (AI)"),
            MessageKey::MyMissionPlan => ("나의 전도와 선교 계획", "My Evangelism and Mission Plan"),
            MessageKey::MyRecords => ("나의 기록", "My Records"),
            MessageKey::NoPlans => ("아직 저장된 계획이 없습니다.", "No plans saved yet."),
            MessageKey::NoPlansHint => (
                "계획을 작성하고 '계획 저장' 버튼을 눌러주세요.",
                "Write a plan and press 'Save Plan'.",
            ),
            MessageKey::OfflineError => (
                "이 기능을 사용하려면 인터넷 연결이 필요합니다.",
                "Internet connection required for this feature.",
            ),
            MessageKey::Korean => ("한국어", "한국어"),
            MessageKey::English => ("English", "English"),
        };
        Localized::new(ko, en)
    }
}

/// Message text in `language`
pub fn t(language: Language, key: MessageKey) -> &'static str {
    key.text().get(language)
}

/// Message text with `{name}` placeholders substituted.
///
/// Only the first occurrence of each placeholder is replaced.
pub fn t_with(language: Language, key: MessageKey, vars: &[(&str, &dyn fmt::Display)]) -> String {
    let mut text = t(language, key).to_string();
    for (name, value) in vars {
        let placeholder = format!("{{{}}}", name);
        text = text.replacen(&placeholder, &value.to_string(), 1);
    }
    text
}

/// The whole catalog for one language, keyed by message name
pub fn catalog(language: Language) -> BTreeMap<&'static str, &'static str> {
    MessageKey::ALL
        .iter()
        .map(|key| (key.name(), t(language, *key)))
        .collect()
}
