//! Prompts sent to the generative text service

use super::{ReflectionKind, ReflectionRequest};
use crate::locale::Language;
use crate::schedule::DailyReading;

/// Characters of passage text embedded in passage-grounded prompts
pub const PASSAGE_EXCERPT_CHARS: usize = 500;

fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::Ko => "한국어로",
        Language::En => "in English",
    }
}

/// `"{book} {a}장과 {b}장"`, naming the second book when it differs
fn chapter_pair(reading: &DailyReading) -> String {
    let (first, second) = (reading.first(), reading.second());
    if first.book == second.book {
        format!("{} {}장과 {}장", first.book, first.chapter, second.chapter)
    } else {
        format!(
            "{} {}장과 {} {}장",
            first.book, first.chapter, second.book, second.chapter
        )
    }
}

fn excerpt(passage: &str) -> String {
    let mut text: String = passage.chars().take(PASSAGE_EXCERPT_CHARS).collect();
    text.push_str("...");
    text
}

/// Build the prompt for `request`
pub fn build(request: &ReflectionRequest) -> String {
    let reading = &request.reading;
    let lang = language_instruction(reading.language);
    let reference = reading.reference();
    let passage = excerpt(request.passage.as_deref().unwrap_or_default());

    match request.kind {
        ReflectionKind::Passage => format!(
            "{pair}의 전체 본문을 {lang} 제공해 주세요. \n\
             성경 본문만 제공하고 다른 설명은 추가하지 마세요. 각 절 번호를 포함해 주세요.\n\
             형식: \n\
             [장 번호]장\n\
             1. (본문)\n\
             2. (본문)\n\
             ...",
            pair = chapter_pair(reading),
        ),
        ReflectionKind::MeditationGuide => format!(
            "다음 성경 본문에 대한 묵상 가이드를 {lang} 작성해 주세요.\n\
             본문: {reference}\n\
             \n\
             이 본문은 에스라-느헤미야 시대의 말씀으로, 포로귀환 시대의 회복과 재건을 다룹니다.\n\
             하나님의 경륜(섭리) 관점에서:\n\
             1. 이 말씀이 전하는 핵심 메시지\n\
             2. 당시 백성들에게 주는 의미\n\
             3. 오늘날 우리에게 주는 적용점\n\
             4. 회복과 재건의 관점에서 묵상할 질문 2-3가지\n\
             \n\
             간결하고 깊이 있게 작성해 주세요."
        ),
        ReflectionKind::Intention => format!(
            "다음 성경 본문에서 하나님의 뜻과 경륜을 {lang} 분석해 주세요.\n\
             본문: {reference}\n\
             \n\
             에스라-느헤미야 시대의 맥락에서:\n\
             1. 하나님께서 이 말씀을 통해 전하고자 하신 핵심 의도\n\
             2. 이스라엘 회복 계획 안에서 이 사건/말씀의 위치\n\
             3. 메시아적 관점에서의 의미 (해당되는 경우)\n\
             \n\
             300자 내외로 작성해 주세요."
        ),
        ReflectionKind::Context => format!(
            "다음 성경 본문의 역사적 배경을 {lang} 설명해 주세요.\n\
             본문: {reference}\n\
             \n\
             다음 항목을 포함해 주세요:\n\
             1. 시대적 배경 (연도, 바사/페르시아 제국 상황)\n\
             2. 지리적 배경 (예루살렘, 바벨론, 수산 등)\n\
             3. 등장인물과 그들의 역할\n\
             4. 당시 유대인 공동체의 상황\n\
             \n\
             300자 내외로 작성해 주세요."
        ),
        ReflectionKind::EvangelismTips => format!(
            "오늘의 성경 본문을 바탕으로 전도 팁을 {lang} 제공해 주세요.\n\
             \n\
             본문: {passage}\n\
             \n\
             에스라-느헤미야 시대의 맥락에서:\n\
             1. 이 말씀에서 발견할 수 있는 복음의 핵심 메시지\n\
             2. 포로에서 돌아온 백성들의 이야기를 통해 전할 수 있는 회복의 복음\n\
             3. 현대인들에게 이 이야기를 전할 때 연결점 2-3가지\n\
             4. 구체적인 대화 시작 예시 1-2가지\n\
             \n\
             실제로 사용할 수 있는 실용적인 팁을 제공해 주세요."
        ),
        ReflectionKind::Prayer => format!(
            "오늘의 성경 본문을 바탕으로 기도문을 {lang} 작성해 주세요.\n\
             \n\
             본문: {passage}\n\
             \n\
             에스라의 회개 기도(에스라 9장)와 느헤미야의 간구(느헤미야 1장)의 스타일을 참고하여:\n\
             1. 하나님의 신실하심을 찬양\n\
             2. 우리의 부족함을 고백\n\
             3. 회복과 재건을 위한 간구\n\
             4. 전도와 선교를 위한 기도\n\
             \n\
             진심 어린 기도문을 작성해 주세요."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ReadingSchedule;

    fn request(kind: ReflectionKind, day: u64, language: Language) -> ReflectionRequest {
        ReflectionRequest {
            kind,
            reading: ReadingSchedule::restoration().reading_for_day(day, language),
            passage: None,
        }
    }

    #[test]
    fn test_passage_prompt_names_chapters() {
        let prompt = build(&request(ReflectionKind::Passage, 0, Language::Ko));
        assert!(prompt.starts_with("학개 1장과 2장의 전체 본문을 한국어로 제공해 주세요."));
    }

    #[test]
    fn test_passage_prompt_across_books() {
        let prompt = build(&request(ReflectionKind::Passage, 24, Language::En));
        assert!(prompt.starts_with("Nehemiah 13장과 Malachi 1장의 전체 본문을 in English"));
    }

    #[test]
    fn test_reference_prompts_embed_reference() {
        let prompt = build(&request(ReflectionKind::MeditationGuide, 1, Language::En));
        assert!(prompt.contains("본문: Zechariah 1-2\n"));
        assert!(prompt.contains("in English"));

        let prompt = build(&request(ReflectionKind::Context, 1, Language::Ko));
        assert!(prompt.contains("본문: 스가랴 1-2장\n"));
    }

    #[test]
    fn test_passage_excerpt_is_truncated() {
        let mut req = request(ReflectionKind::Prayer, 0, Language::Ko);
        req.passage = Some("가".repeat(800));
        let prompt = build(&req);
        let expected = format!("본문: {}...\n", "가".repeat(PASSAGE_EXCERPT_CHARS));
        assert!(prompt.contains(&expected));
        assert!(!prompt.contains(&"가".repeat(PASSAGE_EXCERPT_CHARS + 1)));
    }
}
