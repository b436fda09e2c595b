//! Sample reflections served when no generated text is available

use super::ReflectionKind;
use crate::locale::{Language, Localized};

/// Sample text for `kind` in `language`
pub fn mock_text(kind: ReflectionKind, language: Language) -> &'static str {
    let text = match kind {
        ReflectionKind::Passage => Localized::new(
            r#"[에스라 1장]
1. 바사 왕 고레스 원년에 여호와께서 예레미야의 입을 통하여 하신 말씀을 이루게 하시려고 바사 왕 고레스의 마음을 감동시키시매 그가 온 나라에 공포도 하고 조서도 내려 이르되
2. 바사 왕 고레스는 말하노니 하늘의 하나님 여호와께서 세상 모든 나라를 내게 주셨고 나에게 명령하사 유다 예루살렘에 성전을 건축하라 하셨나니
3. 이스라엘의 하나님은 참 신이시라 너희 중에 그의 백성 된 자는 다 유다 예루살렘으로 올라가서 이스라엘의 하나님 여호와의 성전을 건축하라 그는 예루살렘에 계신 하나님이시라

(이것은 예시 데이터입니다. 실제 성경 본문을 보려면 API 키를 설정하세요.)"#,
            r#"[Ezra 1]
1. In the first year of Cyrus king of Persia, in order to fulfill the word of the Lord spoken by Jeremiah, the Lord moved the heart of Cyrus king of Persia to make a proclamation throughout his realm and also to put it in writing:
2. "This is what Cyrus king of Persia says: 'The Lord, the God of heaven, has given me all the kingdoms of the earth and has appointed me to build a temple for him at Jerusalem in Judah.
3. Any of his people among you may go up to Jerusalem in Judah and build the temple of the Lord, the God of Israel, the God who is in Jerusalem, and may their God be with them.

(This is mock data. Set your API key to see the actual Bible passage.)"#,
        ),
        ReflectionKind::MeditationGuide => Localized::new(
            r#"[묵상 가이드 (예시)]
1. 핵심 메시지: 하나님은 이방 왕의 마음까지도 움직이셔서 약속을 성취하시는 역사의 주관자이십니다.
2. 당시 의미: 절망 속에 있던 포로민들에게 하나님의 약속이 여전히 유효함을 보여주었습니다.
3. 적용점: 우리 삶의 회복도 전적으로 하나님의 주권 아래 있음을 신뢰해야 합니다.
4. 질문: 내 삶에서 무너진 성전(예배)을 회복하기 위해 결단해야 할 것은 무엇입니까?"#,
            r#"[Meditation Guide (Sample)]
1. Key Message: God is the sovereign of history who moves even the hearts of pagan kings to fulfill His promises.
2. Meaning then: It showed the exiles that God's promises were still valid amidst despair.
3. Application: We must trust that the restoration of our lives is entirely under God's sovereignty.
4. Question: What decision must I make to restore the ruined temple (worship) in my life?"#,
        ),
        ReflectionKind::Intention => Localized::new(
            r#"[하나님의 경륜 (예시)]
하나님께서는 70년의 포로 생활이 끝날 것이라는 예레미야의 예언을 정확한 때에 성취하셨습니다. 고레스를 통해 성전 재건을 명하신 것은 단순한 건물의 복구가 아니라, 하나님과 백성 사이의 언약 관계 회복을 의미합니다."#,
            r#"[God's Providence (Sample)]
God fulfilled Jeremiah's prophecy that the 70 years of exile would end at the exact time. Commanding the rebuilding of the temple through Cyrus meant not just restoring a building, but restoring the covenant relationship between God and His people."#,
        ),
        ReflectionKind::Context => Localized::new(
            r#"[역사적 배경 (예시)]
BC 538년, 페르시아(바사) 제국의 창건자 고레스 대왕이 칙령을 내립니다. 이는 바벨론 정책과는 달리 피정복민의 종교와 관습을 존중하는 유화 정책의 일환이었습니다."#,
            r#"[Historical Background (Sample)]
In 538 BC, Cyrus the Great, founder of the Persian Empire, issued a decree. This was part of an appeasement policy that respected the religion and customs of conquered peoples, unlike the Babylonian policy."#,
        ),
        ReflectionKind::EvangelismTips => Localized::new(
            r#"[전도 팁 (예시)]
1. 회복의 하나님을 소개하세요.
2. 절망적인 상황에서도 희망을 주시는 분임을 전하세요."#,
            r#"[Evangelism Tips (Sample)]
1. Introduce the God of restoration.
2. Share that He gives hope even in desperate situations."#,
        ),
        ReflectionKind::Prayer => Localized::new(
            r#"[기도문 (예시)]
하나님 아버지, 역사의 주관자 되심을 찬양합니다. 우리 삶의 무너진 곳을 수축하여 주시고, 주님의 영광을 다시 보게 하옵소서. 예수님의 이름으로 기도합니다. 아멘."#,
            r#"[Prayer (Sample)]
Father God, we praise You as the Sovereign of history. Repair the broken places in our lives and let us see Your glory again. In Jesus' name, Amen."#,
        ),
    };
    *text.get(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_text_is_localized() {
        for kind in ReflectionKind::ALL {
            assert!(!mock_text(kind, Language::Ko).is_empty());
            assert_ne!(mock_text(kind, Language::Ko), mock_text(kind, Language::En));
        }
        assert!(mock_text(ReflectionKind::Passage, Language::En).starts_with("[Ezra 1]"));
    }
}
