//! The template bank: every phrase list the composition engine draws from.
//!
//! Coverage contract: every enumerated key has a non-empty phrase list. The
//! tables are keyed by exhaustive `match`, so a missing key cannot compile;
//! [`validate`] still checks list non-emptiness and compatibility-matrix
//! completeness at startup so a data edit cannot ship a silent gap. The only
//! soft lookups are the weather-lunch table (unrecognized conditions arrive
//! pre-mapped to Cloudy) and the compatibility matrix, which falls back to a
//! neutral entry.

use crate::domain::types::{
    Animal, CompatTier, DayType, Mbti, Season, SpecialDay, TimeSlot, WeatherCondition, ZodiacSign,
};
use crate::error::{Error, Result};

pub fn mbti_fortune(mbti: Mbti) -> &'static [&'static str] {
    match mbti {
        Mbti::Istj => &[
            "체계적으로 움직이면 승리",
            "오늘은 원칙대로 가는 게 답",
            "꼼꼼함이 빛나는 날",
            "루틴을 지키면 복이 온다",
            "조용히 실력 발휘하는 날",
        ],
        Mbti::Isfj => &[
            "배려가 돌아오는 날",
            "묵묵히 하던 일이 인정받음",
            "팀원 덕에 웃는 날",
            "성실함이 보상받는다",
            "서포터 역할이 빛나는 날",
        ],
        Mbti::Infj => &[
            "직감을 믿어도 되는 날",
            "조용히 관찰하면 기회 보임",
            "혼자만의 시간이 필요해",
            "깊은 생각이 해답을 준다",
            "공감 능력이 빛나는 날",
        ],
        Mbti::Intj => &[
            "전략대로 움직이면 성공",
            "장기적 관점이 승리하는 날",
            "분석이 맞아떨어지는 날",
            "계획 수정은 내일로 미뤄",
            "논리로 설득하기 좋은 날",
        ],
        Mbti::Istp => &[
            "문제 해결 능력 폭발하는 날",
            "손 대면 다 고쳐지는 날",
            "효율 최고인 날",
            "군더더기 없이 깔끔하게",
            "실용적 판단이 빛남",
        ],
        Mbti::Isfp => &[
            "감성이 통하는 날",
            "작은 것에서 행복 발견",
            "자기만의 속도로 가면 됨",
            "억지로 맞추지 마",
            "여유가 답인 날",
        ],
        Mbti::Infp => &[
            "창의력 터지는 날",
            "영감이 찾아오는 시간",
            "마음 가는 대로 해도 됨",
            "진정성이 통하는 날",
            "감정에 솔직하면 좋은 일 생김",
        ],
        Mbti::Intp => &[
            "호기심이 기회 만드는 날",
            "분석 모드 풀가동",
            "새로운 방법 시도 OK",
            "질문이 답을 만든다",
            "논리적 접근이 승리",
        ],
        Mbti::Estp => &[
            "행동력이 빛나는 날",
            "일단 저지르면 되는 날",
            "순발력으로 해결 가능",
            "현장에서 답 찾는다",
            "에너지 넘치는 하루",
        ],
        Mbti::Esfp => &[
            "분위기 메이커 역할 추천",
            "사람 만나면 좋은 일 생김",
            "즉흥적 결정이 좋아",
            "재미를 찾으면 일도 술술",
            "웃으면 복이 와",
        ],
        Mbti::Enfp => &[
            "아이디어 폭발 예정",
            "열정이 전염되는 날",
            "새로운 시도 대환영",
            "가능성을 보면 기회",
            "에너지 조절만 잘 하면 됨",
        ],
        Mbti::Entp => &[
            "토론하면 이기는 날",
            "창의적 해결책 떠오름",
            "도전이 기회 되는 날",
            "말빨이 통하는 날",
            "새로운 관점이 승리",
        ],
        Mbti::Estj => &[
            "리더십 발휘하기 좋은 날",
            "추진력으로 밀어붙여",
            "체계 잡으면 성공",
            "원칙 지키면 인정받음",
            "결단력이 빛나는 날",
        ],
        Mbti::Esfj => &[
            "팀워크 최고인 날",
            "화합을 이끌면 좋은 일",
            "배려가 돌아오는 날",
            "사람 관계에서 행운",
            "분위기 띄우면 일도 술술",
        ],
        Mbti::Enfj => &[
            "영향력이 커지는 날",
            "리드하면 따라오는 날",
            "공감으로 설득 성공",
            "비전 제시하면 통함",
            "사람들이 믿어주는 날",
        ],
        Mbti::Entj => &[
            "통솔력 최고인 날",
            "큰 그림 그리기 좋은 날",
            "결정하면 밀어붙여",
            "목표 향해 직진",
            "카리스마가 빛나는 날",
        ],
    }
}

pub fn mbti_warning(mbti: Mbti) -> &'static [&'static str] {
    match mbti {
        Mbti::Istj => &[
            "융통성 부족으로 충돌 주의",
            "너무 원칙만 고집하지 마",
            "변화에 열린 마음 필요",
            "완벽주의 내려놓기",
        ],
        Mbti::Isfj => &[
            "남 일에 너무 신경 쓰지 마",
            "거절할 건 거절해",
            "자기 일 먼저 챙겨",
            "번아웃 주의",
        ],
        Mbti::Infj => &[
            "혼자 끙끙대지 마",
            "오버 생각 주의",
            "완벽주의 내려놔",
            "현실 직시 필요",
        ],
        Mbti::Intj => &[
            "고집 부리면 손해",
            "다른 의견도 들어봐",
            "감정 표현 필요할 수도",
            "융통성 발휘해",
        ],
        Mbti::Istp => &[
            "무뚝뚝함 오해받기 쉬움",
            "팀워크도 신경 써",
            "혼자 처리하려 하지 마",
            "소통 한 번 더",
        ],
        Mbti::Isfp => &[
            "결정 미루지 마",
            "눈치 너무 보지 마",
            "의견 표현 필요해",
            "자기주장도 중요",
        ],
        Mbti::Infp => &[
            "현실 직시 필요",
            "감정에 휩쓸리지 마",
            "마감 시간 체크",
            "구체적 실행 필요",
        ],
        Mbti::Intp => &[
            "설명 길어지면 손해",
            "실행력 필요한 날",
            "딴 생각 주의",
            "결론부터 말해",
        ],
        Mbti::Estp => &[
            "충동 결정 주의",
            "말 실수 조심",
            "디테일 놓치기 쉬움",
            "한 박자 쉬어가",
        ],
        Mbti::Esfp => &[
            "집중력 흐트러지기 쉬움",
            "수다 시간 조절",
            "중요한 거 놓치지 마",
            "우선순위 체크",
        ],
        Mbti::Enfp => &[
            "산만해지기 쉬운 날",
            "하나에 집중해",
            "약속 잊지 마",
            "마무리까지 신경 써",
        ],
        Mbti::Entp => &[
            "논쟁 피해",
            "말 많으면 탈",
            "실행이 중요한 날",
            "끝까지 마무리해",
        ],
        Mbti::Estj => &[
            "너무 밀어붙이지 마",
            "팀원 감정도 챙겨",
            "독단적 결정 주의",
            "유연하게 대처",
        ],
        Mbti::Esfj => &[
            "남 일에 너무 개입 말고",
            "자기 감정도 챙겨",
            "오지랖 주의",
            "에너지 분배 필요",
        ],
        Mbti::Enfj => &[
            "다 책임지려 하지 마",
            "번아웃 주의",
            "거절도 필요해",
            "자기 시간 확보",
        ],
        Mbti::Entj => &[
            "강압적으로 보일 수 있음",
            "피드백 수용해",
            "팀원 의견도 들어",
            "속도 조절 필요",
        ],
    }
}

pub fn animal_energy(animal: Animal) -> &'static [&'static str] {
    match animal {
        Animal::Rat => &[
            "재빠른 판단력이 빛나는 날",
            "기회 포착 능력 상승",
            "정보력이 힘이 되는 날",
            "눈치 백단 발동",
            "작은 기회도 놓치지 마",
        ],
        Animal::Ox => &[
            "우직한 추진력이 빛나는 날",
            "꾸준함이 결실 맺는 날",
            "인내가 보상받는 날",
            "묵묵히 가면 길이 열림",
            "끈기가 무기",
        ],
        Animal::Tiger => &[
            "용맹함이 필요한 날",
            "과감한 결정 OK",
            "리더십 발휘 적기",
            "도전하면 성과",
            "당당하게 밀어붙여",
        ],
        Animal::Rabbit => &[
            "재치가 빛나는 날",
            "위기 모면 능력 상승",
            "사교성으로 기회 잡아",
            "유연하게 대처",
            "부드러움이 강함",
        ],
        Animal::Dragon => &[
            "카리스마 폭발하는 날",
            "큰 일 도모하기 좋아",
            "주목받는 날",
            "스케일 크게 생각해",
            "자신감 충만",
        ],
        Animal::Snake => &[
            "직감이 예리해지는 날",
            "통찰력으로 승부",
            "조용히 관찰하면 보임",
            "지혜가 빛나는 날",
            "신중함이 무기",
        ],
        Animal::Horse => &[
            "열정 폭발하는 날",
            "활동적으로 움직여",
            "속도감 있게 처리",
            "에너지 넘치는 하루",
            "달리면 따라옴",
        ],
        Animal::Goat => &[
            "온화함이 힘이 되는 날",
            "협력하면 시너지",
            "평화롭게 해결 가능",
            "조화가 답",
            "부드러움으로 승부",
        ],
        Animal::Monkey => &[
            "재치와 유머가 통하는 날",
            "임기응변 능력 상승",
            "창의력 발휘 적기",
            "영리하게 대처",
            "유연함이 무기",
        ],
        Animal::Rooster => &[
            "부지런함이 빛나는 날",
            "세심함으로 승부",
            "완벽주의가 통하는 날",
            "디테일이 차이 만듦",
            "성실함이 인정받음",
        ],
        Animal::Dog => &[
            "신뢰가 쌓이는 날",
            "의리가 빛나는 날",
            "충직함이 인정받음",
            "믿음직한 모습 보여",
            "진심이 통함",
        ],
        Animal::Pig => &[
            "복이 들어오는 날",
            "여유가 기회 만듦",
            "인복 터지는 날",
            "넉넉한 마음이 답",
            "행운이 따르는 날",
        ],
    }
}

pub fn animal_warning(animal: Animal) -> &'static [&'static str] {
    match animal {
        Animal::Rat => &[
            "너무 계산적으로 보일 수 있음",
            "욕심 과하면 탈",
            "작은 이익에 큰 거 놓칠 수도",
        ],
        Animal::Ox => &["고집 피우면 손해", "융통성 필요한 날", "속도 조절 필요"],
        Animal::Tiger => &["독단적 결정 주의", "성질 급하면 탈", "한 발 물러서기 필요"],
        Animal::Rabbit => &["우유부단함 주의", "결단력 필요한 순간", "도망가지 말고 맞서"],
        Animal::Dragon => &["오만해 보일 수 있음", "팀워크 신경 써", "겸손함 필요"],
        Animal::Snake => &["의심 과하면 기회 놓침", "너무 숨기지 마", "소통 한 번 더"],
        Animal::Horse => &["급하면 실수", "끝까지 마무리 필요", "산만해지기 쉬움"],
        Animal::Goat => &["우유부단함 주의", "자기주장도 필요해", "의존하지 마"],
        Animal::Monkey => &["잔꾀 부리면 탈", "진정성 필요", "가벼워 보일 수 있음"],
        Animal::Rooster => &["까다로워 보일 수 있음", "비판 줄이기", "완벽주의 내려놔"],
        Animal::Dog => &["고지식해 보일 수 있음", "유연함 필요", "너무 직설적이면 탈"],
        Animal::Pig => &["게을러 보일 수 있음", "결단력 필요", "우선순위 정해"],
    }
}

pub fn zodiac_morning(sign: ZodiacSign) -> &'static [&'static str] {
    match sign {
        ZodiacSign::Aquarius => &[
            "창의적 아이디어 떠오르는 오전",
            "독특한 관점이 빛남",
            "혁신적 사고 발휘",
            "자유롭게 생각해도 OK",
        ],
        ZodiacSign::Pisces => &[
            "감성 충만한 오전",
            "직감이 잘 맞는 시간",
            "공감 능력 상승",
            "부드럽게 시작하면 좋아",
        ],
        ZodiacSign::Aries => &[
            "에너지 충만한 오전",
            "첫 단추 잘 꿰는 시간",
            "주도적으로 시작해",
            "선제 행동 추천",
        ],
        ZodiacSign::Taurus => &[
            "안정적으로 시작하는 오전",
            "차분하게 정리하기 좋아",
            "기초 작업 추천",
            "서두르지 마",
        ],
        ZodiacSign::Gemini => &[
            "소통이 잘 되는 오전",
            "미팅하기 좋은 시간",
            "정보 수집 적기",
            "대화로 풀어가",
        ],
        ZodiacSign::Cancer => &[
            "팀 케어하기 좋은 오전",
            "분위기 파악 잘 됨",
            "배려가 돌아옴",
            "감정 교류 추천",
        ],
        ZodiacSign::Leo => &[
            "존재감 빛나는 오전",
            "발표/프레젠 적기",
            "주목받는 시간",
            "자신감 있게 나서",
        ],
        ZodiacSign::Virgo => &[
            "꼼꼼함이 빛나는 오전",
            "분석/검토 추천",
            "디테일 체크 적기",
            "완벽주의 발휘",
        ],
        ZodiacSign::Libra => &[
            "균형 잡힌 판단의 오전",
            "조율하기 좋은 시간",
            "공정한 결정 가능",
            "중재 역할 추천",
        ],
        ZodiacSign::Scorpio => &[
            "집중력 최고인 오전",
            "깊이 파고들기 좋아",
            "핵심 파악 적기",
            "몰입 추천",
        ],
        ZodiacSign::Sagittarius => &[
            "긍정 에너지 충만한 오전",
            "새로운 도전 적기",
            "확장적 사고 OK",
            "낙관적으로 시작",
        ],
        ZodiacSign::Capricorn => &[
            "생산성 최고인 오전",
            "계획대로 실행 적기",
            "체계적 접근 추천",
            "목표 향해 집중",
        ],
    }
}

pub fn zodiac_afternoon(sign: ZodiacSign) -> &'static [&'static str] {
    match sign {
        ZodiacSign::Aquarius => &[
            "협업에서 시너지 나는 오후",
            "다른 관점 수용하면 좋아",
            "네트워킹 추천",
        ],
        ZodiacSign::Pisces => &["마무리가 잘 되는 오후", "감성적 마무리 추천", "여운 남기는 시간"],
        ZodiacSign::Aries => &["추진력 발휘하는 오후", "밀어붙이면 성과", "결단의 시간"],
        ZodiacSign::Taurus => &["완성도 높이는 오후", "퀄리티 체크 적기", "마감 작업 추천"],
        ZodiacSign::Gemini => &["정보 정리하는 오후", "보고/공유 추천", "멀티태스킹 OK"],
        ZodiacSign::Cancer => &["관계 다지는 오후", "1:1 대화 추천", "감사 표현 적기"],
        ZodiacSign::Leo => &["성과 정리하는 오후", "인정받는 시간", "셀프 PR 추천"],
        ZodiacSign::Virgo => &["최종 검토의 오후", "실수 잡아내는 시간", "꼼꼼 체크 추천"],
        ZodiacSign::Libra => &["합의 이끄는 오후", "협상 추천", "윈윈 만들기 좋아"],
        ZodiacSign::Scorpio => &["결론 내리는 오후", "핵심만 정리", "결단력 발휘"],
        ZodiacSign::Sagittarius => &["계획 세우는 오후", "내일을 위한 준비", "큰 그림 그리기"],
        ZodiacSign::Capricorn => &["실적 정리하는 오후", "데이터 체크 추천", "보고 준비 적기"],
    }
}

pub fn day_type_morning(day_type: DayType) -> &'static [&'static str] {
    match day_type {
        DayType::Monday => &[
            "월요병 이겨내는 게 첫 미션",
            "천천히 워밍업 OK",
            "급한 일부터 체크만",
            "커피 한 잔의 여유 필수",
            "페이스 천천히 올려",
        ],
        DayType::Weekday => &[
            "루틴대로 움직이면 돼",
            "오전에 중요한 것 먼저",
            "미팅 있으면 준비 철저히",
            "집중 업무 몰아서",
            "페이스 유지가 핵심",
        ],
        DayType::Friday => &[
            "주말 앞두고 의욕 상승",
            "오전에 급한 거 처리해",
            "마감 체크 필수",
            "밀린 거 정리 적기",
            "오늘만 버티면 주말",
        ],
        DayType::PreHoliday => &[
            "들뜬 마음 진정시키고",
            "필수만 처리하고 정리",
            "인수인계 체크",
            "급한 불 먼저 꺼",
            "내일부터 쉰다 생각하며 버텨",
        ],
        DayType::Weekend => &[
            "늦잠 OK 여유롭게",
            "하고 싶은 거 먼저",
            "평일 스트레스 해소",
            "리프레시 타임",
            "충전이 목표",
        ],
        DayType::Holiday => &[
            "평일인데 쉬는 행운",
            "푹 쉬어도 되는 날",
            "죄책감 없이 여유",
            "재충전 적기",
            "다음을 위한 휴식",
        ],
    }
}

pub fn day_type_afternoon(day_type: DayType) -> &'static [&'static str] {
    match day_type {
        DayType::Monday => &[
            "점심 후 늘어지기 쉬움",
            "오후 회의 집중",
            "내일 위한 세팅",
            "퇴근 시간 노려",
            "무리하지 마",
        ],
        DayType::Weekday => &[
            "오후 3시가 고비",
            "루틴 업무 처리",
            "보고는 4시 전에",
            "마무리 준비",
            "페이스 유지",
        ],
        DayType::Friday => &[
            "오후는 정리 모드",
            "주간 마무리 필수",
            "일찍 퇴근 노려봐",
            "다음 주 세팅",
            "주말 계획 세워",
        ],
        DayType::PreHoliday => &[
            "인수인계 마무리",
            "급한 것만 처리",
            "정리하고 퇴근",
            "연휴 모드 ON 준비",
            "마음은 이미 연휴",
        ],
        DayType::Weekend => &[
            "하고 싶은 거 해",
            "약속 있으면 즐겨",
            "충분히 쉬어",
            "에너지 충전",
            "내일 걱정은 내일",
        ],
        DayType::Holiday => &[
            "여유롭게 보내",
            "특별한 거 안 해도 OK",
            "쉬는 게 일",
            "다음 주 준비는 나중에",
            "오늘은 오늘만",
        ],
    }
}

pub fn day_type_evening(day_type: DayType) -> &'static [&'static str] {
    match day_type {
        DayType::Monday => &[
            "일찍 퇴근해서 푹 쉬어",
            "무리한 약속 패스",
            "집에서 충전",
            "일찍 자는 게 승리",
            "내일을 위해 아껴",
        ],
        DayType::Weekday => &[
            "적당한 저녁 약속 OK",
            "취미 활동 추천",
            "가벼운 운동",
            "내일 준비 가볍게",
            "충전과 활력 균형",
        ],
        DayType::Friday => &[
            "불금 즐겨!",
            "약속 적극 추천",
            "주말 시작을 만끽",
            "스트레스 해소",
            "맘껏 놀아도 됨",
        ],
        DayType::PreHoliday => &[
            "연휴 시작 축하",
            "설렘 안고 귀가",
            "여행이면 출발 준비",
            "푹 쉴 준비",
            "내일부터 자유",
        ],
        DayType::Weekend => &[
            "시간 마음대로",
            "늦게까지 OK",
            "하고 싶은 거 다 해",
            "푹 쉬어도 됨",
            "죄책감 없이",
        ],
        DayType::Holiday => &[
            "공짜 휴일 만끽",
            "내일 출근이지만 괜찮아",
            "오늘 하루 선물",
            "재충전 완료",
            "감사한 하루",
        ],
    }
}

pub fn time_intro(slot: TimeSlot) -> &'static [&'static str] {
    match slot {
        TimeSlot::Commute => &["오늘 하루 미리보기", "출근길 운세 도착", "오늘의 작전 브리핑"],
        TimeSlot::Morning => &["오전 집중 모드 ON", "지금 뭐 하면 좋을까", "오전 전략 체크"],
        TimeSlot::Lunch => &["점심시간 잠깐 쉬며", "오후를 위한 충전", "반환점 돌았다"],
        TimeSlot::Afternoon => &["오후 전략 수정", "남은 시간 공략법", "마무리 준비 시작"],
        TimeSlot::AfterWork => &["오늘 하루 수고했어", "퇴근 후 힐링 타임", "내일을 위한 충전"],
    }
}

pub fn season_vibe(season: Season) -> &'static [&'static str] {
    match season {
        Season::NewYear => &[
            "새해 기운 충만! 새 출발 적기",
            "올해는 다를 거야",
            "새로운 다짐 세우기 좋은 때",
        ],
        Season::Spring => &[
            "봄기운 솔솔, 새로운 시작 에너지",
            "설렘 가득한 시즌",
            "움츠렸던 기운 펼칠 때",
        ],
        Season::EarlySummer => &["활기찬 에너지 시즌", "야외 활동 추천", "열정 불태우기 좋은 때"],
        Season::RainySeason => &["눅눅한 기운 주의", "실내 집중 추천", "우울함 날려버려"],
        Season::MidSummer => &["더위와의 전쟁", "에너지 관리 필수", "시원한 곳에서 충전"],
        Season::Autumn => &["결실의 계절", "마무리 짓기 좋은 때", "차분하게 정리하는 시즌"],
        Season::YearEnd => &["한 해 마무리 시즌", "정산과 회고의 때", "송년 감성 물씬"],
    }
}

pub fn weather_lunch(condition: WeatherCondition) -> &'static [&'static str] {
    match condition {
        WeatherCondition::Clear => &[
            "야외 점심 추천! 햇살 충전",
            "산책 겸 멀리 가서 먹어",
            "기분 좋은 날씨 만끽",
        ],
        WeatherCondition::Cloudy => &["실내에서 든든하게", "따뜻한 메뉴 추천", "커피 한 잔 여유롭게"],
        WeatherCondition::Rain => &[
            "우산 챙겨서 가까운 데서",
            "따뜻한 국물이 진리",
            "비 오는 날 감성 점심",
        ],
        WeatherCondition::Snow => &[
            "미끄럼 주의하며 가까이서",
            "따뜻한 거 먹어야 해",
            "눈 구경하며 여유롭게",
        ],
    }
}

pub fn special_day(flag: SpecialDay) -> &'static [&'static str] {
    match flag {
        SpecialDay::SolarBirthday => &[
            "🎂 오늘 양력 생일! 특별한 하루 되길",
            "생일 축하해! 오늘은 네가 주인공",
            "1년 중 가장 특별한 날, 행운 가득",
        ],
        SpecialDay::LunarBirthday => &[
            "🎂 오늘 음력 생일! 전통적 행운의 날",
            "음력 생일 축하! 어른들 축복 가득",
            "진짜 생일 기운 충만한 날",
        ],
        SpecialDay::Holiday => &[
            "🎉 공휴일! 평일인데 쉬는 행운",
            "쉬는 날 만끽해!",
            "재충전의 날, 푹 쉬어",
        ],
        SpecialDay::PreHoliday => &[
            "🌴 내일부터 연휴! 오늘만 버텨",
            "설렘 안고 마무리하는 날",
            "연휴 직전 특별한 기운",
        ],
        SpecialDay::MonthStart => &[
            "📅 새 달의 시작! 이번 달 목표 세워봐",
            "월초 기운으로 새출발",
            "리셋하고 다시 시작",
        ],
        SpecialDay::MonthEnd => &[
            "📊 월말 정산 시즌! 마무리 잘 하자",
            "한 달 마무리하는 날",
            "정리하고 다음 달 준비",
        ],
        SpecialDay::QuarterEnd => &[
            "📈 분기 마감! 실적 정리 필수",
            "3개월 성과 점검 시기",
            "다음 분기 준비 시작",
        ],
        SpecialDay::YearStart => &[
            "🎊 새해 시작! 올해는 다를 거야",
            "1년 계획 세우기 최적기",
            "새해 기운 물씬",
        ],
        SpecialDay::YearEnd => &[
            "🎄 한 해 마무리! 수고했어",
            "올해 회고하기 좋은 때",
            "내년을 위한 정리",
        ],
    }
}

pub const LUCKY_ITEMS: &[&str] = &[
    "빨간 포스트잇",
    "파란 포스트잇",
    "노란 형광펜",
    "3색 볼펜",
    "검정 볼펜",
    "미니 선인장 화분",
    "작은 화분",
    "탕비실 종이컵",
    "머그컵",
    "텀블러 뚜껑",
    "모니터 스티커",
    "캐릭터 피규어",
    "손목 쿠션",
    "마우스 패드",
    "키보드 브러쉬",
    "블루라이트 안경",
    "안경닦이",
    "이어폰 케이스",
    "에어팟 케이스",
    "보조 배터리",
    "명함 지갑",
    "사원증 목걸이",
    "차키 고리",
    "손거울",
    "핸드크림",
    "립밤",
    "책상 달력",
    "포켓 수첩",
    "클립 홀더",
    "스테이플러",
];

/// Lucky-item justification, one substitution point: the animal's name.
pub fn lucky_item_reason(animal: Animal) -> String {
    let template = match animal {
        Animal::Rat => "재빠른 {}띠에게 민첩함을 더해줄",
        Animal::Ox => "우직한 {}띠의 끈기를 상징하는",
        Animal::Tiger => "용맹한 {}띠의 기운을 북돋울",
        Animal::Rabbit => "재치있는 {}띠의 행운을 부르는",
        Animal::Dragon => "강력한 {}띠의 카리스마를 높여줄",
        Animal::Snake => "지혜로운 {}띠의 통찰력을 키워줄",
        Animal::Horse => "열정적인 {}띠의 에너지를 채워줄",
        Animal::Goat => "온화한 {}띠의 평화를 지켜줄",
        Animal::Monkey => "영리한 {}띠의 재치를 살려줄",
        Animal::Rooster => "부지런한 {}띠의 성실함을 빛내줄",
        Animal::Dog => "충직한 {}띠의 신뢰를 높여줄",
        Animal::Pig => "복 많은 {}띠의 행운을 배로 만들",
    };
    template.replacen("{}", animal.as_str(), 1)
}

pub const RANDOM_VARIABLES: &[&str] = &[
    "엘리베이터에서 만나는 사람이 오늘의 키맨",
    "오후 3시에 뜻밖의 연락이 올 수도",
    "빨간색 보이면 일단 멈춰봐",
    "오늘 첫 번째로 마주친 동료가 힌트",
    "점심 메뉴 선택이 오후를 좌우함",
    "갑자기 떠오르는 아이디어 메모해둬",
    "창밖을 한 번 보면 영감이 올지도",
    "오늘 들은 노래 가사에 답이 있을 수도",
    "커피 마시는 타이밍이 중요한 날",
    "회의실 자리 선택이 운명을 가름",
    "오후에 예상치 못한 칭찬이 올지도",
    "복도에서 스치는 인연 주목",
    "오늘 받는 첫 메일에 힌트가",
    "탕비실에서 좋은 정보 들을 수도",
    "계단 이용하면 좋은 기운",
    "오른쪽에서 오는 기회 잡아",
    "점심 후 5분 명상이 오후를 바꿈",
    "오늘은 질문을 많이 하면 좋아",
    "메모장 첫 페이지에 행운이",
    "화분에 물 주면 좋은 일 생김",
    "오늘 처음 본 숫자가 행운의 숫자",
    "웃는 얼굴이 기회를 부름",
    "오후에 자리 정리하면 운 상승",
    "동료의 농담에 진짜 힌트가 숨어있음",
    "오늘은 먼저 인사하는 사람이 이김",
    "컴퓨터 바탕화면 바꾸면 기분 전환",
    "오래된 파일에서 필요한 거 발견할 수도",
    "의외의 사람에게서 도움 받을 날",
    "모니터 밝기 조절이 집중력 높임",
    "오늘은 왼손으로 뭔가 해보는 건?",
    "책상 위 물건 위치가 운을 바꿈",
    "오후 간식이 에너지를 좌우함",
    "오늘 신는 양말 색깔이 포인트",
    "예상 못한 회의가 기회될 수도",
    "퇴근길 평소와 다른 길로 가봐",
    "SNS에서 본 글이 힌트일 수도",
    "오늘은 고민 말고 바로 실행",
    "책상 서랍 정리하면 잃어버린 거 나옴",
    "동기와 대화에서 인사이트 얻을 날",
    "오늘 점심값 누가 내면 둘 다 행운",
];

/// Fallback for a compatibility pair missing from the matrix. The bundled
/// matrix is exhaustive, but the fallback is part of the lookup contract.
pub const COMPATIBILITY_FALLBACK: (CompatTier, &str) = (CompatTier::Neutral, "균형 잡힌 하루");

/// 144-entry animal-by-sign compatibility matrix.
pub const COMPATIBILITY: &[(Animal, ZodiacSign, CompatTier, &str)] = {
    use Animal::*;
    use CompatTier::*;
    use ZodiacSign::*;
    &[
        // 쥐
        (Rat, Aquarius, Good, "영리함과 창의성의 시너지"),
        (Rat, Pisces, Neutral, "감성과 이성의 균형 필요"),
        (Rat, Aries, Good, "빠른 판단력 시너지"),
        (Rat, Taurus, Neutral, "속도 차이 조절 필요"),
        (Rat, Gemini, Good, "정보력 최강 조합"),
        (Rat, Cancer, Neutral, "감정 교류 더 필요"),
        (Rat, Leo, Caution, "주도권 충돌 가능"),
        (Rat, Virgo, Good, "디테일 완벽 조합"),
        (Rat, Libra, Neutral, "결정 속도 차이"),
        (Rat, Scorpio, Good, "통찰력 시너지"),
        (Rat, Sagittarius, Neutral, "방향성 조율 필요"),
        (Rat, Capricorn, Good, "목표 지향 완벽 조합"),
        // 소
        (Ox, Aquarius, Caution, "고집 vs 자유 충돌"),
        (Ox, Pisces, Neutral, "속도 맞추면 OK"),
        (Ox, Aries, Caution, "추진 방식 차이"),
        (Ox, Taurus, Good, "안정감 최강 조합"),
        (Ox, Gemini, Caution, "변화 vs 고정 충돌"),
        (Ox, Cancer, Good, "신뢰 기반 조합"),
        (Ox, Leo, Neutral, "리더십 조율 필요"),
        (Ox, Virgo, Good, "꼼꼼함 시너지"),
        (Ox, Libra, Neutral, "결정 방식 차이"),
        (Ox, Scorpio, Good, "끈기 시너지"),
        (Ox, Sagittarius, Caution, "속도 차이 큼"),
        (Ox, Capricorn, Good, "실용주의 완벽 조합"),
        // 호랑이
        (Tiger, Aquarius, Good, "혁신적 리더십"),
        (Tiger, Pisces, Neutral, "강함과 부드러움 균형"),
        (Tiger, Aries, Good, "용맹함 시너지"),
        (Tiger, Taurus, Caution, "주도권 충돌 가능"),
        (Tiger, Gemini, Neutral, "방향성 맞추면 OK"),
        (Tiger, Cancer, Neutral, "보호 vs 독립 균형"),
        (Tiger, Leo, Caution, "리더십 충돌 주의"),
        (Tiger, Virgo, Neutral, "디테일 보완 필요"),
        (Tiger, Libra, Good, "결단+균형 조합"),
        (Tiger, Scorpio, Good, "강인함 시너지"),
        (Tiger, Sagittarius, Good, "도전 정신 폭발"),
        (Tiger, Capricorn, Neutral, "목표 맞추면 강력"),
        // 토끼
        (Rabbit, Aquarius, Good, "창의적 유연함"),
        (Rabbit, Pisces, Good, "감성 시너지"),
        (Rabbit, Aries, Neutral, "속도 조절 필요"),
        (Rabbit, Taurus, Good, "안정적 조화"),
        (Rabbit, Gemini, Good, "사교성 폭발"),
        (Rabbit, Cancer, Good, "정서적 교감"),
        (Rabbit, Leo, Neutral, "자기주장 필요"),
        (Rabbit, Virgo, Neutral, "완벽주의 조절"),
        (Rabbit, Libra, Good, "조화로운 조합"),
        (Rabbit, Scorpio, Caution, "깊이 차이 조율"),
        (Rabbit, Sagittarius, Neutral, "방향성 맞추기"),
        (Rabbit, Capricorn, Neutral, "목표 공유하면 OK"),
        // 용
        (Dragon, Aquarius, Good, "비전 시너지"),
        (Dragon, Pisces, Neutral, "이상과 감성 균형"),
        (Dragon, Aries, Good, "파워풀 조합"),
        (Dragon, Taurus, Caution, "속도 차이 큼"),
        (Dragon, Gemini, Good, "다재다능 시너지"),
        (Dragon, Cancer, Neutral, "감정 교류 필요"),
        (Dragon, Leo, Caution, "주도권 경쟁"),
        (Dragon, Virgo, Neutral, "디테일 보완 가능"),
        (Dragon, Libra, Good, "균형 잡힌 리더십"),
        (Dragon, Scorpio, Good, "카리스마 폭발"),
        (Dragon, Sagittarius, Good, "확장 지향 완벽"),
        (Dragon, Capricorn, Neutral, "목표 맞추면 강력"),
        // 뱀
        (Snake, Aquarius, Neutral, "독립성 충돌 가능"),
        (Snake, Pisces, Good, "직감 시너지"),
        (Snake, Aries, Caution, "방식 차이 큼"),
        (Snake, Taurus, Good, "신중함 조합"),
        (Snake, Gemini, Caution, "소통 방식 차이"),
        (Snake, Cancer, Neutral, "감정 공유 필요"),
        (Snake, Leo, Neutral, "표현 방식 차이"),
        (Snake, Virgo, Good, "분석력 시너지"),
        (Snake, Libra, Neutral, "결정 방식 조율"),
        (Snake, Scorpio, Good, "통찰력 최강"),
        (Snake, Sagittarius, Caution, "깊이 vs 넓이"),
        (Snake, Capricorn, Good, "전략적 조합"),
        // 말
        (Horse, Aquarius, Good, "자유로운 에너지"),
        (Horse, Pisces, Neutral, "감성 균형 필요"),
        (Horse, Aries, Good, "열정 폭발"),
        (Horse, Taurus, Caution, "속도 차이 큼"),
        (Horse, Gemini, Good, "활발한 시너지"),
        (Horse, Cancer, Neutral, "안정 vs 자유"),
        (Horse, Leo, Good, "에너지 시너지"),
        (Horse, Virgo, Caution, "디테일 충돌"),
        (Horse, Libra, Neutral, "균형 맞추기"),
        (Horse, Scorpio, Neutral, "깊이 차이 조율"),
        (Horse, Sagittarius, Good, "모험 최강 조합"),
        (Horse, Capricorn, Caution, "방식 차이 큼"),
        // 양
        (Goat, Aquarius, Neutral, "독립성 조율"),
        (Goat, Pisces, Good, "감성 교감"),
        (Goat, Aries, Neutral, "주도권 명확히"),
        (Goat, Taurus, Good, "평화로운 조합"),
        (Goat, Gemini, Neutral, "소통 노력 필요"),
        (Goat, Cancer, Good, "정서적 안정"),
        (Goat, Leo, Neutral, "지지 역할 명확히"),
        (Goat, Virgo, Good, "섬세함 시너지"),
        (Goat, Libra, Good, "조화로운 균형"),
        (Goat, Scorpio, Caution, "깊이 차이"),
        (Goat, Sagittarius, Neutral, "방향성 맞추기"),
        (Goat, Capricorn, Neutral, "실용성 공유"),
        // 원숭이
        (Monkey, Aquarius, Good, "창의력 폭발"),
        (Monkey, Pisces, Neutral, "진정성 필요"),
        (Monkey, Aries, Good, "활력 시너지"),
        (Monkey, Taurus, Caution, "방식 차이"),
        (Monkey, Gemini, Good, "재치 최강 조합"),
        (Monkey, Cancer, Neutral, "감정 교류 필요"),
        (Monkey, Leo, Good, "무대 장악 시너지"),
        (Monkey, Virgo, Caution, "꼼꼼함 충돌"),
        (Monkey, Libra, Good, "사교성 폭발"),
        (Monkey, Scorpio, Caution, "진정성 의심"),
        (Monkey, Sagittarius, Good, "모험 시너지"),
        (Monkey, Capricorn, Neutral, "실용성 맞추기"),
        // 닭
        (Rooster, Aquarius, Caution, "방식 차이 큼"),
        (Rooster, Pisces, Neutral, "감성 보완 필요"),
        (Rooster, Aries, Neutral, "속도 조절"),
        (Rooster, Taurus, Good, "성실함 시너지"),
        (Rooster, Gemini, Caution, "디테일 충돌"),
        (Rooster, Cancer, Neutral, "감정 표현 필요"),
        (Rooster, Leo, Neutral, "인정 욕구 조율"),
        (Rooster, Virgo, Good, "완벽주의 시너지"),
        (Rooster, Libra, Neutral, "기준 맞추기"),
        (Rooster, Scorpio, Good, "집중력 시너지"),
        (Rooster, Sagittarius, Caution, "디테일 vs 큰그림"),
        (Rooster, Capricorn, Good, "목표 지향 완벽"),
        // 개
        (Dog, Aquarius, Neutral, "가치관 맞추기"),
        (Dog, Pisces, Good, "진심 교감"),
        (Dog, Aries, Neutral, "충성 방향 명확히"),
        (Dog, Taurus, Good, "신뢰 기반 조합"),
        (Dog, Gemini, Caution, "진정성 의문"),
        (Dog, Cancer, Good, "정서적 유대"),
        (Dog, Leo, Good, "충성심 시너지"),
        (Dog, Virgo, Good, "꼼꼼함 신뢰"),
        (Dog, Libra, Neutral, "공정함 맞추기"),
        (Dog, Scorpio, Good, "깊은 신뢰"),
        (Dog, Sagittarius, Neutral, "자유 vs 충성"),
        (Dog, Capricorn, Good, "책임감 시너지"),
        // 돼지
        (Pig, Aquarius, Neutral, "방식 조율 필요"),
        (Pig, Pisces, Good, "감성 충만"),
        (Pig, Aries, Neutral, "에너지 맞추기"),
        (Pig, Taurus, Good, "여유 시너지"),
        (Pig, Gemini, Neutral, "깊이 차이"),
        (Pig, Cancer, Good, "편안한 조합"),
        (Pig, Leo, Neutral, "주도권 명확히"),
        (Pig, Virgo, Neutral, "완벽주의 조절"),
        (Pig, Libra, Good, "평화로운 조합"),
        (Pig, Scorpio, Neutral, "깊이 맞추기"),
        (Pig, Sagittarius, Good, "낙관 시너지"),
        (Pig, Capricorn, Neutral, "실용성 공유"),
    ]
};

/// Lookup over an arbitrary matrix slice, falling back to the neutral entry.
/// Split out so the fallback path is testable against a truncated table.
pub fn compatibility_in(
    table: &'static [(Animal, ZodiacSign, CompatTier, &'static str)],
    animal: Animal,
    sign: ZodiacSign,
) -> (CompatTier, &'static str) {
    table
        .iter()
        .find(|(a, z, _, _)| *a == animal && *z == sign)
        .map(|(_, _, tier, comment)| (*tier, *comment))
        .unwrap_or(COMPATIBILITY_FALLBACK)
}

pub fn compatibility(animal: Animal, sign: ZodiacSign) -> (CompatTier, &'static str) {
    compatibility_in(COMPATIBILITY, animal, sign)
}

/// Startup validation of the whole bank. A failure here is a configuration
/// error and must abort before any fortune is composed.
pub fn validate() -> Result<()> {
    for mbti in Mbti::ALL {
        non_empty(mbti_fortune(mbti), &format!("mbti_fortune[{}]", mbti))?;
        non_empty(mbti_warning(mbti), &format!("mbti_warning[{}]", mbti))?;
    }
    for animal in Animal::ALL {
        non_empty(animal_energy(animal), &format!("animal_energy[{animal}]"))?;
        non_empty(animal_warning(animal), &format!("animal_warning[{animal}]"))?;
        if !lucky_item_reason(animal).contains(animal.as_str()) {
            return Err(Error::TemplateBank(format!(
                "lucky_item_reason[{animal}] missing animal substitution"
            )));
        }
    }
    for sign in ZodiacSign::ALL {
        non_empty(zodiac_morning(sign), &format!("zodiac_morning[{sign}]"))?;
        non_empty(zodiac_afternoon(sign), &format!("zodiac_afternoon[{sign}]"))?;
    }
    for day_type in DayType::ALL {
        non_empty(day_type_morning(day_type), &format!("day_type_morning[{day_type}]"))?;
        non_empty(day_type_afternoon(day_type), &format!("day_type_afternoon[{day_type}]"))?;
        non_empty(day_type_evening(day_type), &format!("day_type_evening[{day_type}]"))?;
    }
    for slot in TimeSlot::ALL {
        non_empty(time_intro(slot), &format!("time_intro[{slot}]"))?;
    }
    for season in Season::ALL {
        non_empty(season_vibe(season), &format!("season_vibe[{season}]"))?;
    }
    for condition in WeatherCondition::ALL {
        non_empty(weather_lunch(condition), &format!("weather_lunch[{condition}]"))?;
    }
    for flag in SpecialDay::ALL {
        non_empty(special_day(flag), &format!("special_day[{flag}]"))?;
    }
    non_empty(LUCKY_ITEMS, "lucky_items")?;
    non_empty(RANDOM_VARIABLES, "random_variables")?;

    // Every (animal, sign) pair exactly once.
    if COMPATIBILITY.len() != 144 {
        return Err(Error::TemplateBank(format!(
            "compatibility matrix has {} entries, expected 144",
            COMPATIBILITY.len()
        )));
    }
    for animal in Animal::ALL {
        for sign in ZodiacSign::ALL {
            let count = COMPATIBILITY
                .iter()
                .filter(|(a, z, _, _)| *a == animal && *z == sign)
                .count();
            if count != 1 {
                return Err(Error::TemplateBank(format!(
                    "compatibility[{animal}, {sign}] appears {count} times"
                )));
            }
        }
    }

    Ok(())
}

fn non_empty(list: &[&str], table: &str) -> Result<()> {
    if list.is_empty() {
        return Err(Error::TemplateBank(format!("{table} is empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_validates() {
        validate().expect("bundled template bank must pass validation");
    }

    #[test]
    fn test_compatibility_lookup() {
        let (tier, comment) = compatibility(Animal::Rat, ZodiacSign::Capricorn);
        assert_eq!(tier, CompatTier::Good);
        assert_eq!(comment, "목표 지향 완벽 조합");

        let (tier, _) = compatibility(Animal::Tiger, ZodiacSign::Leo);
        assert_eq!(tier, CompatTier::Caution);
    }

    #[test]
    fn test_compatibility_fallback_on_miss() {
        // A truncated matrix forces the miss path.
        let truncated = &COMPATIBILITY[..12];
        let (tier, comment) = compatibility_in(truncated, Animal::Pig, ZodiacSign::Libra);
        assert_eq!(tier, CompatTier::Neutral);
        assert_eq!(comment, "균형 잡힌 하루");
    }

    #[test]
    fn test_lucky_item_reason_substitutes_animal() {
        assert_eq!(lucky_item_reason(Animal::Rat), "재빠른 쥐띠에게 민첩함을 더해줄");
        assert_eq!(lucky_item_reason(Animal::Pig), "복 많은 돼지띠의 행운을 배로 만들");
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(LUCKY_ITEMS.len(), 30);
        assert_eq!(RANDOM_VARIABLES.len(), 40);
    }
}
