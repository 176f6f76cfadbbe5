//! Literal page content, kept as typed static data so each page's block can be
//! looked up and inspected without a browser.

use crate::image::ImageRef;
use crate::page::Page;
use crate::site;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Info,
    BookOpen,
    Image,
    Mail,
    HeartHandshake,
    Bell,
    Camera,
    MessageSquare,
    ExternalLink,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Info => "ℹ️",
            Icon::BookOpen => "📖",
            Icon::Image => "🖼️",
            Icon::Mail => "✉️",
            Icon::HeartHandshake => "🤝",
            Icon::Bell => "🔔",
            Icon::Camera => "📷",
            Icon::MessageSquare => "💬",
            Icon::ExternalLink => "↗",
        }
    }
}

/// Colour family used for tinted boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Amber,
    Purple,
    Stone,
    Red,
    Yellow,
    Green,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Amber => "accent-amber",
            Accent::Purple => "accent-purple",
            Accent::Stone => "accent-stone",
            Accent::Red => "accent-red",
            Accent::Yellow => "accent-yellow",
            Accent::Green => "accent-green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub photo: ImageRef,
}

/// Bullet with a bold lead-in, e.g. "급식 지원: ...".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledItem {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramArea {
    pub number: u8,
    pub title: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub summary: &'static str,
    pub items: &'static [LabeledItem],
    pub photo: ImageRef,
}

/// Outbound link card. Always opens in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkBox {
    pub href: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursEntry {
    pub days: &'static str,
    pub detail: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankAccount {
    pub bank: &'static str,
    pub number: &'static str,
    pub holder: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HomeContent {
    pub heading: &'static str,
    pub intro: &'static str,
    pub hero: ImageRef,
    pub features: &'static [Feature],
    pub vision_title: &'static str,
    pub vision: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AboutContent {
    pub heading: &'static str,
    pub overview_title: &'static str,
    pub overview: &'static str,
    pub photo: ImageRef,
    pub purposes_title: &'static str,
    pub purposes: &'static [&'static str],
    pub history_title: &'static str,
    pub history: &'static [&'static str],
    pub staff_title: &'static str,
    pub staff: &'static [StaffMember],
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProgramsContent {
    pub heading: &'static str,
    pub intro: &'static str,
    pub areas: &'static [ProgramArea],
}

#[derive(Debug, PartialEq, Eq)]
pub struct GalleryContent {
    pub heading: &'static str,
    pub links: &'static [LinkBox],
}

#[derive(Debug, PartialEq, Eq)]
pub struct AnnouncementsContent {
    pub heading: &'static str,
    pub link: LinkBox,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ContactContent {
    pub heading: &'static str,
    pub details_title: &'static str,
    pub address: &'static str,
    pub postal_line: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub fax: &'static str,
    pub hours_title: &'static str,
    pub hours: &'static [HoursEntry],
    pub directions_title: &'static str,
    pub transit_station: &'static str,
    pub transit_landmark: &'static str,
    pub map_src: &'static str,
    pub map_title: &'static str,
    pub map_height_px: u32,
    pub map_note: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SupportContent {
    pub heading: &'static str,
    pub intro: &'static str,
    pub photo: ImageRef,
    pub photo_link: &'static str,
    pub donation_title: &'static str,
    pub donation_intro: &'static str,
    pub donation_kinds: &'static [&'static str],
    pub account_title: &'static str,
    pub account: BankAccount,
    pub donation_note: &'static str,
    pub volunteer_title: &'static str,
    pub volunteer_intro: &'static str,
    pub volunteer_kinds: &'static [&'static str],
    pub apply_title: &'static str,
    pub apply_how: &'static str,
    pub apply_contact: &'static str,
    pub volunteer_note: &'static str,
    pub closing_title: &'static str,
    pub closing: &'static str,
}

/// The static block shown for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBlock {
    Home(&'static HomeContent),
    About(&'static AboutContent),
    Programs(&'static ProgramsContent),
    Gallery(&'static GalleryContent),
    Announcements(&'static AnnouncementsContent),
    Contact(&'static ContactContent),
    Support(&'static SupportContent),
}

impl ContentBlock {
    pub fn page(self) -> Page {
        match self {
            ContentBlock::Home(_) => Page::Home,
            ContentBlock::About(_) => Page::About,
            ContentBlock::Programs(_) => Page::Programs,
            ContentBlock::Gallery(_) => Page::Gallery,
            ContentBlock::Announcements(_) => Page::Announcements,
            ContentBlock::Contact(_) => Page::Contact,
            ContentBlock::Support(_) => Page::Support,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ContentBlock::Home(c) => c.heading,
            ContentBlock::About(c) => c.heading,
            ContentBlock::Programs(c) => c.heading,
            ContentBlock::Gallery(c) => c.heading,
            ContentBlock::Announcements(c) => c.heading,
            ContentBlock::Contact(c) => c.heading,
            ContentBlock::Support(c) => c.heading,
        }
    }
}

pub fn block_for(page: Page) -> ContentBlock {
    match page {
        Page::Home => ContentBlock::Home(&HOME),
        Page::About => ContentBlock::About(&ABOUT),
        Page::Programs => ContentBlock::Programs(&PROGRAMS),
        Page::Gallery => ContentBlock::Gallery(&GALLERY),
        Page::Announcements => ContentBlock::Announcements(&ANNOUNCEMENTS),
        Page::Contact => ContentBlock::Contact(&CONTACT),
        Page::Support => ContentBlock::Support(&SUPPORT),
    }
}

pub static HOME: HomeContent = HomeContent {
    heading: "솔잎지역아동센터에 오신 것을 환영합니다!",
    intro: "솔잎지역아동센터는 아동의 건강한 성장과 발달을 지원하고, 지역사회와 함께 아이들의 밝은 미래를 만들어가는 공간입니다. \
            사랑과 관심으로 아이들의 꿈을 키워나갑니다.",
    hero: ImageRef::banner("/images/home_image.png", "아이들이 함께 웃는 모습"),
    features: &[
        Feature {
            icon: Icon::Home,
            title: "안전한 보호",
            description: "아이들이 안심하고 생활할 수 있는 안전하고 쾌적한 환경을 제공합니다.",
        },
        Feature {
            icon: Icon::BookOpen,
            title: "균형 잡힌 성장",
            description: "교육, 문화, 정서 지원을 통해 아이들의 전인적 성장을 돕습니다.",
        },
        Feature {
            icon: Icon::HeartHandshake,
            title: "지역사회 연계",
            description: "지역사회 자원과 연계하여 아이들에게 다양한 기회를 제공합니다.",
        },
    ],
    vision_title: "센터의 비전",
    vision: "솔잎지역아동센터는 모든 아이들이 존중받고 사랑받으며, 자신의 잠재력을 최대한 발휘할 수 있는 행복한 세상을 꿈꿉니다. \
             아이들이 건강한 사회 구성원으로 성장할 수 있도록 든든한 버팀목이 되겠습니다.",
};

pub static ABOUT: AboutContent = AboutContent {
    heading: "센터 소개",
    overview_title: "솔잎지역아동센터는?",
    overview: "솔잎지역아동센터는 방과 후 돌봄이 필요한 아동들을 위해 안전한 보호, 교육, 건전한 놀이 및 문화 활동, 그리고 정서적 지원을 제공하는 아동복지시설입니다. \
               지역사회 내 아동들의 건강한 성장과 발달을 돕고, 가정의 양육 부담을 경감하며, 아동들이 행복한 환경에서 미래의 꿈을 키울 수 있도록 지원하고 있습니다. \
               저희 센터는 아이들이 존중받고 사랑받는 공간이 될 수 있도록 최선을 다하고 있습니다.",
    photo: ImageRef::banner("/images/about_image.png", "아이들이 함께 활동하는 센터 내부 모습"),
    purposes_title: "설립 목적",
    purposes: &[
        "아동의 건전한 발달을 위한 안전한 보호 및 교육 환경 제공",
        "아동의 잠재력 개발 및 개별 특성을 고려한 맞춤형 프로그램 운영",
        "지역사회 자원 연계를 통한 아동 복지 증진 및 가족 기능 강화",
        "아동의 권리 존중 및 아동 중심의 복지 실현",
        "아동들이 미래 사회의 건강한 구성원으로 성장하도록 지원",
    ],
    history_title: "센터 연혁",
    history: &[
        "2010년 04월: 솔잎지역아동센터 설립 인가",
        "2013년: 센터 이전",
        "2013년: 아름인 도서관 설립",
        "2013년: 사회복지공동 모금회 승합차 지원",
        "2016년: 신협어부바멘토링(~2025년 현재)",
        "2018년: 야간특목형 아동센터 선정(~2025년 현재)",
    ],
    staff_title: "직원 소개",
    staff: &[
        StaffMember {
            name: "정경택 센터장",
            role: "센터장",
            description: "아이들의 행복을 최우선으로 생각하며, 센터 운영 전반을 총괄합니다.",
            photo: ImageRef::portrait("/images/staff_male.png", "정경택 센터장"),
        },
        StaffMember {
            name: "전혜지 사회복지사",
            role: "사회복지사",
            description: "아동 개별 상담 및 프로그램 기획, 지역사회 연계 업무를 담당합니다.",
            photo: ImageRef::portrait("/images/staff_female.png", "전혜지 사회복지사"),
        },
        StaffMember {
            name: "어선영 사회복지사",
            role: "사회복지사",
            description: "아이들의 일상생활 관리 및 학습 지도를 담당합니다.",
            photo: ImageRef::portrait("/images/staff_female.png", "어선영 사회복지사"),
        },
    ],
};

pub static PROGRAMS: ProgramsContent = ProgramsContent {
    heading: "주요 사업",
    intro: "솔잎지역아동센터는 아동의 건강한 성장과 발달을 위해 5가지 핵심 영역을 중심으로 다양한 프로그램을 운영합니다. \
            아이들이 행복하고 안전하게 성장할 수 있도록 체계적인 지원을 제공합니다.",
    areas: &[
        ProgramArea {
            number: 1,
            title: "보호",
            icon: Icon::Home,
            accent: Accent::Blue,
            summary: "아이들이 방과 후 안전하게 생활하고, 기본적인 욕구를 충족할 수 있도록 보호합니다.",
            items: &[
                LabeledItem { label: "안전한 생활 공간 제공", text: "쾌적하고 안전한 센터 환경 조성 및 관리" },
                LabeledItem { label: "급식 지원", text: "영양가 있는 저녁 식사 및 간식 제공 (식단표 운영)" },
                LabeledItem { label: "위생 및 건강 관리", text: "개인위생 지도, 건강 상태 확인 및 응급처치" },
                LabeledItem { label: "귀가 지도", text: "안전한 귀가를 위한 지도 및 보호자 연계" },
            ],
            photo: ImageRef::banner("/images/program_care.png", "아이들이 센터에서 안전하게 쉬는 모습"),
        },
        ProgramArea {
            number: 2,
            title: "정서지원",
            icon: Icon::HeartHandshake,
            accent: Accent::Amber,
            summary: "아이들의 건강한 정서 발달을 돕고, 심리적 안정감을 제공하여 행복하게 성장할 수 있도록 지원합니다.",
            items: &[
                LabeledItem { label: "개별 및 집단 상담", text: "아동의 고민 경청 및 정서적 지지, 또래 관계 증진" },
                LabeledItem { label: "미술/음악/놀이 치료", text: "예술 활동을 통한 정서 표현 및 치유" },
                LabeledItem { label: "자존감 향상 프로그램", text: "긍정적 자아 개념 형성 및 자신감 증진 활동" },
                LabeledItem { label: "스트레스 관리", text: "놀이, 휴식 등을 통한 스트레스 해소" },
            ],
            photo: ImageRef::banner(
                "/images/program_counseling.png",
                "아이들이 상담 또는 치료 활동에 참여하는 모습",
            ),
        },
        ProgramArea {
            number: 3,
            title: "문화체험",
            icon: Icon::Image,
            accent: Accent::Purple,
            summary: "다양한 문화 활동을 통해 아이들의 견문을 넓히고, 풍부한 감수성을 함양하도록 돕습니다.",
            items: &[
                LabeledItem { label: "영화/연극/뮤지컬 관람", text: "다양한 공연 관람을 통한 문화적 경험" },
                LabeledItem { label: "박물관/미술관/과학관 견학", text: "학습과 연계된 체험 활동" },
                LabeledItem { label: "계절별 나들이 및 캠프", text: "자연 속에서 즐거운 추억 만들기 및 협동심 증진" },
                LabeledItem { label: "요리 활동", text: "직접 음식을 만들며 오감 발달 및 성취감 경험" },
            ],
            photo: ImageRef::banner("/images/program_culture.png", "아이들이 문화 체험 활동에 참여하는 모습"),
        },
        ProgramArea {
            number: 4,
            title: "교육",
            icon: Icon::BookOpen,
            accent: Accent::Stone,
            summary: "아이들의 학업 성취도 향상과 자기 주도 학습 능력 강화를 위한 맞춤형 교육을 제공합니다.",
            items: &[
                LabeledItem { label: "개별 맞춤형 학습 지도", text: "국어, 수학, 영어 등 주요 과목 학습 지원" },
                LabeledItem { label: "숙제 지도 및 보충 학습", text: "학교 숙제 지원 및 부족한 부분 보충" },
                LabeledItem { label: "독서 지도 및 논술 교육", text: "독서 습관 형성 및 사고력, 표현력 증진" },
                LabeledItem { label: "특기적성 교육", text: "미술, 음악, 체육, 컴퓨터 등 예체능 및 정보화 교육" },
            ],
            photo: ImageRef::banner("/images/program_education.png", "아이들이 학습 활동에 집중하는 모습"),
        },
        ProgramArea {
            number: 5,
            title: "지역연계",
            icon: Icon::Info,
            accent: Accent::Red,
            summary: "지역사회 자원을 적극적으로 활용하고 연계하여 아이들에게 더욱 풍부한 기회를 제공하고, 지역사회와 함께 성장합니다.",
            items: &[
                LabeledItem { label: "자원봉사자 연계", text: "학습 지도, 특기 적성 교육 등 자원봉사자 활용" },
                LabeledItem { label: "지역사회 기관 협력", text: "도서관, 복지관, 보건소 등과 연계 프로그램 운영" },
                LabeledItem { label: "캠페인 및 홍보 활동", text: "아동 권리 증진 및 지역사회 인식 개선 노력" },
                LabeledItem { label: "후원자 개발 및 관리", text: "아이들을 위한 지속적인 후원 유치 및 관리" },
            ],
            photo: ImageRef::banner("/images/program_community.png", "센터와 지역사회 기관이 협력하는 모습"),
        },
    ],
};

pub static GALLERY: GalleryContent = GalleryContent {
    heading: "센터 갤러리",
    links: &[
        LinkBox {
            href: "https://ion.or.kr/solip/community/photo/list/1",
            icon: Icon::Camera,
            title: "전체 갤러리 보기",
            description: "솔잎지역아동센터 아이들의 즐거운 활동 모습을 확인해보세요!",
            accent: Accent::Blue,
        },
        LinkBox {
            href: "https://pf.kakao.com/_xbxlyUxb/posts",
            icon: Icon::MessageSquare,
            title: "카카오톡 채널 소식",
            description: "카카오톡 채널에서 더 많은 최신 소식을 만나보세요.",
            accent: Accent::Yellow,
        },
    ],
};

pub static ANNOUNCEMENTS: AnnouncementsContent = AnnouncementsContent {
    heading: "센터 공지사항",
    link: LinkBox {
        href: "https://ion.or.kr/solip/community/notice/list/1",
        icon: Icon::Bell,
        title: "솔잎지역아동센터의 주요 행사 및 소식",
        description: "센터의 최신 공지사항을 확인하시려면 '바로가기'를 클릭해주세요.",
        accent: Accent::Green,
    },
};

pub static CONTACT: ContactContent = ContactContent {
    heading: "오시는 길",
    details_title: "연락처 정보",
    address: site::ADDRESS,
    postal_line: site::POSTAL_LINE,
    email: site::EMAIL,
    phone: site::PHONE,
    fax: site::FAX,
    hours_title: "운영 시간",
    hours: &[
        HoursEntry { days: "월요일 - 금요일", detail: &["학기 중: 10:00 ~ 21:00", "방학 중: 09:00 ~ 19:00"] },
        HoursEntry { days: "토요일", detail: &["자체 행사시 운영"] },
        HoursEntry { days: "일요일, 공휴일", detail: &["휴무"] },
    ],
    directions_title: "찾아오시는 길 (약도)",
    transit_station: "신천역 5번 출구",
    transit_landmark: "신천초등학교 앞",
    map_src: "https://map.kakao.com/?urlX=865779.0000000601&urlY=662241.9999999984&urlLevel=3&itemId=12009276&q=%EC%86%94%EC%9E%8E%EC%A7%80%EC%97%AD%EC%95%84%EB%8F%99%EC%84%BC%ED%84%B0&srcid=12009276&map_type=TYPE_MAP",
    map_title: "솔잎지역아동센터 위치 약도",
    map_height_px: 600,
    map_note: "* 지도를 움직여 주변을 확인하거나 확대/축소할 수 있습니다.",
};

pub static SUPPORT: SupportContent = SupportContent {
    heading: "후원 및 자원봉사",
    intro: "솔잎지역아동센터는 아이들의 밝은 미래를 위해 따뜻한 마음을 나누어주실 여러분의 후원과 자원봉사를 기다립니다. \
            작은 관심이 아이들에게는 큰 희망이 됩니다.",
    photo: ImageRef::banner("/images/support_image.png", "후원 및 자원봉사 활동 모습"),
    photo_link: "https://www.1365.go.kr/vols/main.do",
    donation_title: "후원 안내",
    donation_intro: "정기 후원, 일시 후원 등 다양한 방법으로 아이들을 도울 수 있습니다. \
                     후원금은 아이들의 교육, 급식, 문화 체험 활동 등 전액 아이들을 위해 사용됩니다.",
    donation_kinds: &[
        "정기 후원: 매월 일정 금액을 자동 이체하는 방식",
        "일시 후원: 원하는 시기에 자유롭게 후원하는 방식",
        "물품 후원: 도서, 학용품, 의류, 간식 등 아이들에게 필요한 물품 후원",
    ],
    account_title: "후원 계좌 정보",
    account: BankAccount {
        bank: "IM뱅크(대구은행)",
        number: "033-10-004910",
        holder: site::NAME,
    },
    donation_note: "* 후원금은 연말정산 시 소득공제 혜택을 받으실 수 있습니다.",
    volunteer_title: "자원봉사 안내",
    volunteer_intro: "아이들과 함께 시간을 보내고 재능을 나누어주실 자원봉사자분들을 환영합니다.",
    volunteer_kinds: &[
        "학습 지도 봉사: 국어, 수학, 영어 등 교과목 학습 지원",
        "특기적성 지도 봉사: 미술, 음악, 체육, 컴퓨터 등 재능 기부",
        "문화 체험 활동 보조: 나들이, 캠프 등 행사 보조",
        "환경 미화 봉사: 센터 청소 및 환경 정리",
        "급식 봉사: 아이들 식사 준비 및 배식 보조",
    ],
    apply_title: "자원봉사 신청 방법",
    apply_how: "전화 또는 이메일로 문의 후 방문 상담",
    apply_contact: "담당자: 정경택 센터장 (053-256-3217)",
    volunteer_note: "* 자원봉사 시간은 VMS 또는 1365 자원봉사 포털에 등록 가능합니다.",
    closing_title: "여러분의 따뜻한 손길을 기다립니다!",
    closing: "솔잎지역아동센터는 여러분의 소중한 후원과 봉사로 운영됩니다. \
              아이들이 건강하고 행복하게 성장할 수 있도록 많은 관심과 사랑 부탁드립니다.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Placeholder;

    #[test]
    fn block_for_is_tagged_with_its_page() {
        for page in Page::ALL {
            assert_eq!(block_for(page).page(), page);
        }
    }

    #[test]
    fn headings_are_distinct() {
        let mut headings: Vec<_> = Page::ALL.iter().map(|p| block_for(*p).heading()).collect();
        headings.sort();
        headings.dedup();
        assert_eq!(headings.len(), Page::ALL.len());
    }

    #[test]
    fn contact_details_match_site() {
        let ContentBlock::Contact(c) = block_for(Page::Contact) else {
            panic!("contact page did not map to the contact block");
        };
        assert_eq!(c.address, "대구광역시 동구 송라로 36, 2층");
        assert_eq!(c.phone, "053-256-3217");
        assert_eq!(c.email, site::EMAIL);
        assert_eq!(c.map_height_px, 600);
    }

    #[test]
    fn staff_use_portrait_placeholder() {
        for member in ABOUT.staff {
            assert_eq!(member.photo.placeholder, Placeholder::Portrait);
            assert_eq!(member.photo.alt, member.name);
        }
        assert_eq!(ABOUT.photo.placeholder, Placeholder::Banner);
    }

    #[test]
    fn programs_have_five_numbered_areas() {
        let numbers: Vec<u8> = PROGRAMS.areas.iter().map(|a| a.number).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5]);
        assert!(PROGRAMS.areas.iter().all(|a| a.items.len() == 4));
    }
}
