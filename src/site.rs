// Center identity and contact details shared by the header, footer and the
// contact page.

pub const NAME: &str = "솔잎지역아동센터";
pub const NAME_ACCENT: &str = "솔잎";
pub const NAME_REST: &str = "지역아동센터";

pub const LOGO_SRC: &str = "/images/logo.png";
pub const LOGO_ALT: &str = "솔잎지역아동센터 로고";

pub const REPRESENTATIVE: &str = "정경택";
pub const ADDRESS: &str = "대구광역시 동구 송라로 36, 2층";
pub const POSTAL_LINE: &str = "(우) 41259 (지번) 신천동 178-1";
pub const PHONE: &str = "053-256-3217";
pub const FAX: &str = "053-256-3218";
pub const EMAIL: &str = "jcecbw@hanmail.net";
pub const BUSINESS_NO: &str = "502-80-12722";

pub const COPYRIGHT_YEAR: u16 = 2025;

pub fn footer_lines() -> [String; 3] {
    [
        format!("{NAME} | 대표: {REPRESENTATIVE} | 주소: {ADDRESS} | 전화: {PHONE}"),
        format!("이메일: {EMAIL} | 사업자등록번호: {BUSINESS_NO}"),
        format!("© {COPYRIGHT_YEAR} {NAME}. All rights reserved."),
    ]
}
