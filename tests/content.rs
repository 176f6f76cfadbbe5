mod common;

use common::{images_of, links_of};
use solip_center::content::block_for;
use solip_center::page::Page;

#[test]
fn outbound_links() {
    assert_eq!(
        links_of(block_for(Page::Gallery)),
        [
            "https://ion.or.kr/solip/community/photo/list/1",
            "https://pf.kakao.com/_xbxlyUxb/posts"
        ]
    );
    assert_eq!(
        links_of(block_for(Page::Announcements)),
        ["https://ion.or.kr/solip/community/notice/list/1"]
    );
    assert_eq!(
        links_of(block_for(Page::Support)),
        ["https://www.1365.go.kr/vols/main.do"]
    );
    assert!(links_of(block_for(Page::Contact))[0].starts_with("https://map.kakao.com/"));
    assert!(links_of(block_for(Page::Home)).is_empty());
}

#[test]
fn about_images_in_page_order() {
    let srcs: Vec<_> = images_of(block_for(Page::About)).iter().map(|i| i.src).collect();
    assert_eq!(
        srcs,
        [
            "/images/about_image.png",
            "/images/staff_male.png",
            "/images/staff_female.png",
            "/images/staff_female.png"
        ]
    );
    assert!(images_of(block_for(Page::Gallery)).is_empty());
}
