mod common;

use common::images_of;
use solip_center::content::ContentBlock;
use solip_center::image::Placeholder;
use solip_center::page::Page;
use solip_center::router::Router;

#[test]
fn opens_on_welcome_page() {
    let router = Router::new();
    let block = router.current_block();
    assert_eq!(block.page(), Page::Home);
    assert_eq!(block.heading(), "솔잎지역아동센터에 오신 것을 환영합니다!");
}

#[test]
fn about_menu_shows_center_intro() {
    let mut router = Router::new();
    router.navigate(Page::About);
    assert_eq!(router.current_block().heading(), "센터 소개");
}

#[test]
fn contact_menu_shows_address_and_phone() {
    let mut router = Router::new();
    router.navigate(Page::Contact);
    match router.current_block() {
        ContentBlock::Contact(c) => {
            assert_eq!(c.address, "대구광역시 동구 송라로 36, 2층");
            assert_eq!(c.phone, "053-256-3217");
        }
        other => panic!("expected contact block, got {:?}", other.page()),
    }
}

#[test]
fn gallery_then_home_returns_to_welcome() {
    let mut router = Router::new();
    router.navigate(Page::Gallery);
    assert_eq!(router.current_block().heading(), "센터 갤러리");
    router.navigate(Page::Home);
    assert_eq!(router.current_block(), Router::new().current_block());
}

#[test]
fn failed_images_fall_back_without_touching_the_block() {
    for page in Page::ALL {
        let mut router = Router::new();
        router.navigate(page);
        let block = router.current_block();
        for image in images_of(block) {
            let shown = image.resolve(true);
            assert_eq!(shown, image.placeholder.url());
            assert!(shown.contains(&image.placeholder.text().replace(' ', "+")));
        }
        // the block itself is static; a failed load never changes it
        assert_eq!(router.current_block(), block);
        assert_eq!(router.current(), page);
    }
}

#[test]
fn placeholders_have_fixed_sizes() {
    assert_eq!(Placeholder::Banner.size(), (800, 400));
    assert_eq!(Placeholder::Portrait.size(), (100, 100));
}
