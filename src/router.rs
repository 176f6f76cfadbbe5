use std::rc::Rc;

use yew::Reducible;

use crate::content::{block_for, ContentBlock};
use crate::page::Page;

/// Current page selection, owned by the app root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Router {
    current: Page,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, page: Page) {
        self.current = page;
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn current_block(&self) -> ContentBlock {
        block_for(self.current)
    }
}

pub enum RouterAction {
    Navigate(Page),
}

impl Reducible for Router {
    type Action = RouterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RouterAction::Navigate(page) if page == self.current => self,
            RouterAction::Navigate(page) => {
                let mut next = *self;
                next.navigate(page);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ABOUT, CONTACT, HOME};

    #[test]
    fn starts_on_home() {
        let router = Router::new();
        assert_eq!(router.current(), Page::Home);
        assert_eq!(router.current_block(), ContentBlock::Home(&HOME));
        assert_eq!(
            router.current_block().heading(),
            "솔잎지역아동센터에 오신 것을 환영합니다!"
        );
    }

    #[test]
    fn navigate_selects_matching_block() {
        let mut router = Router::new();
        for page in Page::ALL {
            router.navigate(page);
            assert_eq!(router.current(), page);
            assert_eq!(router.current_block(), block_for(page));
            for other in Page::ALL.into_iter().filter(|p| *p != page) {
                assert_ne!(router.current_block(), block_for(other));
            }
        }
    }

    #[test]
    fn every_transition_is_allowed() {
        for from in Page::ALL {
            for to in Page::ALL {
                let mut router = Router::new();
                router.navigate(from);
                router.navigate(to);
                assert_eq!(router.current_block().page(), to);
            }
        }
    }

    #[test]
    fn repeated_navigate_is_idempotent() {
        let mut router = Router::new();
        router.navigate(Page::Programs);
        let first = router.current_block();
        router.navigate(Page::Programs);
        router.navigate(Page::Programs);
        assert_eq!(router.current_block(), first);
    }

    #[test]
    fn about_block() {
        let mut router = Router::new();
        router.navigate(Page::About);
        assert_eq!(router.current_block(), ContentBlock::About(&ABOUT));
        assert_eq!(router.current_block().heading(), "센터 소개");
    }

    #[test]
    fn contact_block_has_address_and_phone() {
        let mut router = Router::new();
        router.navigate(Page::Contact);
        let ContentBlock::Contact(c) = router.current_block() else {
            panic!("expected contact block");
        };
        assert!(std::ptr::eq(c, &CONTACT));
        assert_eq!(c.address, "대구광역시 동구 송라로 36, 2층");
        assert_eq!(c.phone, "053-256-3217");
    }

    #[test]
    fn gallery_then_home_leaves_no_trace() {
        let mut router = Router::new();
        router.navigate(Page::Gallery);
        router.navigate(Page::Home);
        assert_eq!(router, Router::new());
        assert_eq!(router.current_block(), ContentBlock::Home(&HOME));
    }

    #[test]
    fn active_flag_follows_selection() {
        let mut router = Router::new();
        router.navigate(Page::Support);
        assert!(router.is_active(Page::Support));
        assert!(!router.is_active(Page::Home));
    }

    #[test]
    fn reducer_replaces_state() {
        let state = Rc::new(Router::new());
        let next = state.clone().reduce(RouterAction::Navigate(Page::Gallery));
        assert_eq!(next.current(), Page::Gallery);
        assert_eq!(state.current(), Page::Home);
    }

    #[test]
    fn reducer_keeps_same_state_for_same_page() {
        let state = Rc::new(Router::new());
        let next = state.clone().reduce(RouterAction::Navigate(Page::Home));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
