//! Image references and the placeholder shown when one fails to load.

const PLACEHOLDER_HOST: &str = "https://placehold.co";
const PLACEHOLDER_BG: &str = "CCCCCC";
const PLACEHOLDER_FG: &str = "000000";

/// Fixed stand-in for an image that could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Wide content photos.
    Banner,
    /// Staff portraits.
    Portrait,
}

impl Placeholder {
    pub fn size(self) -> (u32, u32) {
        match self {
            Placeholder::Banner => (800, 400),
            Placeholder::Portrait => (100, 100),
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Placeholder::Banner => "이미지 없음",
            Placeholder::Portrait => "사진 없음",
        }
    }

    pub fn url(self) -> String {
        let (w, h) = self.size();
        format!(
            "{PLACEHOLDER_HOST}/{w}x{h}/{PLACEHOLDER_BG}/{PLACEHOLDER_FG}?text={}",
            self.text().replace(' ', "+")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
    pub placeholder: Placeholder,
}

impl ImageRef {
    pub const fn banner(src: &'static str, alt: &'static str) -> Self {
        Self { src, alt, placeholder: Placeholder::Banner }
    }

    pub const fn portrait(src: &'static str, alt: &'static str) -> Self {
        Self { src, alt, placeholder: Placeholder::Portrait }
    }

    /// Source to put in the `src` attribute. Once a load has failed the
    /// placeholder is used for good; it is never retried or swapped again.
    pub fn resolve(&self, failed: bool) -> String {
        if failed {
            self.placeholder.url()
        } else {
            self.src.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_placeholder_url() {
        assert_eq!(
            Placeholder::Banner.url(),
            "https://placehold.co/800x400/CCCCCC/000000?text=이미지+없음"
        );
    }

    #[test]
    fn portrait_placeholder_url() {
        assert_eq!(
            Placeholder::Portrait.url(),
            "https://placehold.co/100x100/CCCCCC/000000?text=사진+없음"
        );
    }

    #[test]
    fn resolve_swaps_only_on_failure() {
        let img = ImageRef::banner("/images/home_image.png", "아이들이 함께 웃는 모습");
        assert_eq!(img.resolve(false), "/images/home_image.png");
        assert_eq!(img.resolve(true), Placeholder::Banner.url());
        // alt text survives the swap
        assert_eq!(img.alt, "아이들이 함께 웃는 모습");
    }
}
