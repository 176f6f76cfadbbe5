//! 솔잎지역아동센터 single-page site: page selection, static content and the
//! Yew components that render it.

pub mod components;
pub mod content;
pub mod image;
pub mod page;
pub mod pages;
pub mod router;
pub mod site;
