use solip_center::content::{block_for, ContentBlock};
use solip_center::image::ImageRef;
use solip_center::page::Page;
use solip_center::pages::render_block;
use yew::prelude::*;
use yew::ServerRenderer;

/// Every image a block shows, in page order.
pub fn images_of(block: ContentBlock) -> Vec<ImageRef> {
    match block {
        ContentBlock::Home(c) => vec![c.hero],
        ContentBlock::About(c) => std::iter::once(c.photo)
            .chain(c.staff.iter().map(|s| s.photo))
            .collect(),
        ContentBlock::Programs(c) => c.areas.iter().map(|a| a.photo).collect(),
        ContentBlock::Support(c) => vec![c.photo],
        ContentBlock::Gallery(_) | ContentBlock::Announcements(_) | ContentBlock::Contact(_) => {
            Vec::new()
        }
    }
}

/// Outbound URLs a block links to, including the map embed.
pub fn links_of(block: ContentBlock) -> Vec<&'static str> {
    match block {
        ContentBlock::Gallery(c) => c.links.iter().map(|l| l.href).collect(),
        ContentBlock::Announcements(c) => vec![c.link.href],
        ContentBlock::Contact(c) => vec![c.map_src],
        ContentBlock::Support(c) => vec![c.photo_link],
        ContentBlock::Home(_) | ContentBlock::About(_) | ContentBlock::Programs(_) => Vec::new(),
    }
}

/// How a value shows up inside a double-quoted attribute of rendered HTML.
pub fn attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[derive(Properties, PartialEq)]
pub struct BlockViewProps {
    pub page: Page,
}

#[function_component(BlockView)]
pub fn block_view(props: &BlockViewProps) -> Html {
    render_block(block_for(props.page))
}

/// Server-renders the block for `page` to an HTML string.
pub async fn render_page(page: Page) -> String {
    ServerRenderer::<BlockView>::with_props(move || BlockViewProps { page })
        .hydratable(false)
        .render()
        .await
}
