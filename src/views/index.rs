// ============================================================================
// INDEX VIEW - Ruta "/"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::views::RenderContext;

pub fn render_index(ctx: &RenderContext) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?
        .class("display-4")
        .text(&ctx.config.app_title)
        .build();

    let view = ElementBuilder::new("div")?
        .class("container index-view")
        .attr("data-view", "index")?
        .child(title)?
        .build();

    Ok(view)
}
