// ============================================================================
// MODEL VIEW - Ruta "/:model"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::views::RenderContext;

pub fn render_model(ctx: &RenderContext) -> Result<Element, JsValue> {
    let model = ctx.route.param("model").unwrap_or_default();

    let back = ElementBuilder::new("a")?
        .class("btn btn-link")
        .attr("href", &ctx.config.router_mode.href("/"))?
        .text("← Back")
        .build();

    let title = ElementBuilder::new("h1")?
        .class("display-4")
        .text(model)
        .build();

    let view = ElementBuilder::new("div")?
        .class("container model-view")
        .attr("data-view", "model")?
        .attr("data-model", model)?
        .child(back)?
        .child(title)?
        .build();

    Ok(view)
}
