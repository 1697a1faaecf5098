//! DOM rendering surface: one absolutely positioned `<div>` per visual.
//!
//! Layout (`position: absolute`, guide line extents) lives in the page's
//! stylesheet; this module only writes the per-frame properties.

use drag_engine::{Axis, Cursor, EngineError, Surface, Visual, VisualKind};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Class given to every sprite element.
pub const SPRITE_CLASS: &str = "sprite";
/// Attribute carrying the entity id, so the page can report pointer-down
/// targets back to Rust.
pub const ENTITY_ID_ATTR: &str = "data-entity-id";

fn guide_class(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "drag-x-axis-line",
        Axis::Y => "drag-y-axis-line",
    }
}

fn js_err(err: JsValue) -> EngineError {
    EngineError::render(format!("{err:?}"))
}

fn into_html(element: Element) -> Result<HtmlElement, EngineError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| EngineError::render("element is not an HtmlElement"))
}

pub struct DomVisual {
    element: HtmlElement,
}

impl DomVisual {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn style(&self, property: &str, value: &str) -> Result<(), EngineError> {
        self.element
            .style()
            .set_property(property, value)
            .map_err(js_err)
    }
}

impl Visual for DomVisual {
    fn set_left(&mut self, x: f32) -> Result<(), EngineError> {
        self.style("left", &format!("{x}px"))
    }

    fn set_top(&mut self, y: f32) -> Result<(), EngineError> {
        self.style("top", &format!("{y}px"))
    }

    fn set_size(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        self.style("width", &format!("{width}px"))?;
        self.style("min-height", &format!("{height}px"))
    }

    fn set_background(&mut self, color: &str) -> Result<(), EngineError> {
        self.style("background", color)
    }

    fn set_outline(&mut self, color: Option<&str>) -> Result<(), EngineError> {
        match color {
            Some(color) => self.style("outline", &format!("1px solid {color}")),
            None => self.style("outline", "none"),
        }
    }

    fn set_stacking_order(&mut self, z: i32) -> Result<(), EngineError> {
        self.style("z-index", &z.to_string())
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), EngineError> {
        self.style("cursor", cursor.as_css())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError> {
        self.style("display", if visible { "block" } else { "none" })
    }
}

/// The play area element and the document it lives in.
pub struct DomSurface {
    document: Document,
    root: Element,
}

impl DomSurface {
    /// Bind to the first element matching `root_selector`.
    pub fn new(root_selector: &str) -> Result<Self, EngineError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| EngineError::render("no document available"))?;
        let root = document
            .query_selector(root_selector)
            .map_err(js_err)?
            .ok_or_else(|| EngineError::render(format!("no element matches {root_selector}")))?;
        Ok(Self { document, root })
    }

    fn create_div(&self, class: &str) -> Result<HtmlElement, EngineError> {
        let element = self.document.create_element("div").map_err(js_err)?;
        element.set_class_name(class);
        into_html(element)
    }

    /// Reuse the page's guide element if it has one, otherwise add one.
    fn guide_element(&self, axis: Axis) -> Result<HtmlElement, EngineError> {
        let class = guide_class(axis);
        let existing = self
            .document
            .query_selector(&format!(".{class}"))
            .map_err(js_err)?;
        match existing {
            Some(element) => into_html(element),
            None => {
                let element = self.create_div(class)?;
                self.root.append_child(&element).map_err(js_err)?;
                Ok(element)
            }
        }
    }
}

impl Surface for DomSurface {
    type Visual = DomVisual;

    fn create_visual(&mut self, kind: VisualKind) -> Result<DomVisual, EngineError> {
        let element = match kind {
            VisualKind::Sprite(id) => {
                let element = self.create_div(SPRITE_CLASS)?;
                element
                    .set_attribute(ENTITY_ID_ATTR, &id.0.to_string())
                    .map_err(js_err)?;
                element
            }
            VisualKind::Guide(axis) => self.guide_element(axis)?,
        };
        Ok(DomVisual { element })
    }

    fn attach(&mut self, visual: &DomVisual) -> Result<(), EngineError> {
        self.root.append_child(visual.element()).map_err(js_err)?;
        Ok(())
    }
}
