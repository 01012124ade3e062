//! Browser binding: owns the `<canvas>` element and draws a [`Surface`] on it.
//!
//! All interaction logic lives in [`Surface`] and [`crate::handlers`], which
//! have no browser dependencies and are tested natively. `Engine` only sizes
//! the backing store, decodes images and renders.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::render;
use crate::surface::Surface;

/// The canvas engine. Wraps the browser canvas element and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: HashMap<String, HtmlImageElement>,
    dpr: f64,
}

impl Engine {
    /// Create an engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, images: HashMap::new(), dpr: 1.0 })
    }

    /// The element's laid-out size in CSS pixels.
    #[must_use]
    pub fn client_size(&self) -> (f64, f64) {
        (f64::from(self.canvas.client_width()), f64::from(self.canvas.client_height()))
    }

    /// Resize the backing store to `width` x `height` CSS pixels at `dpr`
    /// device pixels per CSS pixel.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element's style cannot be updated.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_dimensions(&mut self, width: f64, height: f64, dpr: f64) -> Result<(), JsValue> {
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width((width.max(0.0) * self.dpr).round() as u32);
        self.canvas.set_height((height.max(0.0) * self.dpr).round() as u32);
        let style = self.canvas.style();
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;
        Ok(())
    }

    /// Draw the surface. Returns `true` while an image is still decoding; the
    /// host should render again shortly.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn render(&mut self, surface: &Surface) -> Result<bool, JsValue> {
        self.sync_images(surface)?;
        render::draw(&self.ctx, surface, &self.images, self.dpr)
    }

    /// Encode the current backing store as a PNG data URL.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas is tainted or encoding fails.
    pub fn to_data_url(&self) -> Result<String, JsValue> {
        self.canvas.to_data_url()
    }

    /// Start decoding every image source on the surface and forget sources
    /// that are gone.
    fn sync_images(&mut self, surface: &Surface) -> Result<(), JsValue> {
        let mut live = HashMap::with_capacity(self.images.len());
        for src in surface.objects().into_iter().filter_map(|o| o.src.as_deref()) {
            if live.contains_key(src) {
                continue;
            }
            let img = match self.images.remove(src) {
                Some(img) => img,
                None => {
                    let img = HtmlImageElement::new()?;
                    img.set_src(src);
                    img
                }
            };
            live.insert(src.to_owned(), img);
        }
        self.images = live;
        Ok(())
    }
}
