//! Browser image loader backed by `HtmlImageElement`.

use std::cell::Cell;

use web_sys::HtmlImageElement;

use super::images::ImageLoader;

pub struct WebImageHandle {
    element: Option<HtmlImageElement>,
    path: String,
    reported: Cell<bool>,
}

#[derive(Default)]
pub struct WebImageLoader;

impl WebImageLoader {
    pub fn new() -> Self {
        Self
    }

    fn report_failure(handle: &WebImageHandle) {
        if !handle.reported.replace(true) {
            log_warn!("glyph image {} failed to load; keeping placeholder scale", handle.path);
        }
    }
}

impl ImageLoader for WebImageLoader {
    type Handle = WebImageHandle;

    fn load(&mut self, path: &str) -> WebImageHandle {
        let element = match HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(path);
                Some(img)
            }
            Err(_) => None,
        };
        WebImageHandle {
            element,
            path: path.to_string(),
            reported: Cell::new(false),
        }
    }

    fn natural_size(&self, handle: &WebImageHandle) -> Option<(u32, u32)> {
        let Some(img) = handle.element.as_ref() else {
            Self::report_failure(handle);
            return None;
        };
        if !img.complete() {
            return None;
        }
        let (w, h) = (img.natural_width(), img.natural_height());
        if w == 0 || h == 0 {
            // `complete` with no pixels means the request errored.
            Self::report_failure(handle);
            return None;
        }
        Some((w, h))
    }
}
