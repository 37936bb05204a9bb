//! Client-side downscaling for oversized image uploads.
//!
//! Files at or under the size threshold upload untouched. Anything larger is
//! decoded into an offscreen canvas, scaled so its longest edge fits
//! `MAX_DIMENSION`, and re-encoded as JPEG before the multipart request is
//! built. Failures fall back to the original file; the backend enforces its
//! own limits either way.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Files at or below this size skip the downscale pass entirely.
pub const MAX_UPLOAD_BYTES: f64 = 1024.0 * 1024.0;

/// Longest edge after downscaling.
pub const MAX_DIMENSION: f64 = 1920.0;

/// JPEG encoder quality for re-encoded images.
pub const JPEG_QUALITY: f64 = 0.85;

/// Target width/height preserving aspect ratio with the longest edge capped
/// at `max_edge`. Images already inside the cap come back unchanged.
#[must_use]
pub fn scaled_dimensions(width: f64, height: f64, max_edge: f64) -> (f64, f64) {
    let longest = width.max(height);
    if longest <= max_edge || longest <= 0.0 {
        return (width, height);
    }
    let scale = max_edge / longest;
    ((width * scale).round(), (height * scale).round())
}

/// Downscale `file` when it exceeds [`MAX_UPLOAD_BYTES`], otherwise return
/// it as-is. Any decode/encode failure also returns the original.
#[cfg(feature = "hydrate")]
pub async fn downscale_if_needed(file: web_sys::File) -> web_sys::File {
    if file.size() <= MAX_UPLOAD_BYTES {
        return file;
    }
    match downscale(&file).await {
        Some(scaled) => scaled,
        None => file,
    }
}

#[cfg(feature = "hydrate")]
async fn downscale(file: &web_sys::File) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let url = web_sys::Url::create_object_url_with_blob(file).ok()?;
    let img = web_sys::HtmlImageElement::new().ok()?;

    // Wait for the decode; onerror resolves the same channel so a corrupt
    // file cannot hang the composer.
    let (loaded_tx, loaded_rx) = futures::channel::oneshot::channel::<bool>();
    let loaded_tx = std::rc::Rc::new(std::cell::RefCell::new(Some(loaded_tx)));
    let ok_tx = loaded_tx.clone();
    let onload = Closure::once(move || {
        if let Some(tx) = ok_tx.borrow_mut().take() {
            let _ = tx.send(true);
        }
    });
    let err_tx = loaded_tx;
    let onerror = Closure::once(move || {
        if let Some(tx) = err_tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    img.set_src(&url);

    let loaded = loaded_rx.await.unwrap_or(false);
    let _ = web_sys::Url::revoke_object_url(&url);
    if !loaded {
        return None;
    }

    let (width, height) =
        scaled_dimensions(f64::from(img.natural_width()), f64::from(img.natural_height()), MAX_DIMENSION);

    let document = web_sys::window()?.document()?;
    let canvas: web_sys::HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
    let ctx: web_sys::CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, width, height)
        .ok()?;

    let (blob_tx, blob_rx) = futures::channel::oneshot::channel::<Option<web_sys::Blob>>();
    let to_blob = Closure::once(move |blob: wasm_bindgen::JsValue| {
        let _ = blob_tx.send(blob.dyn_into::<web_sys::Blob>().ok());
    });
    canvas
        .to_blob_with_type_and_encoder_options(
            to_blob.as_ref().unchecked_ref(),
            "image/jpeg",
            &wasm_bindgen::JsValue::from_f64(JPEG_QUALITY),
        )
        .ok()?;
    let blob = blob_rx.await.ok().flatten()?;

    let parts = js_sys::Array::of1(&blob);
    let options = web_sys::FilePropertyBag::new();
    options.set_type("image/jpeg");
    web_sys::File::new_with_blob_sequence_and_options(&parts, &file.name(), &options).ok()
}
