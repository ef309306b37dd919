use image::RgbaImage;

/// Convert an RGBA raster to an egui ColorImage, keeping straight alpha.
pub fn rgba_to_color_image(img: &RgbaImage) -> egui::ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw())
}
