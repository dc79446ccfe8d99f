/*!
 * Raster assets: the application logo and the framed about-box logo.
 *
 * Shapes are painted directly onto the pixel buffer; a shape's colour
 * replaces whatever was underneath, alpha included.
 */

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use log::info;

use crate::errors::AssetError;

pub const SPHERE_BLUE: Rgba<u8> = Rgba([25, 118, 210, 255]);
pub const HIGHLIGHT_BLUE: Rgba<u8> = Rgba([99, 170, 240, 200]);
pub const SPHERE_BORDER: Rgba<u8> = Rgba([45, 58, 74, 255]);
pub const ARROW_GOLD: Rgba<u8> = Rgba([255, 215, 0, 255]);

pub const WOOD: Rgb<u8> = Rgb([139, 90, 43]);
pub const WOOD_LIGHT: Rgb<u8> = Rgb([149, 100, 53]);
pub const WOOD_DARK: Rgb<u8> = Rgb([134, 85, 38]);

/// Paints filled and outlined shapes on an RGBA canvas.
///
/// Coordinates follow the usual bounding-box convention: both corners are
/// inclusive. Pixels outside the canvas are ignored.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Filled axis-aligned rectangle.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.put(x, y, color);
            }
        }
    }

    /// Filled ellipse inscribed in the bounding box.
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let (cx, cy, rx, ry) = ellipse_geometry(x0, y0, x1, y1);
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                if inside_ellipse(x, y, cx, cy, rx, ry) {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Ellipse outline of the given width, drawn inward from the bounding box.
    pub fn stroke_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: i32, color: Rgba<u8>) {
        let (cx, cy, rx, ry) = ellipse_geometry(x0, y0, x1, y1);
        let w = width.max(1) as f64;
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                let outer = inside_ellipse(x, y, cx, cy, rx, ry);
                let inner = rx > w && ry > w && inside_ellipse(x, y, cx, cy, rx - w, ry - w);
                if outer && !inner {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Filled triangle.
    pub fn fill_triangle(&mut self, points: [(i32, i32); 3], color: Rgba<u8>) {
        let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
        let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);

        let [a, b, c] = points;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let d1 = edge(a, b, (x, y));
                let d2 = edge(b, c, (x, y));
                let d3 = edge(c, a, (x, y));
                let has_negative = d1 < 0 || d2 < 0 || d3 < 0;
                let has_positive = d1 > 0 || d2 > 0 || d3 > 0;
                if !(has_negative && has_positive) {
                    self.put(x, y, color);
                }
            }
        }
    }
}

fn ellipse_geometry(x0: i32, y0: i32, x1: i32, y1: i32) -> (f64, f64, f64, f64) {
    let (left, right) = (x0.min(x1) as f64, x0.max(x1) as f64);
    let (top, bottom) = (y0.min(y1) as f64, y0.max(y1) as f64);
    let rx = (right - left + 1.0) / 2.0;
    let ry = (bottom - top + 1.0) / 2.0;
    (left + rx, top + ry, rx, ry)
}

fn inside_ellipse(x: i32, y: i32, cx: f64, cy: f64, rx: f64, ry: f64) -> bool {
    // Sample the pixel centre
    let dx = (x as f64 + 0.5 - cx) / rx;
    let dy = (y as f64 + 0.5 - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

fn edge(a: (i32, i32), b: (i32, i32), p: (i32, i32)) -> i64 {
    (p.0 - b.0) as i64 * (a.1 - b.1) as i64 - (a.0 - b.0) as i64 * (p.1 - b.1) as i64
}

/// Draw the WinUpdate logo: a blue sphere with the four-pane window mark and
/// a gold refresh arrow.
pub fn draw_logo(size: u32) -> Result<RgbaImage, AssetError> {
    if !(32..=4096).contains(&size) {
        return Err(AssetError::InvalidSize(format!(
            "logo size must be between 32 and 4096 pixels, got {}",
            size
        )));
    }

    let s = size as i32;
    let mut canvas = Canvas::new(size, size);

    let center = s / 2;
    let radius = (size as f64 * 0.47) as i32;

    canvas.fill_ellipse(center - radius, center - radius, center + radius, center + radius, SPHERE_BLUE);

    let inner_r = (radius as f64 * 0.7) as i32;
    canvas.fill_ellipse(
        center - inner_r,
        center - inner_r - 10,
        center + inner_r,
        center + inner_r - 10,
        HIGHLIGHT_BLUE,
    );

    canvas.stroke_ellipse(center - radius, center - radius, center + radius, center + radius, 2, SPHERE_BORDER);

    // Window panes, slightly offset to suggest curvature
    let sq = (size as f64 * 0.18) as i32;
    let spacing = (size as f64 * 0.02) as i32;
    let base_x = center - sq - spacing / 2 - 6;
    let base_y = center - sq - spacing / 2 - 5;

    canvas.fill_rect(base_x, base_y, base_x + sq, base_y + sq, SPHERE_BLUE);
    canvas.fill_rect(base_x + sq + spacing, base_y - 2, base_x + sq * 2 + spacing, base_y + sq - 2, SPHERE_BLUE);
    canvas.fill_rect(base_x + 2, base_y + sq + spacing, base_x + sq + 2, base_y + sq * 2 + spacing, SPHERE_BLUE);
    canvas.fill_rect(
        base_x + sq + spacing + 2,
        base_y + sq + spacing - 2,
        base_x + sq * 2 + spacing + 2,
        base_y + sq * 2 + spacing - 2,
        SPHERE_BLUE,
    );

    // Arrow body: a sine wave of dots
    let arrow_y = (size as f64 * 0.7) as i32;
    for i in -20..=20 {
        let x = center + i;
        let y = arrow_y + (8.0 * (i as f64 * 0.15).sin()) as i32;
        if (0..s).contains(&x) && (0..s).contains(&y) {
            canvas.fill_ellipse(x - 2, y - 2, x + 2, y + 2, ARROW_GOLD);
        }
    }

    // Arrowhead pointing left
    let arrow_x = (size as f64 * 0.3) as i32;
    canvas.fill_triangle(
        [(arrow_x - 6, arrow_y), (arrow_x + 2, arrow_y - 6), (arrow_x + 2, arrow_y + 6)],
        ARROW_GOLD,
    );

    Ok(canvas.into_image())
}

/// Draw the logo and save it as PNG.
pub fn create_logo_png<P: AsRef<Path>>(path: P, size: u32) -> Result<(), AssetError> {
    let path = path.as_ref();
    let logo = draw_logo(size)?;
    logo.save_with_format(path, ImageFormat::Png)?;
    info!(
        "Created {}: ({}, {}), mode: RGBA",
        path.display(),
        logo.width(),
        logo.height()
    );
    Ok(())
}

/// Surround an image with a wooden frame of `frame_width` pixels.
///
/// The frame has horizontal grain: every even row is repainted, lighter on
/// rows divisible by four and darker otherwise.
pub fn add_wooden_frame(source: &RgbImage, frame_width: u32) -> RgbImage {
    let width = source.width() + 2 * frame_width;
    let height = source.height() + 2 * frame_width;
    let mut framed = RgbImage::from_pixel(width, height, WOOD);

    for y in (0..height).step_by(2) {
        let grain = if y % 4 == 0 { WOOD_LIGHT } else { WOOD_DARK };
        for x in 0..width {
            framed.put_pixel(x, y, grain);
        }
    }

    image::imageops::replace(&mut framed, source, frame_width as i64, frame_width as i64);
    framed
}

/// Load an image, frame it and save it as BMP.
pub fn frame_logo<P1: AsRef<Path>, P2: AsRef<Path>>(
    input: P1,
    output: P2,
    frame_width: u32,
) -> Result<(), AssetError> {
    let output = output.as_ref();
    let source = image::open(input.as_ref())?.to_rgb8();
    let framed = add_wooden_frame(&source, frame_width);
    framed.save_with_format(output, ImageFormat::Bmp)?;
    info!(
        "Image updated: ({}, {}), mode: RGB, wooden frame added",
        framed.width(),
        framed.height()
    );
    Ok(())
}
