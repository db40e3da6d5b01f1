//! PNG rendering of lozenge tilings
//!
//! Lozenges are mapped from the (a, c)-plane to the rectangular plane, scaled
//! so the hexagon fits the image with a margin, and filled per pixel with an
//! outline. Pixels outside the hexagon stay transparent.

use crate::io::configuration::{
    DEFAULT_IMAGE_SIZE, EDGE_COLOR, EDGE_WIDTH, IMAGE_MARGIN, LEFT_COLOR, RIGHT_COLOR, TOP_COLOR,
};
use crate::io::error::{Result, SamplerError, invalid_parameter};
use crate::math::geometry::{convex_contains, oblique_to_rect, segment_distance};
use crate::spatial::hexagon::HexagonSize;
use crate::spatial::tiles::{LozengeKind, TileSet};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Colours and dimensions of a rendered tiling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Width and height of the square image in pixels
    pub image_size: u32,
    /// Fill colour of left lozenges
    pub left: [u8; 4],
    /// Fill colour of right lozenges
    pub right: [u8; 4],
    /// Fill colour of top lozenges
    pub top: [u8; 4],
    /// Outline colour
    pub edge: [u8; 4],
    /// Outline width in lattice units
    pub edge_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            left: LEFT_COLOR,
            right: RIGHT_COLOR,
            top: TOP_COLOR,
            edge: EDGE_COLOR,
            edge_width: EDGE_WIDTH,
        }
    }
}

impl RenderStyle {
    /// Fill colour for a lozenge orientation
    pub const fn fill(&self, kind: LozengeKind) -> [u8; 4] {
        match kind {
            LozengeKind::Left => self.left,
            LozengeKind::Right => self.right,
            LozengeKind::Top => self.top,
        }
    }
}

/// Maps rectangular-plane points to pixel coordinates
struct Viewport {
    center: [f64; 2],
    half_extent: f64,
    scale: f64,
}

impl Viewport {
    fn fit(size: HexagonSize, image_size: u32) -> Self {
        let corners = size.outline().map(oblique_to_rect);
        let (mut min, mut max) = ([f64::MAX; 2], [f64::MIN; 2]);
        for [x, y] in corners {
            min = [min[0].min(x), min[1].min(y)];
            max = [max[0].max(x), max[1].max(y)];
        }
        let span = (max[0] - min[0]).max(max[1] - min[1]) + 2.0 * IMAGE_MARGIN;
        let half_extent = f64::from(image_size) * 0.5;
        Self {
            center: [(min[0] + max[0]) * 0.5, (min[1] + max[1]) * 0.5],
            half_extent,
            scale: f64::from(image_size) / span,
        }
    }

    fn to_pixel(&self, [x, y]: [f64; 2]) -> [f64; 2] {
        [
            (x - self.center[0]).mul_add(self.scale, self.half_extent),
            (y - self.center[1]).mul_add(-self.scale, self.half_extent),
        ]
    }
}

/// Rasterise a tiling into an RGBA image
///
/// # Errors
///
/// Returns `InvalidParameter` if the image size is zero
pub fn render_tiling(tiles: &TileSet, size: HexagonSize, style: &RenderStyle) -> Result<RgbaImage> {
    if style.image_size == 0 {
        return Err(invalid_parameter(
            "image_size",
            &style.image_size,
            &"image must be at least one pixel wide",
        ));
    }

    let viewport = Viewport::fit(size, style.image_size);
    let edge_pixels = style.edge_width * viewport.scale * 0.5;
    let limit = f64::from(style.image_size - 1);
    let mut img = RgbaImage::new(style.image_size, style.image_size);

    for lozenge in tiles.iter() {
        let corners = lozenge
            .vertices
            .map(|vertex| viewport.to_pixel(oblique_to_rect(vertex)));
        let fill = Rgba(style.fill(lozenge.kind));
        let edge = Rgba(style.edge);

        let (mut min, mut max) = ([f64::MAX; 2], [f64::MIN; 2]);
        for [x, y] in corners {
            min = [min[0].min(x), min[1].min(y)];
            max = [max[0].max(x), max[1].max(y)];
        }
        let x_range = min[0].floor().clamp(0.0, limit) as u32..=max[0].ceil().clamp(0.0, limit) as u32;
        let y_range = min[1].floor().clamp(0.0, limit) as u32..=max[1].ceil().clamp(0.0, limit) as u32;

        for py in y_range {
            for px in x_range.clone() {
                let point = [f64::from(px) + 0.5, f64::from(py) + 0.5];
                if !convex_contains(&corners, point) {
                    continue;
                }
                let on_edge = corners
                    .iter()
                    .zip(corners.iter().cycle().skip(1))
                    .any(|(&start, &end)| segment_distance(point, start, end) <= edge_pixels);
                img.put_pixel(px, py, if on_edge { edge } else { fill });
            }
        }
    }

    Ok(img)
}

/// Render a tiling and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The image size is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tiling_as_png(
    tiles: &TileSet,
    size: HexagonSize,
    style: &RenderStyle,
    output_path: &Path,
) -> Result<()> {
    let img = render_tiling(tiles, size, style)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SamplerError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| SamplerError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
