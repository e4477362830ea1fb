//! Pixel layout: square rasterization of allele sequences, per-chromosome
//! panels and vertical stacking of panels into one composite image.

use crate::allele::{extract, Allele, Side};
use crate::color::color_of;
use crate::record::VariantRecord;
use image::{imageops, RgbImage};

/// Smallest side length whose square holds `n` cells (`ceil(sqrt(n))`).
/// Saturates at `u32::MAX`, the largest image side.
pub fn square_side(n: usize) -> u32 {
    let n = n as u128;
    let mut side = (n as f64).sqrt() as u128;
    // Float sqrt can be off by one for large n
    while side * side < n {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= n {
        side -= 1;
    }
    u32::try_from(side).unwrap_or(u32::MAX)
}

/// Pack a sequence row-major into the smallest square grid.
/// Cells past the end of the sequence stay black; an empty sequence gives a 0x0 grid.
pub fn rasterize(sequence: &[Allele]) -> RgbImage {
    let side = square_side(sequence.len());
    let mut grid = RgbImage::new(side, side);

    if side == 0 {
        return grid;
    }

    let width = u64::from(side);
    for (i, allele) in (0u64..).zip(sequence) {
        let (Ok(x), Ok(y)) = (u32::try_from(i % width), u32::try_from(i / width)) else {
            break;
        };
        // Only past a saturated side: the grid is full
        if y >= side {
            break;
        }
        grid.put_pixel(x, y, color_of(*allele));
    }

    grid
}

/// Lay out `left | separator | right`.
///
/// The separator is a single black column. When the two halves differ in
/// height the shorter one is padded with black rows at the bottom. Two
/// empty halves give a 0x0 panel.
pub fn join_halves(left: &RgbImage, right: &RgbImage) -> RgbImage {
    let is_empty = |img: &RgbImage| img.width() == 0 || img.height() == 0;
    if is_empty(left) && is_empty(right) {
        return RgbImage::new(0, 0);
    }

    let height = left.height().max(right.height());
    let width = left.width() + 1 + right.width();
    let mut panel = RgbImage::new(width, height);

    imageops::replace(&mut panel, left, 0, 0);
    imageops::replace(&mut panel, right, i64::from(left.width()) + 1, 0);

    panel
}

/// Build the image panel of one chromosome from its left and right alleles
pub fn build_panel<'a, I>(records: I, chromosome: &str) -> RgbImage
where
    I: IntoIterator<Item = &'a VariantRecord> + Clone,
{
    let left = rasterize(&extract(records.clone(), chromosome, Side::Left));
    let right = rasterize(&extract(records, chromosome, Side::Right));
    join_halves(&left, &right)
}

/// Place `bottom` under `top`, left-aligned, padding the narrower one with black
pub fn stack(top: &RgbImage, bottom: &RgbImage) -> RgbImage {
    let height = top.height() + bottom.height();
    let width = top.width().max(bottom.width());
    let mut combined = RgbImage::new(width, height);

    imageops::replace(&mut combined, top, 0, 0);
    imageops::replace(&mut combined, bottom, 0, i64::from(top.height()));

    combined
}
