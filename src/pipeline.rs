//! Whole-genome rendering: one panel per chromosome in a fixed order,
//! stacked top to bottom, then encoded as PNG.

use crate::raster::{build_panel, stack};
use crate::record::VariantRecord;
use anyhow::{bail, Context, Result};
use image::{ImageFormat, RgbImage};
use log::{debug, info, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::Path;
use std::process::Command;

/// Top-to-bottom panel order of the composite image
pub const CHROMOSOME_ORDER: [&str; 25] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "X", "Y", "MT",
];

/// Group records by chromosome, keeping file order within each group
fn group_by_chromosome(records: &[VariantRecord]) -> FxHashMap<&str, Vec<&VariantRecord>> {
    let mut groups: FxHashMap<&str, Vec<&VariantRecord>> = FxHashMap::default();
    for record in records {
        groups.entry(record.chromosome.as_str()).or_default().push(record);
    }
    groups
}

fn warn_unlisted(groups: &FxHashMap<&str, Vec<&VariantRecord>>, order: &[&str]) {
    let listed: FxHashSet<&str> = order.iter().copied().collect();
    let mut unlisted: Vec<&str> = groups
        .keys()
        .copied()
        .filter(|name| !listed.contains(name))
        .collect();
    if unlisted.is_empty() {
        return;
    }
    unlisted.sort_unstable();

    let skipped: usize = unlisted.iter().map(|name| groups[name].len()).sum();
    warn!(
        "Skipping {} markers on unlisted chromosomes: {}",
        skipped,
        unlisted.join(", ")
    );
}

/// Render every chromosome in `order` into one composite image.
///
/// The first chromosome's panel seeds the image and each following panel is
/// stacked underneath it. Chromosomes without records add nothing.
pub fn render_genome(records: &[VariantRecord], order: &[&str]) -> RgbImage {
    let groups = group_by_chromosome(records);
    warn_unlisted(&groups, order);

    let no_records = Vec::new();
    let mut composite: Option<RgbImage> = None;

    for name in order {
        info!("Processing chromosome... {}", name);

        let group = groups.get(name).unwrap_or(&no_records);
        let panel = build_panel(group.iter().copied(), name);
        debug!(
            "Chromosome {}: {} markers, panel {}x{}",
            name,
            group.len(),
            panel.width(),
            panel.height()
        );

        composite = Some(match composite {
            None => panel,
            Some(image) => stack(&image, &panel),
        });
    }

    let composite = composite.unwrap_or_else(|| RgbImage::new(0, 0));
    debug!("Composite image: {}x{}", composite.width(), composite.height());
    composite
}

/// Encode the composite as an 8-bit RGB PNG
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    if image.width() == 0 || image.height() == 0 {
        bail!("No genotype data to render on the listed chromosomes");
    }

    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buffer.into_inner())
}

/// SHA-256 of the encoded image as lowercase hex
pub fn image_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

pub fn save_image(bytes: &[u8], path: &Path) -> Result<()> {
    info!("Saving to {:?}...", path);
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Image SHA-256: {}", image_digest(bytes));
    Ok(())
}

/// Open the saved image in the platform viewer. Never fails the run.
pub fn show_image(path: &Path) {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    // The viewer outlives this process; the child is not waited on
    match command.arg(path).spawn() {
        Ok(_) => debug!("Opened {:?} in the image viewer", path),
        Err(e) => warn!("Could not display {:?}: {}", path, e),
    }
}
