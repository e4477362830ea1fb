//! Render a raw genotype dump as a single image: every called base becomes a
//! colored pixel, chromosomes are drawn as panels stacked top to bottom, and
//! each panel shows the left and right allele of every marker side by side.

pub mod allele;
pub mod color;
pub mod pipeline;
pub mod raster;
pub mod record;

pub use allele::{extract, Allele, Base, Side};
pub use color::color_of;
pub use pipeline::{encode_png, image_digest, render_genome, CHROMOSOME_ORDER};
pub use raster::{build_panel, rasterize, stack};
pub use record::{load_records, parse_records, VariantRecord};
