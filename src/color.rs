use crate::allele::{Allele, Base};
use image::Rgb;

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
/// Background, padding and missing data
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// A -> red, T -> green, C -> blue, G -> yellow, missing -> black
pub fn color_of(allele: Allele) -> Rgb<u8> {
    match allele {
        Allele::Base(Base::A) => RED,
        Allele::Base(Base::T) => GREEN,
        Allele::Base(Base::C) => BLUE,
        Allele::Base(Base::G) => YELLOW,
        Allele::NoData => BLACK,
    }
}
