use crate::record::VariantRecord;

/// A called nucleotide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    T,
    C,
    G,
}

/// One entry of an allele sequence: a called base or missing data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Allele {
    Base(Base),
    NoData,
}

impl Allele {
    /// Map a genotype letter to an allele. No-call (`-`), indel (`D`/`I`)
    /// and any other letter become `NoData`.
    pub fn from_char(letter: char) -> Self {
        match letter {
            'A' => Allele::Base(Base::A),
            'T' => Allele::Base(Base::T),
            'C' => Allele::Base(Base::C),
            'G' => Allele::Base(Base::G),
            _ => Allele::NoData,
        }
    }
}

/// Which half of a diploid genotype call to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Extract one allele side of a chromosome, in file order.
///
/// Hemizygous calls (a single genotype letter) have no right side and yield
/// `Allele::NoData` there. Returns an empty sequence when nothing matches.
pub fn extract<'a, I>(records: I, chromosome: &str, side: Side) -> Vec<Allele>
where
    I: IntoIterator<Item = &'a VariantRecord>,
{
    records
        .into_iter()
        .filter(|record| record.chromosome == chromosome)
        .map(|record| {
            record
                .genotype
                .chars()
                .nth(side.index())
                .map_or(Allele::NoData, Allele::from_char)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(marker_id: &str, chromosome: &str, genotype: &str) -> VariantRecord {
        VariantRecord {
            marker_id: marker_id.to_string(),
            chromosome: chromosome.to_string(),
            position: 0,
            genotype: genotype.to_string(),
        }
    }

    #[test]
    fn test_extract_both_sides_in_file_order() {
        let records = vec![
            record("rs1", "1", "AT"),
            record("rs2", "2", "CC"),
            record("rs3", "1", "GC"),
        ];

        assert_eq!(
            extract(&records, "1", Side::Left),
            vec![Allele::Base(Base::A), Allele::Base(Base::G)]
        );
        assert_eq!(
            extract(&records, "1", Side::Right),
            vec![Allele::Base(Base::T), Allele::Base(Base::C)]
        );
    }

    #[test]
    fn test_hemizygous_right_side_is_no_data() {
        let records = vec![record("rs1", "X", "A")];

        assert_eq!(extract(&records, "X", Side::Left), vec![Allele::Base(Base::A)]);
        assert_eq!(extract(&records, "X", Side::Right), vec![Allele::NoData]);
    }

    #[test]
    fn test_no_calls_and_indels_are_no_data() {
        let records = vec![record("rs1", "1", "--"), record("i1", "1", "DI")];

        assert_eq!(
            extract(&records, "1", Side::Left),
            vec![Allele::NoData, Allele::NoData]
        );
    }

    #[test]
    fn test_unknown_chromosome_is_empty() {
        let records = vec![record("rs1", "1", "AT")];
        assert!(extract(&records, "MT", Side::Left).is_empty());
    }
}
