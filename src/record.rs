use anyhow::{bail, Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One genotyped marker from a raw genotype dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    pub marker_id: String,
    pub chromosome: String,
    pub position: u64,
    /// One or two base letters; a single letter means the right side has no call
    pub genotype: String,
}

/// Parse tab-separated genotype lines: marker id, chromosome, position, genotype.
///
/// Lines starting with `#` and blank lines are skipped. Any other line must
/// carry exactly four fields, otherwise the whole parse fails with the
/// offending line number.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<VariantRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != 4 {
            bail!(
                "Malformed line {}: expected 4 tab-separated fields, found {}",
                line_no,
                parts.len()
            );
        }

        let position: u64 = parts[2]
            .parse()
            .with_context(|| format!("Invalid position '{}' on line {}", parts[2], line_no))?;

        let genotype = parts[3];
        let n_letters = genotype.chars().count();
        if !(1..=2).contains(&n_letters) {
            bail!(
                "Invalid genotype '{}' on line {}: expected 1 or 2 letters",
                genotype,
                line_no
            );
        }

        records.push(VariantRecord {
            marker_id: parts[0].to_string(),
            chromosome: parts[1].to_string(),
            position,
            genotype: genotype.to_string(),
        });
    }

    Ok(records)
}

/// Load every record from a genotype file on disk
pub fn load_records(path: &Path) -> Result<Vec<VariantRecord>> {
    info!("Loading genotype file {:?}...", path);

    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let records = parse_records(BufReader::new(file))
        .with_context(|| format!("Failed to parse {:?}", path))?;

    info!("Found {} markers", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let input = "# rsid\tchromosome\tposition\tgenotype\n\
                     rs548049170\t1\t69869\tTT\n\
                     \n\
                     rs9283150\t1\t565508\tA\r\n";
        let records = parse_records(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            VariantRecord {
                marker_id: "rs548049170".to_string(),
                chromosome: "1".to_string(),
                position: 69869,
                genotype: "TT".to_string(),
            }
        );
        assert_eq!(records[1].genotype, "A");
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let input = "rs1\t1\t100\tAT\nrs2\t1\t200\n";
        let err = parse_records(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");
    }

    #[test]
    fn test_parse_rejects_bad_position() {
        let err = parse_records(Cursor::new("rs1\t1\tabc\tAT\n")).unwrap_err();
        assert!(err.to_string().contains("Invalid position"), "got: {err}");
    }

    #[test]
    fn test_parse_rejects_bad_genotype_length() {
        assert!(parse_records(Cursor::new("rs1\t1\t100\t\n")).is_err());
        assert!(parse_records(Cursor::new("rs1\t1\t100\tATC\n")).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_records(Path::new("/nonexistent/genome.txt")).is_err());
    }
}
