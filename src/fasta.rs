use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use bio::io::fasta;
use log::debug;

use crate::{Error, Result, Sequence};

/// Reads the first record of a FASTA file. Blank lines before the first
/// header are skipped, multi-line sequences are joined and any further
/// records are ignored. A file with no records is an error.
pub fn read_first_record(path: &Path) -> Result<Sequence> {
    let fasta_error = |source| Error::Fasta {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(fasta_error)?);
    skip_blank_lines(&mut reader).map_err(fasta_error)?;
    let record = fasta::Reader::new(reader)
        .records()
        .next()
        .ok_or_else(|| Error::EmptyInput(path.to_path_buf()))?
        .map_err(fasta_error)?;

    debug!(
        "read record '{}' ({} bp) from {}",
        record.id(),
        record.seq().len(),
        path.display()
    );
    let header = match record.desc() {
        Some(desc) => format!("{} {}", record.id(), desc),
        None => record.id().to_owned(),
    };
    Sequence::with_header(header, record.seq())
}

/// Consumes whitespace-only lines so the reader starts at the first header.
fn skip_blank_lines<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let skip = {
            let buf = reader.fill_buf()?;
            let line_end = buf.iter().position(|&b| b == b'\n');
            let line = &buf[..line_end.unwrap_or(buf.len())];
            if buf.is_empty() || !line.iter().all(u8::is_ascii_whitespace) {
                return Ok(());
            }
            line_end.map_or(buf.len(), |end| end + 1)
        };
        reader.consume(skip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Nucleotide;
    use std::io::Write;

    fn fasta_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_first_record_only() {
        let file = fasta_file(">read1 rolling circle\nACGT\nAC\n>read2\nTTTT\n");
        let seq = read_first_record(file.path()).unwrap();
        assert_eq!(seq.header(), "read1 rolling circle");
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.as_slice()[5], Nucleotide::C);
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let file = fasta_file("\n  \r\n\n>x\nACGT\n");
        let seq = read_first_record(file.path()).unwrap();
        assert_eq!(seq.header(), "x");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_blank_only_file_has_no_records() {
        let file = fasta_file("\n\n");
        assert!(matches!(
            read_first_record(file.path()),
            Err(Error::EmptyInput(_))
        ));
    }

    #[test]
    fn test_skip_blank_lines_stops_at_header() {
        let mut reader = io::Cursor::new(b"\n\n>h\nAC\n".to_vec());
        skip_blank_lines(&mut reader).unwrap();
        let mut rest = String::new();
        io::Read::read_to_string(&mut reader, &mut rest).unwrap();
        assert_eq!(rest, ">h\nAC\n");
    }

    #[test]
    fn test_empty_file() {
        let file = fasta_file("");
        assert!(matches!(
            read_first_record(file.path()),
            Err(Error::EmptyInput(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.fa");
        assert!(matches!(
            read_first_record(&missing),
            Err(Error::Fasta { .. })
        ));
    }

    #[test]
    fn test_headerless_file() {
        let file = fasta_file("ACGT\n");
        assert!(matches!(
            read_first_record(file.path()),
            Err(Error::Fasta { .. })
        ));
    }

    #[test]
    fn test_invalid_symbol() {
        let file = fasta_file(">x\nACGU\n");
        assert!(matches!(
            read_first_record(file.path()),
            Err(Error::InvalidSymbol { symbol: 'U', position: 3 })
        ));
    }
}
