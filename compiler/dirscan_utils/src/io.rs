//! Opening the inputs to scan and the output to report to
//!
//! Both directions understand `-` as the standard stream, so the scanner can
//! sit at the end of a pipeline.

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

/// The name shown in reports for input read from standard input
pub const STDIN_NAME: &str = "<stdin>";

/// Opens the input file and returns its display name and a reader
///
/// If the path is "-", it reads from standard input. Otherwise the file is
/// opened for reading and named by the path exactly as it was given, so
/// reports line up with what the user typed.
///
/// # Errors
///
/// If the file cannot be opened, an error is returned.
pub fn open_input(path: &Path) -> Result<(String, Box<dyn Read>), io::Error> {
    if path.as_os_str() == "-" {
        Ok((STDIN_NAME.to_string(), Box::new(io::stdin())))
    } else {
        let file = fs::File::open(path)?;
        Ok((path.display().to_string(), Box::new(file)))
    }
}

/// Opens the input and reads it to the end
///
/// The reader is dropped (and the file closed) before this returns, on the
/// error path as well.
///
/// # Errors
///
/// If the file cannot be opened or read, an error is returned.
pub fn read_input(path: &Path) -> Result<(String, Vec<u8>), io::Error> {
    let (name, mut reader) = open_input(path)?;
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    Ok((name, content))
}

/// Opens the output file and returns a writer
///
/// If the path is "-", it writes to standard output.
/// If the path is a regular file, it opens (or creates) the file for writing,
/// truncating it if it already exists.
///
/// # Errors
///
/// If the file cannot be opened or created, an error is returned.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>, io::Error> {
    Ok(if path.as_os_str() == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)?,
        )
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn open_input_reads_from_stdin_for_dash() {
        let (name, _reader) = open_input(Path::new("-")).expect("should succeed");
        assert_eq!(name, STDIN_NAME);
    }

    #[test]
    fn read_input_reads_whole_file() {
        let temp_file = std::env::temp_dir().join("dirscan_test_input.h");
        fs::write(&temp_file, b"#define A 1\n").expect("should write test file");

        let (name, content) = read_input(&temp_file).expect("should succeed");
        assert_eq!(name, temp_file.display().to_string());
        assert_eq!(content, b"#define A 1\n");

        fs::remove_file(&temp_file).expect("should cleanup test file");
    }

    #[test]
    fn open_input_fails_for_missing_file() {
        let path = PathBuf::from("/nonexistent/path/to/file.h");
        assert!(open_input(&path).is_err());
    }

    #[test]
    fn open_output_creates_and_truncates_file() {
        let temp_file = std::env::temp_dir().join("dirscan_test_output.txt");
        fs::write(&temp_file, "stale contents that are longer").expect("should seed file");

        {
            let mut writer = open_output(&temp_file).expect("should succeed");
            writer.write_all(b"fresh").expect("should write");
        }

        assert_eq!(fs::read_to_string(&temp_file).expect("should read"), "fresh");
        fs::remove_file(&temp_file).expect("should cleanup test file");
    }
}
