use std::io::Write;

/// Write a rendered report to `writer` and flush it.
pub fn write_report<W: Write>(writer: &mut W, report: &str) -> Result<(), String> {
    writer
        .write_all(report.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| format!("Failed to write report: {e}"))
}

/// Write a rendered report to standard output.
pub fn print_report(report: &str) -> Result<(), String> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "pipe closed",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_report_copies_text_verbatim() {
        let mut out = Vec::new();
        write_report(&mut out, "line one\nline two\n").expect("write should succeed");
        assert_eq!(out, b"line one\nline two\n");
    }

    #[test]
    fn write_report_reports_io_errors() {
        let err = write_report(&mut FailingWriter, "text").expect_err("write should fail");
        assert!(err.contains("Failed to write report"));
        assert!(err.contains("pipe closed"));
    }
}
