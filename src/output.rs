//! Printing and publishing the finished changelog.

use std::io::{self, Write};

use tracing::warn;

use crate::input::TextBuffer;

/// Header printed above the changelog.
pub const HEADER: &str = "CHANGELOG:";

/// Print the changelog under a header.
pub fn print_changelog<W: Write>(changelog: &str, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", HEADER)?;
    writeln!(out, "{}", changelog)?;
    out.flush()
}

/// Print the changelog and copy it to `buffer` when one is given.
///
/// A failed copy is logged and otherwise ignored.
pub fn publish<W: Write>(
    changelog: &str,
    buffer: Option<&mut dyn TextBuffer>,
    out: &mut W,
) -> io::Result<()> {
    print_changelog(changelog, out)?;

    if let Some(buffer) = buffer {
        if let Err(e) = buffer.write_text(changelog) {
            warn!("Could not copy changelog to clipboard: {}", e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;
    use crate::input::MockTextBuffer;

    #[test]
    fn test_print_changelog_layout() {
        let mut out = Vec::new();
        print_changelog("  1. A\n  2. B", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nCHANGELOG:\n  1. A\n  2. B\n"
        );
    }

    #[test]
    fn test_publish_copies_text() {
        let mut buffer = MockTextBuffer::new();
        buffer
            .expect_write_text()
            .times(1)
            .returning(|text| {
                assert_eq!(text, "  1. A");
                Ok(())
            });

        let mut out = Vec::new();
        publish("  1. A", Some(&mut buffer), &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("  1. A"));
    }

    #[test]
    fn test_publish_ignores_copy_failure() {
        let mut buffer = MockTextBuffer::new();
        buffer
            .expect_write_text()
            .times(1)
            .returning(|_| Err(ClipboardError::WriteFailed("no display".to_string())));

        let mut out = Vec::new();
        let result = publish("  1. A", Some(&mut buffer), &mut out);

        assert!(result.is_ok());
    }

    #[test]
    fn test_publish_without_buffer_only_prints() {
        let mut out = Vec::new();
        publish("", None, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nCHANGELOG:\n\n");
    }
}
