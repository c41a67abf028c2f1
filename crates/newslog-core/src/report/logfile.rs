use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Appends `lines` as one block. The first block in a new file starts
/// immediately; later blocks are preceded by a blank line.
pub fn append_to_log(path: &Path, lines: &[&str]) -> anyhow::Result<()> {
    let existed = path.exists();
    if !existed {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let mut block = String::new();
    if existed {
        block.push('\n');
    }
    block.push_str(&lines.join("\n"));
    block.push('\n');

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    file.write_all(block.as_bytes())
        .with_context(|| format!("failed to write log file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn first_block_has_no_leading_blank_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.log");

        append_to_log(&path, &["header"]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "header\n");
    }

    #[test]
    fn later_blocks_are_separated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.log");

        append_to_log(&path, &["header"]).unwrap();
        append_to_log(&path, &["Q", "", "a", "b"]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "header\n\nQ\n\na\nb\n"
        );
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs/nested/report.log");

        append_to_log(&path, &["x"]).unwrap();
        assert!(path.exists());
    }
}
