use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Refuse to clobber an existing export unless `force` or the user agrees
/// on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    confirm_overwrite(io::stdin().lock())
}

/// Read one answer line; only `y`/`yes` (any case) accepts. EOF declines.
fn confirm_overwrite<R: BufRead>(mut input: R) -> AppResult<()> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_accepts_yes() {
        assert!(confirm_overwrite("YES\n".as_bytes()).is_ok());
        assert!(confirm_overwrite(" y \n".as_bytes()).is_ok());
    }

    #[test]
    fn test_confirm_declines_by_default() {
        assert!(matches!(
            confirm_overwrite("\n".as_bytes()),
            Err(AppError::Export(_))
        ));
        assert!(confirm_overwrite("".as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_needs_no_prompt() {
        let path = std::env::temp_dir().join("paytrack_fs_utils_missing.csv");
        std::fs::remove_file(&path).ok();
        assert!(ensure_writable(&path, false).is_ok());
    }
}
