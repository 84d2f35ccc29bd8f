//! Parsing of interactive menu selections.

use crate::download::Download;

/// A top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Download the current release from the portal file listing.
    DownloadCurrent,
    /// Pick a historical release from the catalog and download it.
    DownloadHistorical,
    /// Inspect a release's file listing without downloading.
    InspectRelease,
}

/// Parse a top-level menu selection.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::DownloadCurrent),
        "2" => Some(MenuChoice::DownloadHistorical),
        "3" => Some(MenuChoice::InspectRelease),
        _ => None,
    }
}

/// Parse a 1-based release selection against the number of listed releases.
///
/// Returns the 0-based index into the listing.
pub fn parse_release_index(input: &str, available: usize) -> Result<usize, String> {
    let selection: usize = input
        .trim()
        .parse()
        .map_err(|_| String::from("please enter a valid number"))?;
    if selection == 0 || selection > available {
        return Err(format!("selection must be between 1 and {}", available));
    }
    Ok(selection - 1)
}

/// Parse an optional cap on the number of files to download.
///
/// Blank input means no cap.
pub fn parse_file_limit(input: &str) -> Result<Option<usize>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| String::from("please enter a valid number"))
}

/// Apply an optional cap to a file list, keeping catalog order.
pub fn apply_limit(mut files: Vec<Download>, limit: Option<usize>) -> Vec<Download> {
    if let Some(limit) = limit {
        files.truncate(limit);
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::DownloadCurrent));
        assert_eq!(parse_choice(" 2 "), Some(MenuChoice::DownloadHistorical));
        assert_eq!(parse_choice("3\n"), Some(MenuChoice::InspectRelease));
        assert_eq!(parse_choice("4"), None);
        assert_eq!(parse_choice("two"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_parse_release_index() {
        assert_eq!(parse_release_index("1", 3), Ok(0));
        assert_eq!(parse_release_index(" 3 ", 3), Ok(2));
        assert!(parse_release_index("0", 3).is_err());
        assert!(parse_release_index("4", 3).is_err());
        assert!(parse_release_index("abc", 3).is_err());
    }

    #[test]
    fn test_parse_file_limit() {
        assert_eq!(parse_file_limit(""), Ok(None));
        assert_eq!(parse_file_limit("  "), Ok(None));
        assert_eq!(parse_file_limit("5"), Ok(Some(5)));
        assert!(parse_file_limit("lots").is_err());
    }

    #[test]
    fn test_apply_limit() {
        let files: Vec<Download> = (0..4)
            .map(|i| Download::new("http://example.com/f", &format!("f{i}"), 0))
            .collect();

        assert_eq!(apply_limit(files.clone(), None).len(), 4);
        assert_eq!(apply_limit(files.clone(), Some(10)).len(), 4);
        let capped = apply_limit(files, Some(2));
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].filename, "f0");
    }
}
