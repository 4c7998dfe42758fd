//! `tour hash`: print the fingerprint of a file.

use std::path::Path;

use tour_common::Fingerprint;

/// Runs the `tour hash` command.
///
/// The output is the token a lesson would carry for this file in its
/// `hash` field, followed by the path.
pub fn run(file: &Path) -> Result<i32, Box<dyn std::error::Error>> {
    let fingerprint = fingerprint_file(file)?;
    println!("{fingerprint}  {}", file.display());
    Ok(0)
}

fn fingerprint_file(file: &Path) -> Result<Fingerprint, Box<dyn std::error::Error>> {
    let bytes =
        std::fs::read(file).map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    Ok(Fingerprint::from_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_matches_raw_bytes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("main.go");
        std::fs::write(&path, "package main").unwrap();
        let fingerprint = fingerprint_file(&path).unwrap();
        assert_eq!(fingerprint, Fingerprint::from_bytes(b"package main"));
        assert_eq!(
            fingerprint.to_token(),
            "UShDhV_MkqUcgQsbWOBzHAHqyaaiPBV7-gKq1x7f--c"
        );
    }

    #[test]
    fn missing_file_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = fingerprint_file(&tmp.path().join("nope.go")).unwrap_err();
        assert!(err.to_string().starts_with("cannot read"));
    }
}
