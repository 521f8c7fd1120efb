use chrono::NaiveDate;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// `bitacora-{project}-{YYYY-MM-DD}.pdf`, with every whitespace run in the project
/// name replaced by a single hyphen, including runs at either end. Case is left
/// alone.
pub fn suggest_filename(project_name: &str, today: NaiveDate) -> String {
    let mut project = String::with_capacity(project_name.len());
    let mut in_whitespace = false;
    for c in project_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                project.push('-');
            }
            in_whitespace = true;
        } else {
            project.push(c);
            in_whitespace = false;
        }
    }
    format!("bitacora-{}-{}.pdf", project, today.format("%Y-%m-%d"))
}

/// A finished report: the PDF bytes and the name they should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Hands a finished artifact to whatever stores or downloads it.
pub trait ArtifactSink {
    fn deliver(&self, artifact: &ReportArtifact) -> io::Result<()>;
}

/// Writes artifacts into a directory under their suggested filename.
///
/// The bytes go to a temporary file in the same directory first and are renamed
/// into place, so a reader never sees a half-written PDF.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, artifact: &ReportArtifact) -> PathBuf {
        self.dir.join(&artifact.filename)
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&self, artifact: &ReportArtifact) -> io::Result<()> {
        if artifact.filename.contains(['/', '\\']) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("artifact name '{}' contains a path separator", artifact.filename),
            ));
        }
        fs::create_dir_all(&self.dir)?;
        let mut file = tempfile::NamedTempFile::new_in(&self.dir)?;
        file.write_all(&artifact.bytes)?;
        file.flush()?;
        let path = self.path_for(artifact);
        file.persist(&path).map_err(|e| e.error)?;
        log::info!("Saved {} ({} bytes)", path.display(), artifact.bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn filename_joins_words_with_hyphens() {
        assert_eq!(
            suggest_filename("Torre Norte", date(2024, 6, 3)),
            "bitacora-Torre-Norte-2024-06-03.pdf"
        );
    }

    #[test]
    fn filename_collapses_whitespace_runs_and_keeps_case() {
        assert_eq!(
            suggest_filename("Edificio \t B\n Fase  2", date(2025, 1, 9)),
            "bitacora-Edificio-B-Fase-2-2025-01-09.pdf"
        );
        assert_eq!(
            suggest_filename("Plaza Río", date(2024, 12, 31)),
            "bitacora-Plaza-Río-2024-12-31.pdf"
        );
    }

    #[test]
    fn filename_keeps_runs_at_either_end() {
        assert_eq!(
            suggest_filename(" Torre Norte ", date(2024, 6, 3)),
            "bitacora--Torre-Norte--2024-06-03.pdf"
        );
        assert_eq!(
            suggest_filename("\t\tTorre  Norte\n", date(2024, 6, 3)),
            "bitacora--Torre-Norte--2024-06-03.pdf"
        );
    }
}
