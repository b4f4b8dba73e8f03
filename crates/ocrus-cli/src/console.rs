//! Console label source
//!
//! The interactive side of a training session. Each candidate is
//! "displayed" by writing three files into the work directory (the raw
//! crop, the canonical crop, and the annotated reference image, under
//! stable names so an image viewer can simply be refreshed), then one
//! line is read from stdin:
//!
//! - a whitelist character (case-insensitive) labels the candidate
//! - an empty line or any other character skips it
//! - `.` aborts the session

use ocrus_recog::{LabelReply, LabelRequest, LabelSource, RecogResult};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Stdin-driven [`LabelSource`] that shows candidates through files.
pub struct ConsoleLabelSource {
    workdir: PathBuf,
}

impl ConsoleLabelSource {
    /// Create a source writing its display files under `workdir`.
    pub fn new(workdir: PathBuf) -> std::io::Result<Self> {
        std::fs::create_dir_all(&workdir)?;
        Ok(Self { workdir })
    }

    fn show(&self, request: &LabelRequest<'_>) -> RecogResult<()> {
        let write = |pix, name: &str| {
            ocrus_io::write_image(pix, self.workdir.join(name))
                .map_err(|e| std::io::Error::other(e.to_string()))
        };
        write(request.crop, "candidate.png")?;
        write(request.canon, "candidate_canonical.png")?;
        write(request.display, "reference_annotated.png")?;
        Ok(())
    }
}

impl LabelSource for ConsoleLabelSource {
    fn request_label(&mut self, request: &LabelRequest<'_>) -> RecogResult<LabelReply> {
        self.show(request)?;

        let b = request.bounds;
        print!(
            "candidate {}/{} at ({}, {}) {}x{} [0-9A-Z labels, Enter skips, . aborts]: ",
            request.index + 1,
            request.total,
            b.x,
            b.y,
            b.w,
            b.h
        );
        std::io::stdout().flush().map_err(ocrus_recog::RecogError::Io)?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(ocrus_recog::RecogError::Io)?;

        let reply = match line.trim().chars().next() {
            Some('.') => LabelReply::Abort,
            Some(c) => LabelReply::Key(c.to_ascii_uppercase()),
            // Empty line: an out-of-whitelist key the session will skip
            None => LabelReply::Key(' '),
        };
        Ok(reply)
    }
}
