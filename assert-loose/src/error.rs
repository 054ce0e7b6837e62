use std::error::Error;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A failed loose-equality check.
///
/// Carries both sides formatted as text. The `Display` form is the wire
/// contract surfaced to whatever harness runs the check:
///
/// ```text
/// error: 16777216 != 121393
/// ```
///
/// There is no recovery path attached to a `Mismatch`; callers propagate it
/// with `?` or let the run fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    expect: String,
    actual: String,
}

impl Mismatch {
    pub fn new(expect: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Mismatch {
            expect: expect.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Textual form of the expected value.
    pub fn expect(&self) -> &str {
        &self.expect
    }

    /// Textual form of the value that was produced instead.
    pub fn actual(&self) -> &str {
        &self.actual
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} != {}", self.expect, self.actual)
    }
}

impl Error for Mismatch {}

/// A [`Mismatch`] enriched with the assertion's source context.
///
/// Built by the `assert_loose!` expansion; its `Display` form is the panic
/// message. The mismatch line appears verbatim inside the report, followed
/// by the invocation's location and one line per operand pairing the source
/// spelling with the value it produced.
#[derive(Debug)]
pub struct MismatchReport {
    manifest_dir: &'static str,
    file: &'static str,
    line: u32,
    expect_src: &'static str,
    actual_src: &'static str,
    mismatch: Mismatch,
}

impl MismatchReport {
    pub fn new(
        manifest_dir: &'static str,
        file: &'static str,
        line: u32,
        expect_src: &'static str,
        actual_src: &'static str,
        expect: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        MismatchReport {
            manifest_dir,
            file,
            line,
            expect_src,
            actual_src,
            mismatch: Mismatch::new(expect, actual),
        }
    }

    /// The underlying mismatch, without source context.
    pub fn mismatch(&self) -> &Mismatch {
        &self.mismatch
    }

    /// Line of the `assert_loose!` invocation.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Absolute path to the file containing the failed assertion.
    ///
    /// `file!()` is relative to the workspace root while the manifest dir is
    /// absolute. When the relative path re-enters the package directory the
    /// manifest dir names, resolve against the workspace root; otherwise the
    /// package is the root and a plain join is correct.
    pub fn source_path(&self) -> PathBuf {
        let file = Path::new(self.file);
        if file.is_absolute() {
            return file.to_path_buf();
        }
        let manifest = Path::new(self.manifest_dir);
        match (manifest.file_name(), file.components().next()) {
            (Some(package), Some(Component::Normal(first))) if package == first => {
                manifest.parent().unwrap_or(manifest).join(file)
            }
            _ => manifest.join(file),
        }
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "assert_loose! failed:")?;
        writeln!(f)?;
        writeln!(f, "{}", self.mismatch)?;
        writeln!(
            f,
            "  --> `assert_loose!({}, {})` ({}:{})",
            self.expect_src, self.actual_src, self.file, self.line
        )?;
        writeln!(
            f,
            "  expect: `{}` = {}",
            self.expect_src,
            self.mismatch.expect()
        )?;
        write!(
            f,
            "  actual: `{}` = {}",
            self.actual_src,
            self.mismatch.actual()
        )
    }
}

impl Error for MismatchReport {}
