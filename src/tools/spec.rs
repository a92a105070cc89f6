//! Static description of one pinned tool.

/// Placeholder substituted with the target version in templates.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Substitute the target version into a template.
pub fn render(template: &str, version: &str) -> String {
    template.replace(VERSION_PLACEHOLDER, version)
}

/// One step that turns a downloaded artifact into an installed binary.
///
/// File names are relative to the work directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAction {
    /// `chmod +x <file>`
    MakeExecutable { file: &'static str },

    /// `gunzip -f <file>`, replacing `file` with its decompressed form.
    Decompress { file: &'static str },

    /// Privileged `install` of `source` to the tool's install path.
    Install {
        source: &'static str,
        owner: Option<&'static str>,
        mode: &'static str,
    },

    /// Execute the artifact itself (a vendor installer script).
    ///
    /// Values in `env` may contain the version placeholder.
    RunScript {
        env: &'static [(&'static str, &'static str)],
    },
}

/// A tool this program manages, pinned to one version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    /// Executable name, also used for PATH resolution.
    pub name: &'static str,

    /// Arguments that print the installed version, used for detection.
    pub version_args: &'static [&'static str],

    /// Arguments used by the final version summary.
    pub report_args: &'static [&'static str],

    /// Pinned version; matched as a substring of the detected version.
    pub target_version: &'static str,

    /// Download URL containing the version placeholder.
    pub url_template: &'static str,

    /// File name the download is saved as in the work directory.
    pub artifact: &'static str,

    /// Final location of the installed binary.
    pub install_path: &'static str,

    /// Other work-directory files the procedure may leave behind.
    pub leftovers: &'static [&'static str],

    /// Steps run after the download passes its integrity check.
    pub procedure: &'static [InstallAction],
}

impl ToolSpec {
    /// The download URL for the pinned version.
    pub fn download_url(&self) -> String {
        render(self.url_template, self.target_version)
    }

    /// Every work-directory file name this tool may create.
    pub fn transient_files(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.artifact).chain(self.leftovers.iter().copied())
    }
}
