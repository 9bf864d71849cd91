//! Package metadata for the readme header and trailer blocks

/// Package metadata rendered into the fixed parts of the readme
///
/// The defaults describe SyncTime, so a run without configuration
/// produces the stock header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub short: String,
    pub author: String,
    pub uploader: String,
    /// Aminet directory, e.g. `util/time`
    pub kind: String,
    pub architecture: String,
    pub requires: String,
    pub distribution: String,
    /// Repository URL shown under "Source Code:"
    pub source_url: String,
    pub license: String,
    pub contact: String,
}

impl Default for PackageInfo {
    fn default() -> Self {
        Self {
            short: "NTP time sync commodity with timezone support".to_string(),
            author: "chrome@stupendous.net (Nathan Ollerenshaw)".to_string(),
            uploader: "chrome@stupendous.net (Nathan Ollerenshaw)".to_string(),
            kind: "util/time".to_string(),
            architecture: "m68k-amigaos >= 3.2.0".to_string(),
            requires: "AmigaOS 3.2+, bsdsocket.library, TCP/IP stack".to_string(),
            distribution: "Aminet".to_string(),
            source_url: "https://github.com/matjam/synctime".to_string(),
            license: "MIT License. See LICENSE file.".to_string(),
            contact: "Nathan Ollerenshaw <chrome@stupendous.net>".to_string(),
        }
    }
}

impl PackageInfo {
    /// Render the header block, ending with a newline
    pub fn header(&self, version: &str) -> String {
        let fields = [
            ("Short:", self.short.as_str()),
            ("Author:", self.author.as_str()),
            ("Uploader:", self.uploader.as_str()),
            ("Type:", self.kind.as_str()),
            ("Version:", version),
            ("Architecture:", self.architecture.as_str()),
            ("Requires:", self.requires.as_str()),
            ("Distribution:", self.distribution.as_str()),
        ];

        let mut out = String::new();
        for (label, value) in fields {
            out.push_str(&format!("{:<14}{}\n", label, value));
        }
        out
    }
}
