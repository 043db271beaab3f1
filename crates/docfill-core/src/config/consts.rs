//! Default names and formats used across docfill

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "docfill.toml";

/// Template locations
pub mod templates {
    /// Generic filler template
    pub const GENERIC: &str = "./template.txt";

    /// Claims tribunal judgment template
    pub const CLAIM: &str = "./mact_template.txt";
}

/// Generated file names
pub mod output {
    /// Generic filler output
    pub const GENERIC_FILE: &str = "generated_content.md";

    /// Output directory
    pub const DIR: &str = ".";
}

/// Date formats (strftime)
pub mod dates {
    /// `October 14, 2026`
    pub const GENERIC: &str = "%B %d, %Y";

    /// `14-10-2026`
    pub const JUDGMENT: &str = "%d-%m-%Y";
}
