pub const MANIFEST_FILE: &str = "composer.json";

pub const DEFAULT_REMOTE: &str = "origin";

pub const VERSION_REGEX: &str = r"^[0-9]+\.[0-9]+\.[0-9]+$";

pub const USAGE: &str = "cutrelease <version>";

pub const COMMIT_MESSAGE_PREFIX: &str = "Bump version to";

pub const TAG_MESSAGE_PREFIX: &str = "Release";

pub const TAG_MESSAGE_FILE_PREFIX: &str = "cutrelease-tag";

/// Manifest indentation, four spaces like the rest of the project files.
pub const MANIFEST_INDENT: &[u8] = b"    ";

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Above this many pages the page list collapses into a window.
pub const MAX_PAGES_WITHOUT_WINDOW: usize = 7;
