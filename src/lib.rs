//! Lookup over a file manager's saved directory hotlist.
//!
//! The hotlist is a small XML document kept next to the executable. It can
//! be listed in full, or searched for the first entry whose name starts
//! with a given term.

use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use quick_xml::{events::Event, DeError, Reader};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Filename the file manager uses for the hotlist.
pub const HOTLIST_FILE: &str = "col_paths.hotlist";

/// Element name the file manager writes at the top of the document.
const ROOT_ELEMENT: &[u8] = b"doublecmd";

/// Convenient result type for hotlist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or printing the hotlist.
#[derive(Debug, Error)]
pub enum Error {
    /// The hotlist file could not be read at all.
    #[error("could not open {}: {source}", .path.display())]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file was read but is not well-formed XML.
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying deserializer failure.
        #[source]
        source: DeError,
    },
    /// The document root is not the file manager's expected element.
    #[error("document root is not <doublecmd>")]
    MissingRoot,
    /// The root carries no directory hotlist section.
    #[error("document has no <DirectoryHotList> element")]
    MissingHotlist,
    /// Wrapper for I/O errors while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Structural failures terminate without a message on stderr; the
    /// nonzero exit code is the whole report.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::MissingRoot | Self::MissingHotlist)
    }
}

/// One usable hotlist entry: a display name and the directory it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotlistEntry {
    /// Display name shown by the file manager.
    pub name: String,
    /// Filesystem path the name stands for.
    pub path: String,
}

/// Document structure the file manager writes, reduced to the parts we read.
/// Everything else in the file is ignored.
#[derive(Debug, Deserialize)]
struct HotlistDocument {
    /// Container for the saved directory entries.
    #[serde(rename = "DirectoryHotList")]
    directory_hot_list: Option<DirectoryHotList>,
}

/// The `<DirectoryHotList>` section.
#[derive(Debug, Deserialize)]
struct DirectoryHotList {
    /// One element per saved directory, in file order.
    #[serde(rename = "HotDir", default)]
    hot_dirs: Vec<HotDir>,
}

/// A single saved directory as it appears on disk. Both attributes are
/// optional in the file even though an entry is only usable with both.
#[derive(Debug, Deserialize)]
struct HotDir {
    #[serde(rename = "@Name")]
    name: Option<String>,
    #[serde(rename = "@Path")]
    path: Option<String>,
}

impl HotDir {
    /// Elements missing either attribute are dropped, not reported.
    fn into_entry(self) -> Option<HotlistEntry> {
        match (self.name, self.path) {
            (Some(name), Some(path)) => Some(HotlistEntry { name, path }),
            _ => None,
        }
    }
}

/// Locate the hotlist next to the running executable.
///
/// Falls back to the bare filename, resolved against the working directory,
/// when the executable path cannot be determined.
pub fn hotlist_path() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.join(HOTLIST_FILE),
            None => PathBuf::from(HOTLIST_FILE),
        },
        Err(err) => {
            debug!("executable path unavailable ({err}), using bare filename");
            PathBuf::from(HOTLIST_FILE)
        }
    }
}

/// Read and parse the hotlist file at `path`.
pub fn load_hotlist(path: &Path) -> Result<Vec<HotlistEntry>> {
    // Whole file into memory first; hotlists are never big enough to stream.
    let xml = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_hotlist(&xml, path)
}

/// Parse hotlist XML already read into memory. `path` only feeds error
/// reporting.
fn parse_hotlist(xml: &str, path: &Path) -> Result<Vec<HotlistEntry>> {
    let document: HotlistDocument =
        quick_xml::de::from_str(xml).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    // The deserializer accepts any root element name, so check it separately.
    if !root_is(xml, ROOT_ELEMENT) {
        return Err(Error::MissingRoot);
    }
    let hotlist = document.directory_hot_list.ok_or(Error::MissingHotlist)?;
    Ok(hotlist
        .hot_dirs
        .into_iter()
        .filter_map(HotDir::into_entry)
        .collect())
}

/// True when the document's root element is named `expected`.
fn root_is(xml: &str, expected: &[u8]) -> bool {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(start) | Event::Empty(start)) => {
                return start.name().as_ref() == expected;
            }
            Ok(Event::Eof) | Err(_) => return false,
            // Skip the declaration, comments, and whitespace before the root.
            Ok(_) => {}
        }
    }
}

/// First entry whose name starts with `term`, ignoring ASCII case.
///
/// Both sides are lowered byte-wise; bytes outside `A`..=`Z` are left
/// alone, so this is a byte-prefix test rather than Unicode case folding.
pub fn find_prefix<'a>(entries: &'a [HotlistEntry], term: &str) -> Option<&'a HotlistEntry> {
    let term = term.to_ascii_lowercase();
    entries
        .iter()
        .find(|entry| entry.name.to_ascii_lowercase().starts_with(&term))
}

/// Resolve the hotlist, load it, and either list every entry or print the
/// path of the first entry matching `term`.
pub fn run(term: Option<&str>) -> Result<()> {
    let path = hotlist_path();
    debug!("reading hotlist at {}", path.display());
    let entries = load_hotlist(&path)?;
    debug!("hotlist has {} usable entries", entries.len());

    let mut stdout = io::stdout().lock();
    match term {
        None => {
            for entry in &entries {
                writeln!(stdout, "{}\t\t{}", entry.name, entry.path)?;
            }
        }
        Some(term) => {
            // First match wins. No trailing newline so callers can use the
            // output as a path verbatim.
            if let Some(entry) = find_prefix(&entries, term) {
                write!(stdout, "{}", entry.path)?;
            }
        }
    }
    stdout.flush()?;
    Ok(())
}
