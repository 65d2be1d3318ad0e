use std::path::PathBuf;

/// One session directory under the Fire source root, holding the logs for a
/// single buddy or chat room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationFolder {
    /// The raw directory name, e.g. `"alice-AIM"`.
    pub dir_name: String,
    /// Full path to the directory.
    pub path: PathBuf,
}

/// A Fire session folder name split into its two identity fields.
///
/// Fire names each session directory `<peer>-<serviceTag>`; the peer
/// identifier becomes the Adium per-contact directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerFolder {
    pub peer: String,
    pub service_tag: String,
}

/// The date token prefixed to every Fire log filename.
///
/// Components are kept as strings: Fire writes zero-padded numerics, but the
/// migration only reshuffles text and never does date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDate {
    pub year: String,
    pub month: String,
    pub day: String,
}
