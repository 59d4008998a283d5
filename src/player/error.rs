use std::fmt;

use thiserror::Error;

/// The operation an error came from, carrying the playlist name where the
/// message needs it. Playlist operations report the name exactly as the
/// failing lookup saw it: the as-typed name when resolution failed, the
/// canonical name afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Play,
    Stop,
    Pause,
    Continue,
    CreatePlaylist,
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Play => write!(f, "Cannot play video"),
            Operation::Stop => write!(f, "Cannot stop video"),
            Operation::Pause => write!(f, "Cannot pause video"),
            Operation::Continue => write!(f, "Cannot continue video"),
            Operation::CreatePlaylist => write!(f, "Cannot create playlist"),
            Operation::AddToPlaylist(name) => write!(f, "Cannot add video to {name}"),
            Operation::RemoveFromPlaylist(name) => write!(f, "Cannot remove video from {name}"),
            Operation::ClearPlaylist(name) => write!(f, "Cannot clear playlist {name}"),
            Operation::DeletePlaylist(name) => write!(f, "Cannot delete playlist {name}"),
            Operation::ShowPlaylist(name) => write!(f, "Cannot show playlist {name}"),
        }
    }
}

/// Expected, recoverable failure of a single player operation.
///
/// Every variant renders to exactly one output line identifying the operation
/// and the reason. State is never left partially mutated: operations validate
/// fully before touching anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("{0}: Video does not exist")]
    VideoNotFound(Operation),
    #[error("{0}: Playlist does not exist")]
    PlaylistNotFound(Operation),
    #[error("{0}: A playlist with the same name already exists")]
    DuplicatePlaylist(Operation),
    #[error("{0}: Video already added")]
    AlreadyInPlaylist(Operation),
    #[error("{0}: Video not in playlist")]
    NotInPlaylist(Operation),
    #[error("{0}: No video is currently playing")]
    NothingPlaying(Operation),
    #[error("Video already paused: {0}")]
    AlreadyPaused(String),
    #[error("{0}: Video is not paused")]
    NotPaused(Operation),
}
