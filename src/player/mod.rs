pub mod error;
pub mod playlist;

pub use error::{Operation, PlayerError};
pub use playlist::{Playlist, PlaylistSet};

use std::fmt;

use rand::seq::IteratorRandom;
use tracing::{debug, info};

use crate::catalog::{Video, VideoCatalog};

/// Current playback status. The variants carry the current video id, so a
/// "current video without playback" or "playback without a current video"
/// cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    Stopped,
    Playing(String),
    Paused(String),
}

impl Playback {
    /// Id of the current video, present unless stopped.
    pub fn video_id(&self) -> Option<&str> {
        match self {
            Playback::Stopped => None,
            Playback::Playing(id) | Playback::Paused(id) => Some(id),
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, Playback::Stopped)
    }
}

/// Returned by operations that are declared on the command surface but
/// intentionally not built. A distinct type rather than a [`PlayerError`] so
/// callers can tell "feature absent" from a failed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSupported {
    operation: &'static str,
}

impl NotSupported {
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Display for NotSupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not supported yet", self.operation)
    }
}

/// The session context: catalog, playlists, and playback state.
///
/// Created once per session and discarded at the end of it; playlists live as
/// long as the player, playback resets only via an explicit stop. Every
/// mutating operation takes `&mut self`, so one logical caller at a time is
/// enforced by the borrow checker rather than a lock.
///
/// Operations validate fully before mutating anything, and report their
/// outcome as human-readable output lines whose exact wording is part of the
/// contract.
#[derive(Debug)]
pub struct Player {
    catalog: VideoCatalog,
    playlists: PlaylistSet,
    playback: Playback,
}

impl Player {
    pub fn new(catalog: VideoCatalog) -> Self {
        Self {
            catalog,
            playlists: PlaylistSet::new(),
            playback: Playback::Stopped,
        }
    }

    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    pub fn playlists(&self) -> &PlaylistSet {
        &self.playlists
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    // Title for an id that was validated against the catalog when it entered
    // the playback state or a playlist; the catalog never changes afterwards.
    fn video_title(&self, video_id: &str) -> String {
        self.catalog
            .lookup(video_id)
            .map(|video| video.title().to_string())
            .unwrap_or_else(|| video_id.to_string())
    }

    fn description_of(&self, video_id: &str) -> String {
        self.catalog
            .lookup(video_id)
            .map(Video::description)
            .unwrap_or_else(|| video_id.to_string())
    }

    // ---- playback ----------------------------------------------------------

    /// Starts playing a video. Whatever is active is stopped first, paused or
    /// not - replaying the current video goes through the same
    /// stop-then-start path.
    pub fn play(&mut self, video_id: &str) -> Result<Vec<String>, PlayerError> {
        let new_title = self
            .catalog
            .lookup(video_id)
            .ok_or(PlayerError::VideoNotFound(Operation::Play))?
            .title()
            .to_string();

        let mut lines = Vec::new();
        if let Some(current) = self.playback.video_id() {
            lines.push(format!("Stopping video: {}", self.video_title(current)));
        }
        self.playback = Playback::Playing(video_id.to_string());
        info!("Playing '{}'", video_id);
        lines.push(format!("Playing video: {new_title}"));
        Ok(lines)
    }

    /// Plays a uniformly random catalog video.
    ///
    /// # Panics
    ///
    /// If the catalog is empty - which [`VideoCatalog`] construction forbids.
    pub fn play_random(&mut self) -> Result<Vec<String>, PlayerError> {
        let mut rng = rand::thread_rng();
        let video_id = self
            .catalog
            .all()
            .map(|video| video.id().to_string())
            .choose(&mut rng)
            .expect("catalog is never empty");
        self.play(&video_id)
    }

    pub fn stop(&mut self) -> Result<String, PlayerError> {
        match self.playback.video_id() {
            Some(current) => {
                let line = format!("Stopping video: {}", self.video_title(current));
                self.playback = Playback::Stopped;
                info!("Stopped");
                Ok(line)
            }
            None => Err(PlayerError::NothingPlaying(Operation::Stop)),
        }
    }

    pub fn pause(&mut self) -> Result<String, PlayerError> {
        match &self.playback {
            Playback::Stopped => Err(PlayerError::NothingPlaying(Operation::Pause)),
            Playback::Paused(current) => Err(PlayerError::AlreadyPaused(
                self.video_title(current),
            )),
            Playback::Playing(current) => {
                let current = current.clone();
                let title = self.video_title(&current);
                self.playback = Playback::Paused(current);
                debug!("Paused");
                Ok(format!("Pausing video: {title}"))
            }
        }
    }

    /// The CONTINUE command: resumes a paused video.
    pub fn resume(&mut self) -> Result<String, PlayerError> {
        match &self.playback {
            Playback::Stopped => Err(PlayerError::NothingPlaying(Operation::Continue)),
            Playback::Playing(_) => Err(PlayerError::NotPaused(Operation::Continue)),
            Playback::Paused(current) => {
                let current = current.clone();
                let title = self.video_title(&current);
                self.playback = Playback::Playing(current);
                debug!("Continuing");
                Ok(format!("Continuing video: {title}"))
            }
        }
    }

    pub fn show_playing(&self) -> String {
        match &self.playback {
            Playback::Stopped => "No video is currently playing".to_string(),
            Playback::Playing(current) => {
                format!("Currently playing: {}", self.description_of(current))
            }
            Playback::Paused(current) => {
                format!("Currently playing: {} - PAUSED", self.description_of(current))
            }
        }
    }

    pub fn number_of_videos(&self) -> String {
        format!("{} videos in the library", self.catalog.len())
    }

    pub fn show_all_videos(&self) -> Vec<String> {
        let mut descriptions: Vec<String> = self.catalog.all().map(Video::description).collect();
        descriptions.sort();

        let mut lines = vec!["Here's a list of all available videos:".to_string()];
        lines.extend(descriptions.into_iter().map(|d| format!("  {d}")));
        lines
    }

    // ---- playlists ---------------------------------------------------------

    pub fn create_playlist(&mut self, name: &str) -> Result<String, PlayerError> {
        if !self.playlists.create(name) {
            return Err(PlayerError::DuplicatePlaylist(Operation::CreatePlaylist));
        }
        Ok(format!("Successfully created new playlist: {name}"))
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<String, PlayerError> {
        let (canonical, playlist) = self.playlists.find_mut(name).ok_or_else(|| {
            PlayerError::PlaylistNotFound(Operation::AddToPlaylist(name.to_string()))
        })?;
        let title = match self.catalog.lookup(video_id) {
            Some(video) => video.title().to_string(),
            None => {
                return Err(PlayerError::VideoNotFound(Operation::AddToPlaylist(
                    canonical,
                )))
            }
        };
        if playlist.contains(video_id) {
            return Err(PlayerError::AlreadyInPlaylist(Operation::AddToPlaylist(
                canonical,
            )));
        }

        playlist.push(video_id.to_string());
        debug!("Added '{}' to playlist '{}'", video_id, canonical);
        Ok(format!("Added video to {canonical}: {title}"))
    }

    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<String, PlayerError> {
        let (canonical, playlist) = self.playlists.find_mut(name).ok_or_else(|| {
            PlayerError::PlaylistNotFound(Operation::RemoveFromPlaylist(name.to_string()))
        })?;
        let title = match self.catalog.lookup(video_id) {
            Some(video) => video.title().to_string(),
            None => {
                return Err(PlayerError::VideoNotFound(Operation::RemoveFromPlaylist(
                    canonical,
                )))
            }
        };
        if !playlist.remove(video_id) {
            return Err(PlayerError::NotInPlaylist(Operation::RemoveFromPlaylist(
                canonical,
            )));
        }

        debug!("Removed '{}' from playlist '{}'", video_id, canonical);
        Ok(format!("Removed video from {canonical}: {title}"))
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<String, PlayerError> {
        let (canonical, playlist) = self.playlists.find_mut(name).ok_or_else(|| {
            PlayerError::PlaylistNotFound(Operation::ClearPlaylist(name.to_string()))
        })?;
        playlist.clear();
        info!("Cleared playlist '{}'", canonical);
        Ok(format!("Successfully removed all videos from {canonical}"))
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<String, PlayerError> {
        let canonical = self
            .playlists
            .resolve(name)
            .map(str::to_string)
            .ok_or_else(|| {
                PlayerError::PlaylistNotFound(Operation::DeletePlaylist(name.to_string()))
            })?;
        self.playlists.remove(&canonical);
        Ok(format!("Deleted playlist: {canonical}"))
    }

    pub fn show_all_playlists(&self) -> Vec<String> {
        let mut lines = vec!["Showing all playlists:".to_string()];
        if self.playlists.is_empty() {
            lines.push("No playlists exist yet".to_string());
        } else {
            let mut names: Vec<&str> = self.playlists.names().collect();
            // stable case-insensitive order
            names.sort_by_key(|name| name.to_lowercase());
            lines.extend(names.into_iter().map(|name| format!("   {name}")));
        }
        lines
    }

    pub fn show_playlist(&self, name: &str) -> Result<Vec<String>, PlayerError> {
        let playlist = self.playlists.find(name).ok_or_else(|| {
            PlayerError::PlaylistNotFound(Operation::ShowPlaylist(name.to_string()))
        })?;

        let mut lines = vec![format!("Showing playlist: {}", playlist.name())];
        if playlist.is_empty() {
            lines.push("   No videos here yet".to_string());
        } else {
            for video_id in playlist.video_ids() {
                lines.push(format!("  {}", self.description_of(video_id)));
            }
        }
        Ok(lines)
    }

    // ---- declared but not built -------------------------------------------

    pub fn search_by_title(&self, _search_term: &str) -> NotSupported {
        NotSupported {
            operation: "SEARCH_VIDEOS",
        }
    }

    pub fn search_by_tag(&self, _video_tag: &str) -> NotSupported {
        NotSupported {
            operation: "SEARCH_VIDEOS_TAG",
        }
    }

    pub fn flag_video(&self, _video_id: &str, _reason: Option<&str>) -> NotSupported {
        NotSupported {
            operation: "FLAG_VIDEO",
        }
    }

    pub fn allow_video(&self, _video_id: &str) -> NotSupported {
        NotSupported {
            operation: "ALLOW_VIDEO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoRecord;

    fn record(id: &str, title: &str, tags: &[&str]) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn player() -> Player {
        let catalog = VideoCatalog::from_records(vec![
            record("v1", "Titanic", &[]),
            record("v2", "Amazing", &[]),
            record("v3", "Cat Compilation", &["#cat", "#fun"]),
        ])
        .unwrap();
        Player::new(catalog)
    }

    #[test]
    fn test_play_unknown_video() {
        let mut player = player();
        assert_eq!(
            player.play("nope"),
            Err(PlayerError::VideoNotFound(Operation::Play))
        );
        assert!(player.playback().is_stopped());
    }

    #[test]
    fn test_play_from_stopped() {
        let mut player = player();
        assert_eq!(player.play("v1").unwrap(), ["Playing video: Titanic"]);
        assert_eq!(player.playback(), &Playback::Playing("v1".to_string()));
    }

    #[test]
    fn test_play_over_play_stops_previous() {
        let mut player = player();
        player.play("v1").unwrap();

        assert_eq!(
            player.play("v2").unwrap(),
            ["Stopping video: Titanic", "Playing video: Amazing"]
        );
        assert_eq!(player.show_playing(), "Currently playing: Amazing (v2) []");
    }

    #[test]
    fn test_replaying_current_video_restarts_it() {
        let mut player = player();
        player.play("v1").unwrap();

        // no no-op shortcut, even for the same video
        assert_eq!(
            player.play("v1").unwrap(),
            ["Stopping video: Titanic", "Playing video: Titanic"]
        );
    }

    #[test]
    fn test_play_over_paused_still_emits_stop_notice() {
        let mut player = player();
        player.play("v1").unwrap();
        player.pause().unwrap();

        assert_eq!(
            player.play("v2").unwrap(),
            ["Stopping video: Titanic", "Playing video: Amazing"]
        );
        assert_eq!(player.playback(), &Playback::Playing("v2".to_string()));
    }

    #[test]
    fn test_stop_twice_is_nothing_playing() {
        let mut player = player();
        player.play("v1").unwrap();

        assert_eq!(player.stop().unwrap(), "Stopping video: Titanic");
        assert!(player.playback().is_stopped());
        assert_eq!(
            player.stop(),
            Err(PlayerError::NothingPlaying(Operation::Stop))
        );
        assert!(player.playback().is_stopped());
    }

    #[test]
    fn test_pause_continue_round_trip() {
        let mut player = player();
        player.play("v1").unwrap();

        assert_eq!(player.pause().unwrap(), "Pausing video: Titanic");
        assert_eq!(player.playback(), &Playback::Paused("v1".to_string()));

        assert_eq!(player.resume().unwrap(), "Continuing video: Titanic");
        assert_eq!(player.playback(), &Playback::Playing("v1".to_string()));
    }

    #[test]
    fn test_pause_error_branches() {
        let mut player = player();
        assert_eq!(
            player.pause(),
            Err(PlayerError::NothingPlaying(Operation::Pause))
        );

        player.play("v1").unwrap();
        player.pause().unwrap();
        // repeated pause is a notice, not a state change
        assert_eq!(
            player.pause(),
            Err(PlayerError::AlreadyPaused("Titanic".to_string()))
        );
        assert_eq!(player.playback(), &Playback::Paused("v1".to_string()));
    }

    #[test]
    fn test_continue_error_branches() {
        let mut player = player();
        assert_eq!(
            player.resume(),
            Err(PlayerError::NothingPlaying(Operation::Continue))
        );

        player.play("v1").unwrap();
        assert_eq!(player.resume(), Err(PlayerError::NotPaused(Operation::Continue)));
        assert_eq!(player.playback(), &Playback::Playing("v1".to_string()));
    }

    #[test]
    fn test_show_playing_states() {
        let mut player = player();
        assert_eq!(player.show_playing(), "No video is currently playing");

        player.play("v3").unwrap();
        assert_eq!(
            player.show_playing(),
            "Currently playing: Cat Compilation (v3) [#cat #fun]"
        );

        player.pause().unwrap();
        assert_eq!(
            player.show_playing(),
            "Currently playing: Cat Compilation (v3) [#cat #fun] - PAUSED"
        );
    }

    #[test]
    fn test_play_random_picks_from_catalog() {
        let catalog = VideoCatalog::from_records(vec![record("only", "Only One", &[])]).unwrap();
        let mut player = Player::new(catalog);

        assert_eq!(player.play_random().unwrap(), ["Playing video: Only One"]);
        assert_eq!(player.playback(), &Playback::Playing("only".to_string()));
    }

    #[test]
    fn test_number_and_listing_of_videos() {
        let player = player();
        assert_eq!(player.number_of_videos(), "3 videos in the library");
        assert_eq!(
            player.show_all_videos(),
            [
                "Here's a list of all available videos:",
                "  Amazing (v2) []",
                "  Cat Compilation (v3) [#cat #fun]",
                "  Titanic (v1) []",
            ]
        );
    }

    #[test]
    fn test_create_playlist_and_duplicate() {
        let mut player = player();
        assert_eq!(
            player.create_playlist("My List").unwrap(),
            "Successfully created new playlist: My List"
        );
        assert_eq!(
            player.create_playlist("my LIST"),
            Err(PlayerError::DuplicatePlaylist(Operation::CreatePlaylist))
        );
        assert_eq!(player.playlists().len(), 1);
    }

    #[test]
    fn test_add_error_priority() {
        let mut player = player();

        // playlist existence is checked before the video
        assert_eq!(
            player.add_to_playlist("missing", "nope"),
            Err(PlayerError::PlaylistNotFound(Operation::AddToPlaylist(
                "missing".to_string()
            )))
        );

        player.create_playlist("Mix").unwrap();
        // post-resolution errors use the canonical name
        assert_eq!(
            player.add_to_playlist("mix", "nope"),
            Err(PlayerError::VideoNotFound(Operation::AddToPlaylist(
                "Mix".to_string()
            )))
        );

        player.add_to_playlist("mix", "v1").unwrap();
        assert_eq!(
            player.add_to_playlist("MIX", "v1"),
            Err(PlayerError::AlreadyInPlaylist(Operation::AddToPlaylist(
                "Mix".to_string()
            )))
        );
        assert_eq!(player.playlists().find("mix").unwrap().len(), 1);
    }

    #[test]
    fn test_remove_error_priority() {
        let mut player = player();
        assert_eq!(
            player.remove_from_playlist("missing", "v1"),
            Err(PlayerError::PlaylistNotFound(Operation::RemoveFromPlaylist(
                "missing".to_string()
            )))
        );

        player.create_playlist("Mix").unwrap();
        player.add_to_playlist("Mix", "v1").unwrap();

        assert_eq!(
            player.remove_from_playlist("mix", "nope"),
            Err(PlayerError::VideoNotFound(Operation::RemoveFromPlaylist(
                "Mix".to_string()
            )))
        );
        // v2 exists in the catalog but was never added
        assert_eq!(
            player.remove_from_playlist("mix", "v2"),
            Err(PlayerError::NotInPlaylist(Operation::RemoveFromPlaylist(
                "Mix".to_string()
            )))
        );

        assert_eq!(
            player.remove_from_playlist("mix", "v1").unwrap(),
            "Removed video from Mix: Titanic"
        );
        assert!(player.playlists().find("mix").unwrap().is_empty());
    }

    #[test]
    fn test_clear_playlist() {
        let mut player = player();
        assert_eq!(
            player.clear_playlist("missing"),
            Err(PlayerError::PlaylistNotFound(Operation::ClearPlaylist(
                "missing".to_string()
            )))
        );

        player.create_playlist("Mix").unwrap();
        player.add_to_playlist("Mix", "v1").unwrap();
        player.add_to_playlist("Mix", "v2").unwrap();

        assert_eq!(
            player.clear_playlist("MIX").unwrap(),
            "Successfully removed all videos from Mix"
        );
        assert_eq!(
            player.show_playlist("mix").unwrap(),
            ["Showing playlist: Mix", "   No videos here yet"]
        );
    }

    #[test]
    fn test_show_all_playlists_sorted_case_insensitively() {
        let mut player = player();
        assert_eq!(
            player.show_all_playlists(),
            ["Showing all playlists:", "No playlists exist yet"]
        );

        player.create_playlist("zebra").unwrap();
        player.create_playlist("Alpha").unwrap();
        player.create_playlist("mango").unwrap();

        assert_eq!(
            player.show_all_playlists(),
            ["Showing all playlists:", "   Alpha", "   mango", "   zebra"]
        );
    }

    #[test]
    fn test_show_playlist_preserves_insertion_order() {
        let mut player = player();
        player.create_playlist("Mix").unwrap();
        player.add_to_playlist("Mix", "v2").unwrap();
        player.add_to_playlist("Mix", "v1").unwrap();

        assert_eq!(
            player.show_playlist("MIX").unwrap(),
            [
                "Showing playlist: Mix",
                "  Amazing (v2) []",
                "  Titanic (v1) []",
            ]
        );
    }

    #[test]
    fn test_end_to_end_session() {
        let catalog = VideoCatalog::from_records(vec![
            record("v1", "Titanic", &[]),
            record("v2", "Amazing", &[]),
        ])
        .unwrap();
        let mut player = Player::new(catalog);

        assert_eq!(
            player.create_playlist("My List").unwrap(),
            "Successfully created new playlist: My List"
        );
        assert_eq!(
            player.add_to_playlist("my list", "v1").unwrap(),
            "Added video to My List: Titanic"
        );
        assert_eq!(
            player.show_playlist("MY LIST").unwrap(),
            ["Showing playlist: My List", "  Titanic (v1) []"]
        );
        assert_eq!(
            player.delete_playlist("my list").unwrap(),
            "Deleted playlist: My List"
        );
        assert_eq!(
            player.show_playlist("My List"),
            Err(PlayerError::PlaylistNotFound(Operation::ShowPlaylist(
                "My List".to_string()
            )))
        );
    }

    #[test]
    fn test_unbuilt_operations_report_not_supported() {
        let player = player();
        assert_eq!(
            player.search_by_title("cat").to_string(),
            "SEARCH_VIDEOS is not supported yet"
        );
        assert_eq!(
            player.search_by_tag("#cat").to_string(),
            "SEARCH_VIDEOS_TAG is not supported yet"
        );
        assert_eq!(
            player.flag_video("v1", Some("dont_like")).to_string(),
            "FLAG_VIDEO is not supported yet"
        );
        assert_eq!(
            player.allow_video("v1").to_string(),
            "ALLOW_VIDEO is not supported yet"
        );
        // the marker is a value, not an error
        assert_eq!(player.flag_video("v1", None).operation(), "FLAG_VIDEO");
    }
}
