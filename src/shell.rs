// Line-oriented command shell over the player.
// Parsing stays dumb on purpose: split on whitespace, match the command word,
// join the middle tokens back together where a playlist name may have spaces.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::player::{Player, PlayerError};

const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

const HELP_TEXT: &[&str] = &[
    "Available commands:",
    "  NUMBER_OF_VIDEOS                        - show how many videos are in the library",
    "  SHOW_ALL_VIDEOS                         - list all videos",
    "  PLAY <video_id>                         - play the given video",
    "  PLAY_RANDOM                             - play a random video",
    "  STOP                                    - stop the current video",
    "  PAUSE                                   - pause the current video",
    "  CONTINUE                                - resume a paused video",
    "  SHOW_PLAYING                            - show the current video",
    "  CREATE_PLAYLIST <name>                  - create a new playlist",
    "  ADD_TO_PLAYLIST <name> <video_id>       - add a video to a playlist",
    "  REMOVE_FROM_PLAYLIST <name> <video_id>  - remove a video from a playlist",
    "  CLEAR_PLAYLIST <name>                   - remove all videos from a playlist",
    "  DELETE_PLAYLIST <name>                  - delete a playlist",
    "  SHOW_ALL_PLAYLISTS                      - list all playlists",
    "  SHOW_PLAYLIST <name>                    - show the videos in a playlist",
    "  SEARCH_VIDEOS <term>                    - search videos by title (not built yet)",
    "  SEARCH_VIDEOS_TAG <tag>                 - search videos by tag (not built yet)",
    "  FLAG_VIDEO <video_id> [reason]          - flag a video (not built yet)",
    "  ALLOW_VIDEO <video_id>                  - unflag a video (not built yet)",
    "  HELP                                    - show this text",
    "  EXIT                                    - leave the shell",
];

/// Interactive session driver. Owns the player and translates input lines
/// into operations; all observable behavior comes back as output lines.
pub struct Shell {
    player: Player,
    done: bool,
}

impl Shell {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Reads commands until EXIT or end of input, writing every output line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            for out in self.handle_line(&line) {
                writeln!(output, "{out}")?;
            }
            if self.done {
                break;
            }
        }
        Ok(())
    }

    /// Executes one input line and returns its output lines.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = parts.split_first() else {
            return Vec::new();
        };

        debug!("Command: {}", command);

        // Command words are case-insensitive; arguments are not.
        match (command.to_uppercase().as_str(), args) {
            ("NUMBER_OF_VIDEOS", []) => vec![self.player.number_of_videos()],
            ("SHOW_ALL_VIDEOS", []) => self.player.show_all_videos(),

            ("PLAY", [video_id]) => collapse(self.player.play(video_id)),
            ("PLAY_RANDOM", []) => collapse(self.player.play_random()),
            ("STOP", []) => collapse_line(self.player.stop()),
            ("PAUSE", []) => collapse_line(self.player.pause()),
            ("CONTINUE", []) => collapse_line(self.player.resume()),
            ("SHOW_PLAYING", []) => vec![self.player.show_playing()],

            ("CREATE_PLAYLIST", name @ [_, ..]) => {
                collapse_line(self.player.create_playlist(&name.join(" ")))
            }
            ("ADD_TO_PLAYLIST", [name @ .., video_id]) if !name.is_empty() => {
                collapse_line(self.player.add_to_playlist(&name.join(" "), video_id))
            }
            ("REMOVE_FROM_PLAYLIST", [name @ .., video_id]) if !name.is_empty() => {
                collapse_line(self.player.remove_from_playlist(&name.join(" "), video_id))
            }
            ("CLEAR_PLAYLIST", name @ [_, ..]) => {
                collapse_line(self.player.clear_playlist(&name.join(" ")))
            }
            ("DELETE_PLAYLIST", name @ [_, ..]) => {
                collapse_line(self.player.delete_playlist(&name.join(" ")))
            }
            ("SHOW_ALL_PLAYLISTS", []) => self.player.show_all_playlists(),
            ("SHOW_PLAYLIST", name @ [_, ..]) => {
                collapse(self.player.show_playlist(&name.join(" ")))
            }

            ("SEARCH_VIDEOS", [term]) => vec![self.player.search_by_title(term).to_string()],
            ("SEARCH_VIDEOS_TAG", [tag]) => vec![self.player.search_by_tag(tag).to_string()],
            ("FLAG_VIDEO", [video_id]) => {
                vec![self.player.flag_video(video_id, None).to_string()]
            }
            ("FLAG_VIDEO", [video_id, reason]) => {
                vec![self.player.flag_video(video_id, Some(reason)).to_string()]
            }
            ("ALLOW_VIDEO", [video_id]) => vec![self.player.allow_video(video_id).to_string()],

            ("HELP", []) => HELP_TEXT.iter().map(|s| s.to_string()).collect(),
            ("EXIT", []) => {
                self.done = true;
                Vec::new()
            }

            _ => vec![INVALID_COMMAND.to_string()],
        }
    }
}

fn collapse(result: Result<Vec<String>, PlayerError>) -> Vec<String> {
    result.unwrap_or_else(|err| vec![err.to_string()])
}

fn collapse_line(result: Result<String, PlayerError>) -> Vec<String> {
    match result {
        Ok(line) => vec![line],
        Err(err) => vec![err.to_string()],
    }
}
