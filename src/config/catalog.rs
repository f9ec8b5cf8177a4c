// src/config/catalog.rs
use crate::probe::ProbeCase;

// Sample identifiers known to the upstream catalog. They may go stale.
pub const SAMPLE_TRACK_ID: i64 = 194567102;
pub const SAMPLE_ALBUM_ID: i64 = 56681092;
pub const SAMPLE_ARTIST_ID: i64 = 9321197;
pub const SAMPLE_VIDEO_ID: i64 = 402643865;
pub const SAMPLE_PLAYLIST_ID: &str = "1c5d01ed-4f05-40c4-bd28-0f730f9b220b";
pub const SAMPLE_MIX_ID: &str = "00112233445566778899aabbcc";

/// The built-in probe suite, in dispatch order.
pub fn default_catalog() -> Vec<ProbeCase> {
    vec![
        ProbeCase::new("Root Index", "/"),
        ProbeCase::new("Track Info", "/info/").param("id", SAMPLE_TRACK_ID),
        ProbeCase::new("Track Playback", "/track/").param("id", SAMPLE_TRACK_ID),
        ProbeCase::new("Track Recommendations", "/recommendations/")
            .param("id", SAMPLE_TRACK_ID),
        ProbeCase::new("Search Tracks", "/search/").param("s", "daft punk"),
        ProbeCase::new("Search Artists", "/search/").param("a", "daft punk"),
        ProbeCase::new("Album Details", "/album/").param("id", SAMPLE_ALBUM_ID),
        ProbeCase::new("Similar Albums", "/album/similar/").param("id", SAMPLE_ALBUM_ID),
        ProbeCase::new("Artist Details", "/artist/").param("id", SAMPLE_ARTIST_ID),
        ProbeCase::new("Artist Albums/Tracks", "/artist/").param("f", SAMPLE_ARTIST_ID),
        ProbeCase::new("Similar Artists", "/artist/similar/").param("id", SAMPLE_ARTIST_ID),
        ProbeCase::new("Cover by ID", "/cover/").param("id", SAMPLE_TRACK_ID),
        ProbeCase::new("Cover by Query", "/cover/").param("q", "discovery daft punk"),
        ProbeCase::new("Lyrics", "/lyrics/").param("id", SAMPLE_TRACK_ID),
        ProbeCase::new("Top Videos", "/topvideos/"),
        ProbeCase::new("Playlist", "/playlist/").param("id", SAMPLE_PLAYLIST_ID),
        // Mix and video identifiers expire upstream; kept to document the shapes.
        ProbeCase::new("Mix", "/mix/").param("id", SAMPLE_MIX_ID).disabled(),
        ProbeCase::new("Video Playback", "/video/")
            .param("id", SAMPLE_VIDEO_ID)
            .disabled(),
    ]
}
