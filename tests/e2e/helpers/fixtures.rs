//! Upstream documents served by the mock upstream.

pub const PODCAST_FEED_PATH: &str = "/podcast.xml";
pub const MEDIA_FEED_PATH: &str = "/media.xml";
pub const MISSING_FEED_PATH: &str = "/missing.xml";
pub const NOT_A_FEED_PATH: &str = "/not-a-feed";
pub const AUDIO_PATH: &str = "/audio/episode.mp3";
pub const SLOW_AUDIO_PATH: &str = "/audio/slow.mp3";

/// Chunks of the slow episode and the pause before each one.
pub const SLOW_AUDIO_CHUNKS: usize = 4;
pub const SLOW_AUDIO_CHUNK_DELAY_MS: u64 = 450;

pub const EPISODE_AUDIO_URL: &str = "https://cdn.example.com/audio/episode-2.mp3";
pub const MEDIA_AUDIO_URL: &str = "https://cdn.example.com/media/episode-10.m4a";

/// Sixteen bytes of "audio".
pub const AUDIO_BYTES: &[u8] = b"ID3-fake-mp3-16b";

pub const PODCAST_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Ferris Talks</title>
    <link>https://ferris.example.com/</link>
    <description>Conversations about systems programming</description>
    <language>en</language>
    <item>
      <title>Episode 2: Lifetimes</title>
      <link>https://ferris.example.com/episodes/2</link>
      <guid>ferris-2</guid>
      <pubDate>Tue, 02 Jan 2024 10:00:00 GMT</pubDate>
      <description><![CDATA[<p>All about <b>lifetimes</b></p>]]></description>
      <enclosure url="https://cdn.example.com/audio/episode-2.mp3" length="5242880" type="audio/mpeg"/>
    </item>
    <item>
      <title>Episode 1: Ownership</title>
      <link>https://ferris.example.com/episodes/1</link>
      <guid>ferris-1</guid>
      <pubDate>Mon, 01 Jan 2024 10:00:00 GMT</pubDate>
      <description>Who owns what</description>
      <enclosure url="https://cdn.example.com/audio/episode-1.mp3" length="1048576" type="audio/mpeg"/>
    </item>
  </channel>
</rss>"#;

pub const MEDIA_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>Media Hour</title>
    <link>https://media.example.com/</link>
    <description>A feed using Media RSS</description>
    <item>
      <title>Episode 10</title>
      <guid>media-10</guid>
      <media:title>Episode 10 (HQ)</media:title>
      <media:content url="https://cdn.example.com/media/episode-10.m4a" type="audio/mp4" fileSize="2097152"/>
    </item>
  </channel>
</rss>"#;

pub const SEARCH_RESPONSE: &str = r#"{
  "resultCount": 2,
  "results": [
    {
      "collectionId": 1001,
      "collectionName": "Ferris Talks",
      "artistName": "Rustaceans",
      "feedUrl": "https://ferris.example.com/feed.xml",
      "artworkUrl100": "https://img.example.com/ferris-100.jpg",
      "primaryGenreName": "Technology",
      "trackCount": 42
    },
    {
      "collectionId": 1002,
      "collectionName": "Crab Radio",
      "artistName": "Crabs"
    }
  ]
}"#;
