use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the serialized movie table (JSON)
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Path to the serialized similarity matrix (bincode)
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Path to a gzip-compressed copy of the similarity matrix, used by the
    /// bootstrap step when the uncompressed file is missing
    #[serde(default = "default_similarity_gz_path")]
    pub similarity_gz_path: String,

    /// Remote file host used to fetch the similarity matrix when no local
    /// copy exists
    #[serde(default = "default_drive_url")]
    pub drive_url: String,

    /// File identifier on the remote host
    #[serde(default = "default_similarity_file_id")]
    pub similarity_file_id: String,

    /// TMDB API key
    #[serde(default = "default_tmdb_api_key")]
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// CDN prefix prepended to relative poster paths
    #[serde(default = "default_poster_cdn_prefix")]
    pub poster_cdn_prefix: String,

    /// Per-request timeout for metadata fetches, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_movies_path() -> String {
    "movies.json".to_string()
}

fn default_similarity_path() -> String {
    "similarity.bin".to_string()
}

fn default_similarity_gz_path() -> String {
    "similarity.bin.gz".to_string()
}

fn default_drive_url() -> String {
    "https://drive.google.com/uc?export=download".to_string()
}

fn default_similarity_file_id() -> String {
    "1u_GB-EfOVKdXx3hmU_CZfNPO8QcD1BLa".to_string()
}

fn default_tmdb_api_key() -> String {
    "916ed8867edce6717dda3cffd517274c".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org".to_string()
}

fn default_poster_cdn_prefix() -> String {
    "https://image.tmdb.org/t/p/w500/".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
