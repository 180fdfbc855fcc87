use serde::{Deserialize, Serialize};

const NA: &str = "N/A";

/// Raw TMDB `/3/movie/{id}` response.
///
/// Every field is optional or defaulted: TMDB omits fields freely and a
/// partial record must still decode. Shaping into display form happens in
/// [`MovieDetails::from_response`], once, at the API boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovieResponse {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub genres: Vec<NamedEntry>,
    #[serde(default)]
    pub production_companies: Vec<NamedEntry>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: u64,
}

/// List entries TMDB nests under `genres` and `production_companies`
#[derive(Debug, Clone, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

/// Display record for one recommended movie, returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub poster_url: String,
    pub title: String,
    pub tagline: String,
    pub overview: String,
    pub language: String,
    pub release_date: String,
    pub status: String,
    pub budget: u64,
    pub revenue: u64,
    pub adult: bool,
    pub genres: String,
    pub production_companies: String,
    pub rating: String,
}

impl MovieDetails {
    /// Shapes a raw TMDB response into display form.
    ///
    /// List fields are joined into comma-separated strings and the poster URL
    /// is the CDN prefix concatenated with the relative path; a missing path
    /// yields the bare prefix, which renders as no image.
    pub fn from_response(response: TmdbMovieResponse, poster_cdn_prefix: &str) -> Self {
        let rating = match response.vote_average {
            Some(average) => format!("{} ({} votes)", average, response.vote_count),
            None => format!("{} ({} votes)", NA, response.vote_count),
        };

        Self {
            poster_url: format!(
                "{}{}",
                poster_cdn_prefix,
                response.poster_path.unwrap_or_default()
            ),
            title: response.title.unwrap_or_else(|| NA.to_string()),
            tagline: response.tagline.unwrap_or_else(|| NA.to_string()),
            overview: response.overview.unwrap_or_else(|| NA.to_string()),
            language: response.original_language.unwrap_or_else(|| NA.to_string()),
            release_date: response.release_date.unwrap_or_else(|| NA.to_string()),
            status: response.status.unwrap_or_else(|| NA.to_string()),
            budget: response.budget,
            revenue: response.revenue,
            adult: response.adult,
            genres: join_names(&response.genres),
            production_companies: join_names(&response.production_companies),
            rating,
        }
    }

    /// The fallback record substituted when a metadata fetch fails
    pub fn unavailable() -> Self {
        Self {
            poster_url: String::new(),
            title: "Unavailable".to_string(),
            tagline: String::new(),
            overview: "Could not retrieve movie details.".to_string(),
            language: NA.to_string(),
            release_date: NA.to_string(),
            status: NA.to_string(),
            budget: 0,
            revenue: 0,
            adult: false,
            genres: NA.to_string(),
            production_companies: NA.to_string(),
            rating: NA.to_string(),
        }
    }
}

fn join_names(entries: &[NamedEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
