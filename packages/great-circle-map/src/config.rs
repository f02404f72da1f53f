use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Base URL of a Nominatim-compatible search API
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,

    // Nominatim rejects requests without an identifying User-Agent
    #[serde(default = "default_geocoder_user_agent")]
    pub geocoder_user_agent: String,

    #[serde(default = "default_geocoder_timeout_secs")]
    pub geocoder_timeout_secs: u64,

    // Intermediate points drawn between the two endpoints of the path
    #[serde(default = "default_path_points")]
    pub path_points: usize,

    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    #[serde(default = "default_tile_attribution")]
    pub tile_attribution: String,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            geocoder_url: default_geocoder_url(),
            geocoder_user_agent: default_geocoder_user_agent(),
            geocoder_timeout_secs: default_geocoder_timeout_secs(),
            path_points: default_path_points(),
            tile_url: default_tile_url(),
            tile_attribution: default_tile_attribution(),
        }
    }
}

fn default_port() -> u16 {
    5000
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_geocoder_user_agent() -> String {
    format!("great-circle-map/{}", env!("CARGO_PKG_VERSION"))
}

fn default_geocoder_timeout_secs() -> u64 {
    5
}

fn default_path_points() -> usize {
    100
}

fn default_tile_url() -> String {
    "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_tile_attribution() -> String {
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
        .to_string()
}
