use shared::Candidate;
use time::Duration;

pub struct Config {
    pub api_base_url: &'static str,
    pub ranking_size: usize,
    pub vote_timeout_secs: i64,
    pub sweep_interval_ms: u32,
    pub vote_animation_ms: u32,
    pub log_filter: &'static str,
    pub mentor_asset_dir: &'static str,
    pub joke_image: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "https://2025sprvotingsitebackend-production.up.railway.app",
            ranking_size: 3,
            vote_timeout_secs: 10,
            sweep_interval_ms: 1_000,
            vote_animation_ms: 1_000,
            log_filter: "info",
            mentor_asset_dir: "/assets/mentors",
            joke_image: "/assets/mentors-joke/ayapo.svg",
        }
    }

    pub fn vote_timeout(&self) -> Duration {
        Duration::seconds(self.vote_timeout_secs)
    }

    pub fn mentor_image(&self, candidate: &Candidate, joke: bool) -> String {
        if joke {
            self.joke_image.to_string()
        } else {
            format!("{}/{}", self.mentor_asset_dir, candidate.display_ref)
        }
    }
}

pub const CONFIG: Config = Config::new();
