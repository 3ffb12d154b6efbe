pub struct Env {
    pub database_url: String,
    pub database_max_connections: u32,
    pub places_fixture: String,
    pub search_radius: u32,
}

pub const DEFAULT_SEARCH_RADIUS: u32 = 5000;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 25;
pub const PASSWORD_SYMBOLS: [char; 12] =
    ['!', '@', '#', '$', '%', '^', '&', '*', '-', '_', '+', '='];

impl Env {
    fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://dinnerdate.db?mode=rwc".to_string());
        let database_max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32 integer");

        let places_fixture = std::env::var("PLACES_FIXTURE")
            .unwrap_or_else(|_| "fixtures/nearby_search.json".to_string());
        let search_radius = std::env::var("SEARCH_RADIUS")
            .map(|v| v.parse::<u32>().expect("SEARCH_RADIUS must be a valid u32 integer"))
            .unwrap_or(DEFAULT_SEARCH_RADIUS);

        Env { database_url, database_max_connections, places_fixture, search_radius }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
