use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub profile: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        let catalog_path = env::var("BOOKS_CSV").map(PathBuf::from).unwrap_or_else(|_| {
            if profile == "default" {
                PathBuf::from("books.csv")
            } else {
                PathBuf::from(format!("books_{}.csv", profile))
            }
        });

        Self {
            catalog_path,
            profile,
        }
    }
}
