pub mod types;
pub mod helpers;
pub mod denominations;
pub mod wiki_parse;

pub mod logger;

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::error::Error;
use app_dirs::{get_app_root, AppDataType, AppInfo};

pub const APP_INFO: AppInfo = AppInfo { name: "wikiday", author: "wikiday" };

pub fn get_create_wikiday_dir() -> Result<PathBuf, Box<dyn Error>> {
    let p = get_app_root(AppDataType::UserData, &APP_INFO)?;
    if !p.exists() {
        create_dir_all(&p)?;
    }
    Ok(p)
}
