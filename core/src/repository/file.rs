use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json;

use crate::model::player::Player;
use crate::model::tournament::Tournament;
use crate::repository::traits::{RosterRepository, TournamentRepository};

const DEFAULT_DIR_NAME: &str = ".courtside";
const ROSTER_FILE_NAME: &str = "players.json";
const TOURNAMENT_FILE_NAME: &str = "tournaments.json";

/// `base_dir` if given, otherwise `~/.courtside`.
pub fn data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    match base_dir {
        Some(dir) => Ok(dir),
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            Ok(home_dir.join(DEFAULT_DIR_NAME))
        }
    }
}

fn data_file(base_dir: Option<PathBuf>, file_name: &str) -> Result<PathBuf> {
    let mut path = data_dir(base_dir)?;
    fs::create_dir_all(&path)
        .with_context(|| format!("Could not create data directory {}", path.display()))?;
    path.push(file_name);
    Ok(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader)
        .with_context(|| format!("Could not read {}", path.display()))?;
    Ok(Some(value))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not write {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

#[derive(Clone)]
pub struct FileRosterRepository {
    file_path: PathBuf,
}

impl FileRosterRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        Ok(FileRosterRepository {
            file_path: data_file(base_dir, ROSTER_FILE_NAME)?,
        })
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl RosterRepository for FileRosterRepository {
    fn load(&self) -> Result<Option<Vec<Player>>> {
        read_json(&self.file_path)
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        write_json(&self.file_path, players)?;
        log::debug!("saved {} players to {}", players.len(), self.file_path.display());
        Ok(())
    }
}

/// `tournaments.json`, next to the roster.
#[derive(Clone)]
pub struct FileTournamentRepository {
    file_path: PathBuf,
}

impl FileTournamentRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        Ok(FileTournamentRepository {
            file_path: data_file(base_dir, TOURNAMENT_FILE_NAME)?,
        })
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl TournamentRepository for FileTournamentRepository {
    fn load(&self) -> Result<Vec<Tournament>> {
        Ok(read_json(&self.file_path)?.unwrap_or_default())
    }

    fn save(&self, tournaments: &[Tournament]) -> Result<()> {
        write_json(&self.file_path, tournaments)?;
        log::debug!("saved {} tournaments to {}", tournaments.len(), self.file_path.display());
        Ok(())
    }
}
