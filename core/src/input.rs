use std::collections::HashMap;
use anyhow::{anyhow, Result};

use crate::model::player::NewPlayer;
use crate::model::tournament::NewTournament;
use crate::time::parse_date;

pub const PLAYER_KEYS: [&str; 4] = ["address", "contact", "dob", "position"];
pub const TOURNAMENT_KEYS: [&str; 3] = ["from", "to", "venue"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub name: String,
    pub metadata: HashMap<String, String>,
}

pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut name_parts = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        name_parts.push(arg.as_str());
    }

    ParsedInput {
        name: name_parts.join(" "),
        metadata,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// `add Rhythm Pawar dob:2010-10-20 pos:"Point Guard" con:7568913051`
///
/// Unknown or ambiguous keys come back as warnings; a bad `dob` is an error.
pub fn parse_new_player(args: &[String]) -> Result<(NewPlayer, Vec<String>)> {
    let parsed = parse_args(args);
    let name = parsed.name.trim().to_string();
    if name.is_empty() {
        return Err(anyhow!("Player name is required"));
    }

    let mut warnings = Vec::new();
    let mut fields: HashMap<String, String> = HashMap::new();
    for (key, value) in parsed.metadata {
        match expand_key(&key, &PLAYER_KEYS) {
            Ok(full_key) => {
                fields.insert(full_key, value.trim().to_string());
            }
            Err(e) => warnings.push(e.to_string()),
        }
    }

    let dob = match fields.remove("dob").filter(|v| !v.is_empty()) {
        Some(raw) => Some(parse_date(&raw)?),
        None => None,
    };
    let mut text = |key: &str| fields.remove(key).filter(|v| !v.is_empty());

    let player = NewPlayer {
        name,
        position: text("position"),
        contact: text("contact"),
        address: text("address"),
        dob,
    };
    Ok((player, warnings))
}

/// `tournaments add Youth National Championship from:2024-06-15 to:20-06-2024 venue:Ahmedabad`
pub fn parse_new_tournament(args: &[String]) -> Result<(NewTournament, Vec<String>)> {
    let parsed = parse_args(args);
    let mut warnings = Vec::new();
    let mut fields: HashMap<String, String> = HashMap::new();
    for (key, value) in parsed.metadata {
        match expand_key(&key, &TOURNAMENT_KEYS) {
            Ok(full_key) => {
                fields.insert(full_key, value.trim().to_string());
            }
            Err(e) => warnings.push(e.to_string()),
        }
    }

    let mut date = |key: &str| -> Result<Option<chrono::NaiveDate>> {
        match fields.remove(key).filter(|v| !v.is_empty()) {
            Some(raw) => Ok(Some(parse_date(&raw)?)),
            None => Ok(None),
        }
    };
    let from = date("from")?;
    let to = date("to")?;

    let tournament = NewTournament {
        name: parsed.name.trim().to_string(),
        from,
        to,
        venue: fields.remove("venue").filter(|v| !v.is_empty()),
    };
    Ok((tournament, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_simple() {
        let parsed = parse_args(&args(&["Rhythm", "Pawar", "dob:2010-10-20", "position:Point Guard"]));
        assert_eq!(parsed.name, "Rhythm Pawar");
        assert_eq!(parsed.metadata.get("dob"), Some(&"2010-10-20".to_string()));
        assert_eq!(parsed.metadata.get("position"), Some(&"Point Guard".to_string()));
    }

    #[test]
    fn test_expand_key() {
        assert_eq!(expand_key("d", &PLAYER_KEYS).unwrap(), "dob");
        assert_eq!(expand_key("pos", &PLAYER_KEYS).unwrap(), "position");
        assert_eq!(expand_key("con", &PLAYER_KEYS).unwrap(), "contact");
        assert_eq!(expand_key("address", &PLAYER_KEYS).unwrap(), "address");

        // Unknown
        assert!(expand_key("x", &PLAYER_KEYS).is_err());
        // Ambiguous
        assert!(expand_key("a", &["address", "age"]).is_err());
    }

    #[test]
    fn test_parse_new_player() {
        let (player, warnings) = parse_new_player(&args(&[
            "Kavya", "Reddy", "d:25-08-2004", "pos:Center", "addr:12 Hillside, Chennai", "team:A",
        ]))
        .unwrap();

        assert_eq!(player.name, "Kavya Reddy");
        assert_eq!(player.dob, NaiveDate::from_ymd_opt(2004, 8, 25));
        assert_eq!(player.position.as_deref(), Some("Center"));
        assert_eq!(player.address.as_deref(), Some("12 Hillside, Chennai"));
        assert_eq!(player.contact, None);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_parse_new_tournament() {
        let (tournament, warnings) = parse_new_tournament(&args(&[
            "Senior", "Nationals", "f:2024-12-10", "t:15-12-2024", "v:Delhi", "tier:A",
        ]))
        .unwrap();

        assert_eq!(tournament.name, "Senior Nationals");
        assert_eq!(tournament.from, NaiveDate::from_ymd_opt(2024, 12, 10));
        assert_eq!(tournament.to, NaiveDate::from_ymd_opt(2024, 12, 15));
        assert_eq!(tournament.venue.as_deref(), Some("Delhi"));
        assert_eq!(warnings.len(), 1);

        assert!(parse_new_tournament(&args(&["Cup", "from:soon"])).is_err());
    }

    #[test]
    fn test_parse_new_player_errors() {
        assert!(parse_new_player(&args(&["dob:2010-10-20"])).is_err());
        assert!(parse_new_player(&args(&["Kavya", "dob:someday"])).is_err());
    }
}
