//! Reading and writing the game snapshot file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::StoreError;
use crate::game::GameState;

/// Load the game stored at `path`. A missing file is a fresh game.
pub fn load(path: &Path) -> Result<GameState, StoreError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no saved game, starting fresh");
            return Ok(GameState::initial());
        }
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    GameState::from_json(&json).map_err(|e| StoreError::Snapshot {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `state` to `path`, replacing the previous file atomically.
pub fn save(path: &Path, state: &GameState) -> Result<(), StoreError> {
    let json = state.to_json().map_err(|e| StoreError::Snapshot {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, json).map_err(write_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    debug!(path = %path.display(), turn = state.turn(), "game saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;

    #[test]
    fn test_missing_file_is_a_new_game() {
        let dir = tempfile::tempdir().unwrap();
        let state = load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("game.json");

        let mut state = GameState::initial();
        state.apply(3).unwrap();
        state.apply(2).unwrap();
        save(&path, &state).unwrap();

        assert_eq!(load(&path).unwrap(), state);
        assert!(!dir.path().join("nested").join("game.json.tmp").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        // A non-empty directory in the way makes the rename fail.
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        let result = save(&path, &GameState::initial());

        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert!(!dir.path().join("game.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        fs::write(
            &path,
            r#"{"player1_board": 1, "player2_board": 1, "peaks": [1, 7, 14, 21, 28, 35, 42], "turn": 1}"#,
        )
        .unwrap();

        assert!(matches!(
            load(&path),
            Err(StoreError::Snapshot {
                source: StateError::OverlappingDiscs(1),
                ..
            })
        ));
    }
}
