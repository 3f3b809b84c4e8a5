use std::io::Write;
use std::time::{Duration, Instant};

use assert_matches::assert_matches;
use keyshooter::config::{Config, ConfigStore, FileConfigStore};
use keyshooter::history::SessionLog;
use keyshooter::language::WordSource;
use keyshooter::{Game, GameError, GameEvent, GameSettings, KeyInput, WordBank};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::{tempdir, NamedTempFile};

fn seeded(words: &[&str], settings: GameSettings, now: Instant) -> Game {
    let bank = WordBank::new(words.iter().copied()).unwrap();
    Game::with_rng(bank, settings, now, StdRng::seed_from_u64(99))
}

#[test]
fn word_file_to_finished_session() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "laser\n\nrobot\n").unwrap();

    let words = WordSource::File(file.path().to_path_buf()).load().unwrap();
    let bank = WordBank::new(words).unwrap();
    assert_eq!(bank.len(), 2);

    let t0 = Instant::now();
    let mut game = Game::with_rng(bank, GameSettings::default(), t0, StdRng::seed_from_u64(5));
    game.on_tick(t0);
    let target = game.active_words()[0].text.clone();

    for c in target.to_lowercase().chars() {
        game.on_key(KeyInput::Letter(c));
    }

    let summary = game.finish(t0 + Duration::from_secs(120));
    assert_eq!(summary.score, 1);
    assert_eq!(summary.words_per_minute, 0.5);

    let dir = tempdir().unwrap();
    let log = SessionLog::with_path(dir.path().join("history.csv"));
    log.append(&summary, game.spawn_interval_secs()).unwrap();
    let contents = std::fs::read_to_string(log.path()).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.lines().nth(1).unwrap().ends_with(",1,120.00,0.50,3.0"));
}

#[test]
fn empty_word_file_cannot_start_a_game() {
    let file = NamedTempFile::new().unwrap();
    let words = WordSource::File(file.path().to_path_buf()).load().unwrap();
    assert_matches!(WordBank::new(words), Err(GameError::EmptyBank));
}

#[test]
fn duplicate_words_clear_oldest_first() {
    let t0 = Instant::now();
    let settings = GameSettings {
        spawn_interval_secs: 1.0,
        ..GameSettings::default()
    };
    let mut game = seeded(&["twin"], settings, t0);
    game.on_tick(t0);
    game.on_tick(t0 + Duration::from_secs(1));
    let ids: Vec<_> = game.active_words().iter().map(|w| w.id).collect();
    assert_eq!(ids.len(), 2);

    for c in "twin".chars() {
        game.write(c);
    }

    assert_eq!(game.score(), 1);
    assert_eq!(game.active_words().len(), 1);
    assert_eq!(game.active_words()[0].id, ids[1]);
    assert_matches!(game.drain_events().last(), Some(GameEvent::WordMatched(w)) if w.id == ids[0]);
}

#[test]
fn every_match_clears_input_and_removes_exactly_one_word() {
    let t0 = Instant::now();
    let settings = GameSettings {
        spawn_interval_secs: 1.0,
        ..GameSettings::default()
    };
    let mut game = seeded(&["alpha", "bravo", "delta", "gamma"], settings, t0);
    for s in 0..8 {
        game.on_tick(t0 + Duration::from_secs(s));
    }

    let mut expected_score = 0;
    while let Some(word) = game.active_words().first().cloned() {
        let before = game.active_words().len();
        for c in word.text.chars() {
            game.write(c);
        }
        expected_score += 1;
        assert_eq!(game.score(), expected_score);
        assert_eq!(game.active_words().len(), before - 1);
        assert_eq!(game.typed(), "");
    }
    assert_eq!(expected_score, 8);
}

#[test]
fn mistakes_can_be_erased() {
    let t0 = Instant::now();
    let mut game = seeded(&["rapid"], GameSettings::default(), t0);
    game.on_tick(t0);

    for c in "rapx".chars() {
        game.write(c);
    }
    game.backspace();
    for c in "id".chars() {
        game.write(c);
    }

    assert_eq!(game.score(), 1);
}

#[test]
fn stored_config_drives_the_game() {
    let dir = tempdir().unwrap();
    let store = FileConfigStore::with_path(dir.path().join("config.json"));
    store
        .save(&Config {
            spawn_interval_secs: 1.0,
            language: "english".into(),
            ..Config::default()
        })
        .unwrap();

    let config = store.load();
    let bank = WordBank::new(config.word_source().load().unwrap()).unwrap();
    let t0 = Instant::now();
    let mut game = Game::new(bank, config.game_settings(), t0);

    game.on_tick(t0);
    game.on_tick(t0 + Duration::from_secs(1));
    assert_eq!(game.active_words().len(), 2);
}
