//! Drive the command loop with scripted input

use game::{run, DisplayConfig, GameConfig};
use puzzle::{Difficulty, Game, Settings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{Cursor, Write};

fn new_game(seed: u64) -> Game<StdRng> {
    Game::new(Settings::default(), StdRng::seed_from_u64(seed)).unwrap()
}

fn play(game: &mut Game<StdRng>, script: &str, round_limit: Option<u32>) -> (puzzle::Score, String) {
    let mut output = Vec::new();
    let score = run(
        game,
        &DisplayConfig::default(),
        round_limit,
        Cursor::new(script.to_string()),
        &mut output,
    )
    .unwrap();
    (score, String::from_utf8(output).unwrap())
}

#[test]
fn test_correct_answer_advances_round() {
    let mut game = new_game(1);
    let answer = game.round().options().correct_index() + 1;

    let (score, output) = play(&mut game, &format!("{answer}\nq\n"), None);

    assert!(output.contains("Correct!"));
    assert!(output.contains("Round 2"));
    assert_eq!(score.correct, 1);
    assert_eq!(score.rounds_played, 1);
    assert_eq!(game.round().id(), 1);
}

#[test]
fn test_wrong_answer_stays_on_round() {
    let mut game = new_game(2);
    let wrong = (game.round().options().correct_index() + 1) % 4 + 1;
    let view = game.round().view();

    let (score, output) = play(&mut game, &format!("{wrong}\n"), None);

    assert!(output.contains(&format!("Incorrect. The correct view is {view}. Try again!")));
    assert_eq!(score.incorrect, 1);
    assert_eq!(score.rounds_played, 0);
    assert_eq!(game.round().id(), 0);
}

#[test]
fn test_bad_input_does_not_end_session() {
    let mut game = new_game(3);
    let (score, output) = play(&mut game, "9\nbanana\nr\nq\n", None);

    assert!(output.contains("Option 9 out of range, choose 1-4"));
    assert!(output.contains("Unknown command \"banana\""));
    assert_eq!(score.rounds_played, 1);
    assert_eq!(score.correct + score.incorrect, 0);
}

#[test]
fn test_round_limit_stops_session() {
    let mut game = new_game(4);
    let (score, _) = play(&mut game, "r\nr\nr\nr\n", Some(2));
    assert_eq!(score.rounds_played, 2);
}

#[test]
fn test_config_file_loads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[puzzle]\ndifficulty = \"hard\"\ntoast_ms = 200").unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.puzzle.difficulty, Difficulty::Hard);
    assert_eq!(config.puzzle.toast_ms, 200);
    assert_eq!(config.display, DisplayConfig::default());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
