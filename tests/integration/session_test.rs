//! End-to-end annotation session tests: editor state, persistence,
//! and playback control wired together the way the host glue does it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use avc::player::{
    apply_intent, map_key_event, ControlIntent, FocusTarget, PlaybackController, PlayerHandle,
};
use avc::review::{
    extract_video_id, CommentRecord, EditorState, GameInfo, HomeAway, Period, ReviewStore,
};

/// Minimal player double for driving the controller.
struct ScriptedPlayer {
    time: f64,
    duration: f64,
    paused: bool,
}

impl ScriptedPlayer {
    fn new(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration,
            paused: true,
        }
    }
}

impl PlayerHandle for ScriptedPlayer {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn paused(&self) -> bool {
        self.paused
    }
}

fn record(sec: u64, comment: &str) -> CommentRecord {
    CommentRecord {
        video_sec: sec,
        rest_game_clock: None,
        comment: comment.to_string(),
        home_away: HomeAway::Home,
    }
}

#[test]
fn annotation_session_persists_and_restores() {
    let tmp = TempDir::new().unwrap();
    let store = ReviewStore::new(tmp.path().join("reviews"));
    let video_id = extract_video_id("https://basketball.example.jp/lives/505589?t=90").unwrap();

    // First session: nothing stored yet.
    let mut state = EditorState::new();
    assert!(store.load(&video_id).unwrap().is_none());
    state.mark_loaded();

    state.set_game_info(GameInfo {
        game_id: video_id.clone(),
        home_team_name: "Hawks".to_string(),
        away_team_name: "Wolves".to_string(),
    });
    state.select_period(Period::Second);
    let sec = state.capture(754.6);
    state.confirm(sec, record(sec, "great screen"));

    let snapshot = state.take_dirty().expect("changes should queue a save");
    store.save(&video_id, &snapshot).unwrap();

    // Second session: the stored document comes back verbatim and the
    // load itself never queues a save.
    let mut restored = EditorState::new();
    let stored = store.load(&video_id).unwrap().unwrap();
    restored.load_from(stored);

    assert!(restored.is_loaded());
    assert!(restored.take_dirty().is_none());
    assert_eq!(restored.records(Period::Second).len(), 1);
    assert_eq!(restored.records(Period::Second)[0].video_sec, 754);
    assert_eq!(restored.game_info().home_team_name, "Hawks");
}

#[test]
fn clicking_a_record_seeks_the_player() {
    let mut state = EditorState::new();
    state.mark_loaded();
    state.confirm(0, record(412, "turnover"));

    let mut controller = PlaybackController::new(ScriptedPlayer::new(7200.0));
    let target = EditorState::jump_target(&state.records(Period::First)[0]);
    apply_intent(&mut controller, ControlIntent::SeekTo(target));

    assert_eq!(controller.current_time(), 412.0);
}

#[test]
fn arrow_keys_drive_the_player_unless_typing() {
    // Tuning flows from the config sections exactly as host glue
    // wires it: fps to the controller, steps to the key mapping.
    let config = avc::Config::default();
    let steps = config.skip_steps();
    let mut controller =
        PlaybackController::with_fps(ScriptedPlayer::new(3600.0), config.player.fps);
    controller.seek_to(100.0);

    let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
    let shift_left = KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT);

    if let Some(intent) = map_key_event(right, FocusTarget::Page, steps) {
        apply_intent(&mut controller, intent);
    }
    assert_eq!(controller.current_time(), 101.0);

    if let Some(intent) = map_key_event(shift_left, FocusTarget::Page, steps) {
        apply_intent(&mut controller, intent);
    }
    assert_eq!(controller.current_time(), 100.5);

    // Typing a comment must never move the video.
    assert!(map_key_event(right, FocusTarget::TextInput, steps).is_none());
}

#[test]
fn skips_before_the_player_is_ready_change_nothing() {
    let mut controller = PlaybackController::new(ScriptedPlayer::new(f64::NAN));
    controller.skip(5.0);
    controller.seek_to(100.0);
    assert_eq!(controller.current_time(), 0.0);
}

#[test]
fn reviews_for_different_videos_do_not_collide() {
    let tmp = TempDir::new().unwrap();
    let store = ReviewStore::new(tmp.path());

    let mut a = EditorState::new();
    a.mark_loaded();
    a.confirm(0, record(10, "game one"));
    store.save("111", &a.take_dirty().unwrap()).unwrap();

    let mut b = EditorState::new();
    b.mark_loaded();
    b.select_period(Period::Fourth);
    b.confirm(0, record(2400, "game two"));
    store.save("222", &b.take_dirty().unwrap()).unwrap();

    assert_eq!(store.list().unwrap(), vec!["111", "222"]);
    let one = store.load("111").unwrap().unwrap();
    let two = store.load("222").unwrap().unwrap();
    assert_eq!(one.periods.get(Period::First)[0].comment, "game one");
    assert_eq!(two.periods.get(Period::Fourth)[0].comment, "game two");
}
