//! Turn-sequencing tests driven through a recording view.

use core::time::Duration;

use bjtable::{
    ActionError, Card, ConfigError, Controller, ControllerError, ControllerState, Deck, Delay,
    EntityStatus, Frame, FrameError, FrameUpdate, GameOptions, StartupInputs, Suit, View,
};

#[derive(Default)]
struct RecordingView {
    registered: Vec<Frame>,
    shown: Vec<Frame>,
    updates: Vec<FrameUpdate>,
    errors: Vec<(String, String)>,
    inputs: StartupInputs,
    confirm_quit: bool,
}

impl RecordingView {
    fn new(amount_of_bots: u8, bot_delay_enabled: bool) -> Self {
        Self {
            registered: Frame::ALL.to_vec(),
            inputs: StartupInputs {
                amount_of_bots,
                bot_delay_enabled,
            },
            ..Self::default()
        }
    }

    fn last_update(&self) -> &FrameUpdate {
        self.updates.last().unwrap()
    }
}

impl View for RecordingView {
    fn show_frame(&mut self, frame: Frame) -> Result<(), FrameError> {
        if !self.registered.contains(&frame) {
            return Err(FrameError::Unknown(frame.name()));
        }
        self.shown.push(frame);
        Ok(())
    }

    fn update_frame(&mut self, update: FrameUpdate) {
        self.updates.push(update);
    }

    fn get_inputs(&mut self) -> StartupInputs {
        self.inputs
    }

    fn request_quit(&mut self) -> bool {
        self.confirm_quit
    }

    fn show_error(&mut self, title: &str, text: &str) {
        self.errors.push((title.to_string(), text.to_string()));
    }
}

#[derive(Default)]
struct RecordingDelay {
    pauses: Vec<Duration>,
}

impl Delay for RecordingDelay {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

fn deck_from_ranks(ranks: &[u8]) -> Deck {
    let cards: Vec<Card> = ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| Card::new(Suit::ALL[i % 4], rank))
        .collect();
    Deck::from_draws(&cards)
}

fn controller(view: RecordingView) -> Controller<RecordingView, RecordingDelay> {
    let mut controller = Controller::new(view, RecordingDelay::default(), GameOptions::default());
    controller.launch().unwrap();
    controller
}

fn statuses(controller: &Controller<RecordingView, RecordingDelay>) -> Vec<EntityStatus> {
    controller
        .model()
        .entities()
        .iter()
        .map(|e| e.status())
        .collect()
}

#[test]
fn launch_shows_startup_frame() {
    let controller = controller(RecordingView::new(1, false));
    assert_eq!(controller.state(), ControllerState::Startup);
    assert_eq!(controller.view().shown, vec![Frame::Startup]);
}

#[test]
fn start_waits_for_the_player() {
    let mut controller = controller(RecordingView::new(2, false));
    controller
        .start_game_with_deck(deck_from_ranks(&[10, 10, 10, 9, 6, 5, 10, 10]))
        .unwrap();

    assert_eq!(controller.state(), ControllerState::Playing);
    assert_eq!(controller.view().shown, vec![Frame::Startup, Frame::Game]);
    assert_eq!(controller.model().current_index(), 0);
    assert!(matches!(
        controller.view().last_update(),
        FrameUpdate::Table(_)
    ));
}

#[test]
fn player_stands_on_nineteen_and_bots_bust() {
    let mut controller = controller(RecordingView::new(2, false));
    controller
        .start_game_with_deck(deck_from_ranks(&[10, 10, 10, 9, 6, 5, 10, 10]))
        .unwrap();

    controller.on_stand().unwrap();

    assert_eq!(controller.state(), ControllerState::RoundEnd);
    assert_eq!(
        statuses(&controller),
        vec![EntityStatus::Won, EntityStatus::Bust, EntityStatus::Bust]
    );
    assert_eq!(
        controller.view().shown,
        vec![Frame::Startup, Frame::Game, Frame::End]
    );
    let FrameUpdate::EndGame(stats) = controller.view().last_update() else {
        panic!("expected end game stats");
    };
    assert_eq!(stats.winners, vec![0]);
    assert!(controller.delay().pauses.is_empty());
}

#[test]
fn bot_delay_pauses_before_each_bot_action() {
    let mut controller = controller(RecordingView::new(2, true));
    controller
        .start_game_with_deck(deck_from_ranks(&[10, 10, 10, 9, 6, 5, 10, 10]))
        .unwrap();
    let updates_before = controller.view().updates.len();

    controller.on_stand().unwrap();

    let expected = GameOptions::default().bot_delay;
    assert_eq!(controller.delay().pauses, vec![expected, expected]);
    // One table refresh per paused bot action, then the end game stats.
    assert_eq!(controller.view().updates.len(), updates_before + 3);
}

#[test]
fn player_busts_and_the_bot_stands_to_win() {
    // Player 10+6, bot 10+6. The player draws 10, the bot draws 2 and
    // stands on 18.
    let mut controller = controller(RecordingView::new(1, false));
    controller
        .start_game_with_deck(deck_from_ranks(&[10, 10, 6, 6, 10, 2]))
        .unwrap();

    controller.on_hit().unwrap();

    assert_eq!(controller.state(), ControllerState::RoundEnd);
    assert_eq!(
        statuses(&controller),
        vec![EntityStatus::Bust, EntityStatus::Won]
    );
    assert_eq!(controller.model().entities()[1].compute_total(), 18);
}

#[test]
fn player_keeps_the_turn_after_a_safe_hit() {
    let mut controller = controller(RecordingView::new(1, false));
    controller
        .start_game_with_deck(deck_from_ranks(&[2, 10, 3, 9, 4, 5]))
        .unwrap();

    controller.on_hit().unwrap();

    assert_eq!(controller.state(), ControllerState::Playing);
    assert_eq!(controller.model().current_index(), 0);
    assert_eq!(controller.model().entities()[0].compute_total(), 9);
}

#[test]
fn actions_outside_a_round_are_rejected() {
    let mut controller = controller(RecordingView::new(1, false));
    assert_eq!(
        controller.on_hit().unwrap_err(),
        ControllerError::InvalidState(ControllerState::Startup)
    );
    assert_eq!(
        controller.on_stand().unwrap_err(),
        ControllerError::InvalidState(ControllerState::Startup)
    );
    assert!(controller.view().errors.is_empty());
}

#[test]
fn cannot_start_twice() {
    let mut controller = controller(RecordingView::new(1, false));
    controller
        .start_game_with_deck(deck_from_ranks(&[2, 10, 3, 9, 4, 5]))
        .unwrap();
    assert_eq!(
        controller.start_game().unwrap_err(),
        ControllerError::InvalidState(ControllerState::Playing)
    );
}

#[test]
fn too_many_bots_is_reported() {
    let mut controller = controller(RecordingView::new(8, false));
    assert_eq!(
        controller.start_game().unwrap_err(),
        ControllerError::Config(ConfigError::TooManyBots {
            requested: 8,
            max: 7,
        })
    );
    assert_eq!(controller.state(), ControllerState::Startup);
    assert_eq!(controller.view().errors.len(), 1);
    assert_eq!(controller.view().errors[0].0, "Invalid settings");
}

#[test]
fn empty_deck_during_bot_turn_aborts_the_round() {
    // Player 10+9, bot 10+5 has to hit with nothing left.
    let mut controller = controller(RecordingView::new(1, false));
    controller
        .start_game_with_deck(deck_from_ranks(&[10, 10, 9, 5]))
        .unwrap();

    let err = controller.on_stand().unwrap_err();

    assert_eq!(err, ControllerError::Action(ActionError::NoCards));
    assert_eq!(controller.state(), ControllerState::RoundEnd);
    assert_eq!(controller.view().errors.len(), 1);
    assert_eq!(controller.view().errors[0].0, "Deck exhausted");

    controller.goto_start_frame().unwrap();
    assert_eq!(controller.state(), ControllerState::Startup);
}

#[test]
fn missing_frame_is_a_wiring_error() {
    let mut view = RecordingView::new(1, false);
    view.registered = vec![Frame::Startup];
    let mut controller = controller(view);

    assert_eq!(
        controller.start_game().unwrap_err(),
        ControllerError::Frame(FrameError::Unknown("Game_frame"))
    );
    assert_eq!(controller.state(), ControllerState::Startup);
    assert_eq!(controller.view().errors[0].0, "Missing frame");
}

#[test]
fn quit_needs_confirmation() {
    let mut controller = controller(RecordingView::new(1, false));
    assert!(!controller.quit_program());
    assert_eq!(controller.state(), ControllerState::Startup);

    controller.view_mut().confirm_quit = true;
    assert!(controller.quit_program());
    assert_eq!(controller.state(), ControllerState::Terminated);
    assert_eq!(
        controller.goto_start_frame().unwrap_err(),
        ControllerError::InvalidState(ControllerState::Terminated)
    );
}

#[test]
fn shuffled_games_run_to_the_end() {
    for seed in 0..20 {
        let options = GameOptions::default().with_seed(seed);
        let mut controller =
            Controller::new(RecordingView::new(3, false), RecordingDelay::default(), options);
        controller.launch().unwrap();
        controller.start_game().unwrap();
        assert_eq!(controller.state(), ControllerState::Playing);

        controller.on_stand().unwrap();

        assert_eq!(controller.state(), ControllerState::RoundEnd);
        assert!(
            controller
                .model()
                .entities()
                .iter()
                .all(|e| e.status().is_terminal())
        );
        let FrameUpdate::EndGame(stats) = controller.view().last_update() else {
            panic!("expected end game stats");
        };
        for &winner in &stats.winners {
            assert_eq!(stats.entities[winner].status, EntityStatus::Won);
        }

        // Another game can start straight from the end frame.
        controller.start_game().unwrap();
        assert_eq!(controller.state(), ControllerState::Playing);
    }
}
