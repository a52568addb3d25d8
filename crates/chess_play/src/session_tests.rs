use super::*;

fn run(session: &mut Session, line: &str) -> String {
    let mut out = Vec::new();
    session.execute(Command::parse(line), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn session_with(config: PlayConfig) -> Session {
    Session::new(config, None).unwrap()
}

#[test]
fn test_parse_commands() {
    assert_eq!(Command::parse("  "), Command::Empty);
    assert_eq!(Command::parse("AI"), Command::Ai);
    assert_eq!(Command::parse("mode hvh"), Command::Mode(Mode::HumanVsHuman));
    assert_eq!(Command::parse("mode human-vs-ai"), Command::Mode(Mode::HumanVsAi));
    assert!(matches!(Command::parse("mode chaos"), Command::Invalid(_)));
    assert_eq!(Command::parse(" e2e4 "), Command::Move("e2e4".to_string()));
    assert_eq!(Command::parse("quit"), Command::Quit);
}

#[test]
fn test_accepted_move_is_logged() {
    let mut session = session_with(PlayConfig::default());

    let text = run(&mut session, "e2e4");

    assert!(text.contains("e2e4: Pawn advances to e4"));
    assert!(text.contains("Black to move"));
    assert_eq!(session.history(), ["e2e4"]);
    assert!(session.last_explanation().unwrap().contains("center"));
}

#[test]
fn test_rejected_move_is_reported_and_not_logged() {
    let mut session = session_with(PlayConfig::default());

    let illegal = run(&mut session, "e2e5");
    let garbage = run(&mut session, "zz99");

    assert!(illegal.contains("not a legal move"));
    assert!(garbage.contains("Could not understand"));
    assert!(session.history().is_empty());
    assert_eq!(session.last_explanation(), None);
}

#[test]
fn test_ai_needs_ai_mode() {
    let mut session = session_with(PlayConfig {
        mode: Mode::HumanVsHuman,
        ..PlayConfig::default()
    });

    let text = run(&mut session, "ai");
    assert!(text.contains("mode hvai"));
    assert!(session.history().is_empty());

    run(&mut session, "mode hvai");
    assert_eq!(session.mode(), Mode::HumanVsAi);
    let text = run(&mut session, "ai");
    assert!(text.contains("AI (random) plays"));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_auto_reply() {
    let mut session = session_with(PlayConfig {
        auto_reply: true,
        ..PlayConfig::default()
    });

    run(&mut session, "e2e4");

    assert_eq!(session.history().len(), 2);
    assert_eq!(session.game().move_number(), 2);
}

#[test]
fn test_game_over_is_announced() {
    let mut session = session_with(PlayConfig::default());
    for mv in ["f2f3", "e7e5", "g2g4"] {
        run(&mut session, mv);
    }

    let text = run(&mut session, "d8h4");
    assert!(text.contains("Game over: Black wins by checkmate (0-1)"));

    let text = run(&mut session, "ai");
    assert!(text.contains("Game over"));
    assert_eq!(session.history().len(), 4);
}

#[test]
fn test_history_and_restart() {
    let mut session = session_with(PlayConfig::default());
    for mv in ["e2e4", "e7e5", "g1f3"] {
        run(&mut session, mv);
    }

    let text = run(&mut session, "history");
    assert!(text.contains("1. e2e4 e7e5"));
    assert!(text.contains("2. g1f3"));

    let text = run(&mut session, "restart");
    assert!(text.contains("New game started."));
    assert!(session.history().is_empty());
    assert_eq!(session.last_explanation(), None);
    assert_eq!(session.game().legal_moves().len(), 20);
}

#[test]
fn test_restart_returns_to_custom_start() {
    let fen = "4k3/8/8/8/8/8/8/R3K3 w Q - 0 1";
    let mut session = Session::new(PlayConfig::default(), Some(fen.to_string())).unwrap();

    run(&mut session, "a1a7");
    run(&mut session, "restart");

    assert_eq!(session.game().board().fen(), fen);
}

#[test]
fn test_bad_start_position_is_an_error() {
    assert!(Session::new(PlayConfig::default(), Some("garbage".to_string())).is_err());
}

#[test]
fn test_quit() {
    let mut session = session_with(PlayConfig::default());
    let mut out = Vec::new();
    assert_eq!(session.execute(Command::Quit, &mut out).unwrap(), Flow::Quit);
}
