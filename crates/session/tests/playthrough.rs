use history::HistorySnapshot;
use session::{GameSession, SessionConfig, SessionError, SessionSnapshot};
use solitaire_core::{
    Card, CardSource, Column, DrawMode, FreeCells, GameConfig, GameError, GamePhase, GameState,
    Move, MoveRejection, Rank, Suit,
};

fn card(suit: Suit, value: u8) -> Card {
    Card::new(suit, Rank::from_value(value).expect("rank in range"))
}

/// Four columns, each one suit from King at the bottom to Ace on top.
fn one_step_from_solved() -> GameState {
    let tableau = Suit::ALL
        .iter()
        .map(|&suit| Column::new((1..=13).rev().map(|value| card(suit, value)).collect()))
        .collect();
    GameState::freecell_from_parts(1, tableau, FreeCells::new(4), Default::default())
}

fn session_from(state: GameState) -> GameSession {
    let snapshot = SessionSnapshot {
        config: SessionConfig::default().with_seed(state.seed),
        history: HistorySnapshot {
            states: vec![state],
            current_index: Some(0),
        },
    };
    GameSession::restore(snapshot, None).expect("single state history restores")
}

/// End-to-end: deal, play to a win, then confirm the won game is frozen.
#[test]
fn freecell_deal_to_win() {
    // ================================================================
    // PHASE 1: Deal
    // ================================================================
    let session = GameSession::new(SessionConfig::default().with_seed(1));
    let dealt = session.state().expect("dealt state");
    assert_eq!(dealt.phase(), GamePhase::Dealt);
    assert_eq!(dealt.card_count(), 52);
    assert!(dealt.is_complete_deck(), "deal overlaps or loses cards");
    let lengths: Vec<usize> = dealt.tableau.iter().map(Column::len).collect();
    assert_eq!(lengths, [7, 7, 7, 7, 6, 6, 6, 6]);

    // ================================================================
    // PHASE 2: Play every card home
    // ================================================================
    let mut session = session_from(one_step_from_solved());
    let played = session.autoplay().expect("autoplay succeeds");
    assert_eq!(played, 52);

    let won = session.state().expect("won state").clone();
    assert!(won.is_won());
    assert_eq!(won.phase(), GamePhase::Won);
    assert_eq!(won.moves, 52);
    assert!(won.tableau.iter().all(Column::is_empty));

    // ================================================================
    // PHASE 3: Won is absorbing
    // ================================================================
    let attempts = [
        Move::to_tableau(CardSource::Foundation(0), 0),
        Move::to_free_cell(CardSource::Tableau(0), 0),
        Move::tableau(0, 0, 1),
    ];
    for mv in attempts {
        let error = session.apply(&mv).expect_err("won game accepts nothing");
        assert_eq!(error.rejection(), Some(&MoveRejection::GameWon));
        assert_eq!(session.state().expect("state"), &won);
    }
    assert_eq!(session.autoplay().expect("autoplay"), 0);
    assert!(!session.is_stuck().expect("state"));

    // ================================================================
    // PHASE 4: Undo out of the win
    // ================================================================
    let previous = session.undo().expect("one move back");
    assert_eq!(previous.phase(), GamePhase::InProgress);
    assert_eq!(previous.moves, 51);
    assert!(session.can_redo());
}

#[test]
fn klondike_stock_cycles_in_order() {
    let config = SessionConfig::new(GameConfig::klondike(DrawMode::Three)).with_seed(5);
    let mut session = GameSession::new(config);

    let dealt = session.state().expect("dealt").clone();
    let original_stock = dealt.stock().expect("klondike stock").stock().to_vec();
    assert_eq!(original_stock.len(), 24);
    for (index, column) in dealt.tableau.iter().enumerate() {
        assert_eq!(column.len(), index + 1);
        assert_eq!(column.face_down_count(), index);
    }

    // 24 cards, three at a time.
    for _ in 0..8 {
        session.apply(&Move::Draw).expect("stock has cards");
    }
    let error = session.apply(&Move::Draw).expect_err("stock is exhausted");
    assert_eq!(error.rejection(), Some(&MoveRejection::StockEmpty));

    session.apply(&Move::Recycle).expect("waste recycles");
    let pile = session.state().expect("state").stock().expect("stock").clone();
    assert_eq!(pile.stock(), original_stock.as_slice());
    assert!(pile.waste().is_empty());
    assert_eq!(pile.passes, 1);
    assert!(session.state().expect("state").is_complete_deck());
}

#[test]
fn cards_are_conserved_through_play() {
    for seed in 1..=10 {
        for game in [GameConfig::freecell(), GameConfig::klondike(DrawMode::One)] {
            let mut session = GameSession::new(SessionConfig::new(game).with_seed(seed));
            let ids = session.state().expect("state").card_ids();

            for step in 0..150 {
                let moves = session.legal_moves().expect("state");
                let Some(mv) = moves.get(step % moves.len().max(1)).copied() else {
                    break;
                };
                session.apply(&mv).expect("listed moves are legal");
                assert_eq!(session.state().expect("state").card_ids(), ids);
            }

            // Rejections leave every card where it was.
            let before = session.state().expect("state").clone();
            let _ = session.apply(&Move::tableau(0, 0, 0));
            assert_eq!(session.state().expect("state"), &before);
        }
    }
}

#[test]
fn same_seed_same_game() {
    let config = SessionConfig::default().with_seed(-42);
    let mut first = GameSession::new(config.clone());
    let mut second = GameSession::new(config);

    let digest = |session: &GameSession| {
        hex::encode(session.state().expect("state").layout_digest())
    };
    assert_eq!(digest(&first), digest(&second));

    for _ in 0..20 {
        let Some(mv) = first.hint().expect("state") else {
            break;
        };
        assert_eq!(second.hint().expect("state"), Some(mv));
        first.apply(&mv).expect("hint is legal");
        second.apply(&mv).expect("hint is legal");
    }
    assert_eq!(first.state().expect("state"), second.state().expect("state"));

    let other = GameSession::new(SessionConfig::default().with_seed(-41));
    assert_ne!(digest(&first), digest(&other));
}

#[test]
fn session_json_survives_restart_with_smaller_limit() {
    let mut session = GameSession::new(SessionConfig::default().with_seed(3));
    for cell in 0..4 {
        session
            .apply(&Move::to_free_cell(CardSource::Tableau(cell), cell))
            .expect("free cell open");
    }
    let json = session.to_json().expect("serializes");

    let restored = GameSession::from_json(&json, Some(2)).expect("restores");
    assert_eq!(restored.history().len(), 2);
    assert_eq!(restored.config().history_limit, 2);
    assert_eq!(
        restored.state().expect("state"),
        session.state().expect("state")
    );

    let broken = GameSession::from_json("{\"config\":", None);
    assert!(matches!(broken, Err(SessionError::Json(_))));
}

#[test]
fn restore_rejects_duplicated_cards() {
    let ace = card(Suit::Spades, 1);
    let corrupt = GameState::freecell_from_parts(
        1,
        vec![Column::new(vec![ace]), Column::new(vec![ace])],
        FreeCells::new(4),
        Default::default(),
    );
    let dealt = GameSession::new(SessionConfig::default().with_seed(1))
        .state()
        .expect("dealt")
        .clone();

    let snapshot = SessionSnapshot {
        config: SessionConfig::default().with_seed(1),
        history: HistorySnapshot {
            states: vec![dealt, corrupt],
            current_index: Some(0),
        },
    };
    let json = serde_json::to_string(&snapshot).expect("serializes");

    let error = GameSession::from_json(&json, None).expect_err("duplicate ace is refused");
    assert!(matches!(error, SessionError::CorruptState { index: 1 }));
    assert_eq!(error.error_code(), "SESSION_CORRUPT_STATE");
}
