use cellsnake::config::GridSize;
use cellsnake::game::{GameState, GameStatus};
use cellsnake::grid::Position;
use cellsnake::input::Direction;

#[test]
fn stepwise_food_grab_and_wall_collision() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 8,
            height: 6,
        },
        42,
    )
    .expect("8x6 board should construct");

    // The head starts at the center; force the food right next to it.
    assert_eq!(state.head(), Position { x: 4, y: 3 });
    state.place_food(Position { x: 5, y: 3 });

    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 5);
    assert_eq!(state.head(), Position { x: 5, y: 3 });
    assert!(
        state
            .cell_at(Position { x: 5, y: 3 })
            .expect("in bounds")
            .is_body()
    );

    // Park the respawned food away from the escape route.
    state.place_food(Position { x: 1, y: 1 });

    state.set_direction(Direction::Up);
    state.tick();
    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.head(), Position { x: 5, y: 1 });

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert!(!state.is_running());
    assert_eq!(state.head(), Position { x: 5, y: 0 });
    assert!(
        state
            .cell_at(Position { x: 5, y: 0 })
            .expect("in bounds")
            .is_body()
    );
}
