//! Golden Bull entry point
//!
//! Native: a headless run through both mini-games. Each level gets a few
//! seconds of random "idle" taps, then the solver finishes it. Progress is
//! written to the JSON store (GOLDEN_BULL_DATA, default golden_bull_store.json).
//!
//! Usage: golden-bull [seed]

#[cfg(not(target_arch = "wasm32"))]
mod native_demo {
    use std::rc::Rc;
    use std::time::Duration;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use golden_bull::consts::*;
    use golden_bull::routing::{Pos, audit_levels, solve};
    use golden_bull::share::{LogShare, share_quietly};
    use golden_bull::tiles::solve_swaps;
    use golden_bull::{
        KeyValueStore, MemoryStore, Phase, RoutingController, Settings, TileController,
        format_clock, platform,
    };

    /// Random taps per level before the solver takes over
    const IDLE_TAPS: usize = 6;
    /// Simulated time between idle taps
    const IDLE_STEP: Duration = Duration::from_millis(700);

    pub fn run() {
        platform::init_logging();

        let seed = std::env::args()
            .nth(1)
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(12345);
        let mut rng = Pcg32::seed_from_u64(seed);

        let store: Rc<dyn KeyValueStore> = match platform::open_store() {
            Ok(store) => Rc::new(store),
            Err(e) => {
                log::warn!("Store unavailable, progress will not persist: {}", e);
                Rc::new(MemoryStore::new())
            }
        };

        let settings = Settings::load(&*store);
        log::info!(
            "Notifications {}",
            if settings.notifications { "on" } else { "off" }
        );

        for report in audit_levels() {
            log::info!(
                "Level {:2}: target {:?}, {} taps minimum",
                report.level,
                report.target,
                report.min_taps.unwrap_or(0)
            );
        }

        play_routing(Rc::clone(&store), &mut rng);
        play_tiles(Rc::clone(&store), &mut rng);
    }

    fn play_routing(store: Rc<dyn KeyValueStore>, rng: &mut Pcg32) {
        let mut game = RoutingController::new(store);
        for level in 1..=ROUTING_LEVELS {
            if let Err(e) = game.open(level) {
                log::warn!("{}", e);
                break;
            }

            for _ in 0..IDLE_TAPS {
                let row = rng.random_range(0..GRID_SIZE);
                let col = rng.random_range(0..GRID_SIZE);
                let _ = game.tap_cell(row, col);
                game.advance(IDLE_STEP);
            }

            let Some(session) = game.session() else {
                break;
            };
            if session.phase() != Phase::Won {
                if let Some(taps) = solve(session.board()) {
                    for Pos { row, col } in taps {
                        let _ = game.tap_cell(row, col);
                    }
                }
            }

            if let Some(session) = game.session() {
                log::info!(
                    "Routing level {} {:?} with {} left",
                    level,
                    session.phase(),
                    format_clock(session.remaining_secs() as i64)
                );
            }
            if let Some(msg) = game.share_message() {
                share_quietly(&LogShare, &msg);
            }
        }
        game.home();
        log::info!("Routing unlocked up to level {}", game.unlocked());
    }

    fn play_tiles(store: Rc<dyn KeyValueStore>, rng: &mut Pcg32) {
        let mut game = TileController::new(store);
        for puzzle in 1..=TILE_PUZZLES {
            if let Err(e) = game.open(puzzle) {
                log::warn!("{}", e);
                break;
            }
            let _ = game.start();

            // A couple of stray selections
            for _ in 0..2 {
                let cell = rng.random_range(0..TILE_COUNT);
                let _ = game.tap(cell);
                let _ = game.tap(cell);
            }
            game.advance(Duration::from_secs(1));

            let swaps = match game.session() {
                Some(session) => solve_swaps(session.board()),
                None => break,
            };
            for (a, b) in swaps {
                let _ = game.tap(a);
                let _ = game.tap(b);
            }

            if let Some(session) = game.session() {
                log::info!(
                    "Tile puzzle {} {:?} with {} left",
                    puzzle,
                    session.phase(),
                    format_clock(session.remaining_secs() as i64)
                );
            }
        }
        game.home();
        log::info!("Tiles unlocked up to puzzle {}", game.unlocked());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native_demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    golden_bull::platform::init_logging();
    match golden_bull::platform::open_store() {
        Ok(store) => {
            let progress = golden_bull::ProgressStore::new(store);
            log::info!(
                "Routing unlocked: {}, tiles unlocked: {}",
                progress.unlocked(golden_bull::GameMode::Routing),
                progress.unlocked(golden_bull::GameMode::Tiles)
            );
        }
        Err(e) => log::warn!("LocalStorage unavailable: {}", e),
    }
}
