use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use reversi_engine::{Disc, Engine, Point, SIZE};

/// Cadence of the automated Light mover.
const TICK: Duration = Duration::from_millis(700);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reversi_session=info".into()),
        )
        .init();

    let mut engine = Engine::new();
    println!("You play Dark. Enter moves as \"row col\" (0-7).");
    render(&engine);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some((row, col)) = engine.play_auto() {
                    tracing::debug!("light plays ({row}, {col})");
                    render(&engine);
                }
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(input)) => handle_input(&mut engine, &input),
                    Ok(None) => break, // stdin closed
                    Err(e) => {
                        tracing::error!("stdin error: {e}");
                        break;
                    }
                }
            }
        }

        if engine.is_over() {
            // Dropping the interval here is the teardown: no tick can fire
            // against a finished game.
            println!("result: {}", engine.outcome());
            break;
        }
    }
}

fn handle_input(engine: &mut Engine, input: &str) {
    let Some(point) = parse_point(input) else {
        tracing::warn!("expected \"row col\", got: {input}");
        return;
    };
    if engine.handle_click(point) {
        render(engine);
    } else {
        tracing::warn!("rejected move: {input}");
    }
}

fn parse_point(input: &str) -> Option<Point> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn render(engine: &Engine) {
    let board = engine.board();
    let mut out = String::from("  0 1 2 3 4 5 6 7\n");
    for row in 0..SIZE {
        out.push_str(&format!("{row} "));
        for col in 0..SIZE {
            let cell = match board.disc_at((row, col)) {
                Some(disc) => disc.letter(),
                None => ".",
            };
            out.push_str(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "dark {} - light {} | {}",
        board.count(Disc::Dark),
        board.count(Disc::Light),
        engine.stage()
    ));
    println!("{out}");
}
