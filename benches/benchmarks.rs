use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pacsearch::env::Direction;
use pacsearch::evaluation::{better, Evaluation};
use pacsearch::game::Game;
use pacsearch::search::{alphabeta, expectimax, minimax, GameState};

const LAYOUT: &str = r#"
    %%%%%%%%%%%%%%%%%%%%
    %......%G  G%......%
    %.%%...%%  %%...%%.%
    %.%o.%........%.o%.%
    %.%%.%.%%%%%%.%.%%.%
    %........P.........%
    %%%%%%%%%%%%%%%%%%%%"#;

fn game_step(c: &mut Criterion) {
    let game = Game::parse(LAYOUT).unwrap();

    c.bench_function("game_step", |b| {
        b.iter(|| {
            use Direction::*;
            let game = game
                .successor(0, black_box(Right))
                .successor(1, black_box(Right))
                .successor(2, black_box(Left))
                .successor(0, black_box(Left));
            black_box(game)
        })
    });
}

fn evaluation(c: &mut Criterion) {
    let game = Game::parse(LAYOUT).unwrap();
    c.bench_function("better", |b| b.iter(|| better(black_box(&game))));
}

fn search(c: &mut Criterion) {
    let game = Game::parse(LAYOUT).unwrap();
    let heuristic = Evaluation::Better;

    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for depth in [1, 2] {
        group.bench_function(format!("minimax_{depth}"), |b| {
            b.iter(|| minimax(black_box(&game), depth, &heuristic))
        });
        group.bench_function(format!("alphabeta_{depth}"), |b| {
            b.iter(|| alphabeta(black_box(&game), depth, &heuristic))
        });
        group.bench_function(format!("expectimax_{depth}"), |b| {
            b.iter(|| expectimax(black_box(&game), depth, &heuristic))
        });
    }
    group.finish();
}

criterion_group!(benches, game_step, evaluation, search);
criterion_main!(benches);
