use criterion::{Criterion, criterion_group, criterion_main};

use hand_rank::{Card, best_omaha_score, score5, score7};

fn parse5(cards: [&str; 5]) -> [Card; 5] {
    cards.map(|s| s.parse().unwrap())
}

fn score_one(c: &mut Criterion) {
    let hand = parse5(["Ah", "Kc", "Qd", "Js", "9c"]);
    c.bench_function("Score one 5 card hand", move |b| b.iter(|| score5(&hand)));
}

fn score_best_seven(c: &mut Criterion) {
    let hand: [Card; 7] =
        ["Ah", "Kc", "Qd", "Js", "9c", "9d", "2h"].map(|s| s.parse().unwrap());
    c.bench_function("Score best 5 card hand from 7", move |b| {
        b.iter(|| score7(&hand))
    });
}

fn score_omaha(c: &mut Criterion) {
    let board = parse5(["Ah", "Kh", "Qh", "2d", "3s"]);
    let hole: [Card; 4] = ["Jh", "Th", "4c", "5c"].map(|s| s.parse().unwrap());
    c.bench_function("Score one Omaha hand", move |b| {
        b.iter(|| best_omaha_score(&board, &hole))
    });
}

criterion_group!(benches, score_one, score_best_seven, score_omaha);
criterion_main!(benches);
