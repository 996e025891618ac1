use criterion::{black_box, criterion_group, criterion_main, Criterion};

use word_grid::board::{Board, GridCell};
use word_grid::cards::{Category, WordCard};
use word_grid::core::{BoardConfig, PlayerId, SplitPolicy};
use word_grid::rules::BoardValidator;

use Category::*;

/// Every row full: sentences, conjunction splits, letter groups and junk.
fn full_board() -> Board {
    let rows: [&[(&str, Category)]; 5] = [
        &[
            ("The", Article),
            ("Dog", Noun),
            ("Runs", Verb),
            ("In", Preposition),
            ("The", Article),
            ("Park", Noun),
            ("Run", Verb),
            ("The", Article),
        ],
        &[
            ("Dogs", Noun),
            ("Bark", Verb),
            ("And", Conjunction),
            ("Cats", Noun),
            ("Meow", Verb),
            ("Or", Conjunction),
            ("Birds", Noun),
            ("Sing", Verb),
        ],
        &[
            ("Big", Adjective),
            ("Bad", Adjective),
            ("Bold", Adjective),
            ("Blue", Adjective),
            ("Bears", Noun),
            ("Bite", Verb),
            ("Badly", Adverb),
            ("By", Preposition),
        ],
        &[
            ("I", Pronoun),
            ("Run", Verb),
            ("Fast", Adverb),
            ("But", Conjunction),
            ("You", Pronoun),
            ("Walk", Verb),
            ("So", Conjunction),
            ("Up", Preposition),
        ],
        &[
            ("Cook", Verb),
            ("Cake", Noun),
            ("While", Conjunction),
            ("She", Pronoun),
            ("Sleeps", Verb),
            ("And", Conjunction),
            ("We", Pronoun),
            ("Eat", Verb),
        ],
    ];

    let mut board = Board::new(5, 8);
    for (row, words) in rows.iter().enumerate() {
        for (col, &(text, category)) in words.iter().enumerate() {
            let card = WordCard::new(format!("{row}-{col}"), text, [category]);
            board.place(row, col, GridCell::new(card, PlayerId::new(0)));
        }
    }
    board
}

fn bench_validate(c: &mut Criterion) {
    let board = full_board();
    let single = BoardValidator::default();
    let recursive =
        BoardValidator::with_config(BoardConfig::default().with_split_policy(SplitPolicy::Recursive));

    c.bench_function("validate_full_board", |b| {
        b.iter(|| single.validate(black_box(&board)))
    });
    c.bench_function("validate_full_board_recursive", |b| {
        b.iter(|| recursive.validate(black_box(&board)))
    });
    c.bench_function("validate_empty_board", |b| {
        let empty = Board::new(5, 8);
        b.iter(|| single.validate(black_box(&empty)))
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
