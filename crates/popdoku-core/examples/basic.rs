//! Basic example of using the popdoku engine

use popdoku_core::{check_win, Generator, GeneratorConfig, Position, WinStatus};

fn main() {
    // Generate a game with the default 25-30 clue range
    println!("Generating a puzzle...\n");
    let mut generator = Generator::new();
    let game = generator.new_game();

    println!("Puzzle:");
    println!("{}", game.puzzle);
    println!("Given cells: {}", game.given.given_count());
    println!("Empty cells: {}\n", 81 - game.puzzle.filled_count());

    println!("Solution:");
    println!("{}", game.solution);

    // The carved puzzle still has blanks
    match check_win(&game.puzzle, &game.solution) {
        WinStatus::Incomplete => println!("Puzzle has blanks left to fill."),
        WinStatus::Won => println!("Puzzle is already solved?!"),
        WinStatus::Incorrect => println!("Puzzle disagrees with its own solution?!"),
    }

    // Filling every blank from the solution wins the game
    let mut played = game.puzzle;
    for pos in Position::all() {
        if played.get(pos) == 0 {
            played.set(pos, game.solution.get(pos));
        }
    }
    println!("After copying the solution in: {:?}", check_win(&played, &game.solution));

    // A custom clue range makes easier or harder boards
    let mut easy = Generator::with_config(GeneratorConfig {
        min_clues: 35,
        max_clues: 40,
    });
    let game = easy.new_game();
    println!("\nEasier puzzle with {} givens:", game.given.given_count());
    println!("{}", game.puzzle);
}
