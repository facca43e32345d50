use std::num::NonZero;

use bimaru::{BoardBuilder, Cell, Location};

fn main() {
    let mut builder = BoardBuilder::with_size(NonZero::new(10).unwrap());
    builder
        .row_targets(&[7, 0, 5, 1, 3, 1, 1, 1, 1, 0])
        .col_targets(&[5, 1, 3, 2, 1, 2, 2, 2, 0, 2])
        .add_hint(Location(0, 0), Cell::Left)
        .add_hint(Location(4, 9), Cell::Top);
    let board = builder.build().unwrap();

    print!("{}", board);
    println!();

    let solved = board.solve().expect("this puzzle is solvable");
    print!("{}", solved);
}
