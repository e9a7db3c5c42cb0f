// Passgen user interface
// The terminal front-end; screen logic itself lives in `navigation`.

pub mod terminal;
