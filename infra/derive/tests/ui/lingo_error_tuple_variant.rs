use lingo_derive::lingo_error;

#[lingo_error]
pub enum DemoError {
    #[error("I/O failure: {0}")]
    Io(std::io::Error),
}

fn main() {}
