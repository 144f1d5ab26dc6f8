use lingo_derive::lingo_error;

#[lingo_error]
pub enum DemoError {
    #[error("I/O failure: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
