use lingo_derive::lingo_error;

#[lingo_error]
pub enum DemoError {
    #[error("Missing entry: {message}")]
    Missing { message: String, context: Option<String> },
}

fn main() {}
