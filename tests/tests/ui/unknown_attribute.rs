#[allow(dead_code)]
#[derive(tagged::Enum)]
#[tagged(color = "red")]
enum Status {
    Active,
}

fn main() {}
