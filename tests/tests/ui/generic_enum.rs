#[allow(dead_code)]
#[derive(tagged::Enum)]
enum Wrapper<T> {
    Some(T),
}

fn main() {}
