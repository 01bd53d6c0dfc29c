use outcome_rail::prelude::*;

#[derive(Debug)]
enum InputError {
    IsNotString,
    IsNotInteger,
}

impl_kinded!(InputError => &'static str {
    InputError::IsNotString => "is_not_string",
    InputError::IsNotInteger => "is_not_integer",
});

// Terminal consumer: resolving both outcomes dispatches any pending
// handlers before the fallback kicks in.
fn sum(lhs: Outcome<i32, InputError>, rhs: Outcome<i32, InputError>) -> i32 {
    match (lhs.resolve(), rhs.resolve()) {
        (Ok(a), Ok(b)) => a + b,
        _ => 0,
    }
}

fn classify(raw: &str) -> Outcome<i32, InputError> {
    raw.parse::<i32>()
        .map_err(|_| InputError::IsNotInteger)
        .into_outcome()
}

fn annotated_failure(error: InputError) -> Outcome<String, InputError> {
    Outcome::error(error)
        .handle_kind("is_not_string", |_| println!("Is not a String, sorry =("))
        .handle_kind("is_not_integer", |_| println!("Is not an Integer, sorry =("))
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Composing a success pipeline
    println!("\n1. Success pipeline:");
    let ten = Outcome::<i32, InputError>::ok(2)
        .map(|x| x + 3)
        .and_then(|x| Outcome::ok(x * 2))
        .resolve();
    println!("ok(2).map(+3).and_then(*2) resolved to {:?}", ten);

    // 2. Terminal consumption with a fallback
    println!("\n2. Consuming outcomes:");
    let total = sum(classify("19"), classify("23"));
    println!("sum of parsed inputs: {}", total);
    let fallback = sum(classify("19"), classify("twenty"));
    println!("sum with a bad input falls back to: {}", fallback);

    // 3. Kind-scoped handlers fire on resolve
    println!("\n3. Kind-scoped handlers:");
    match annotated_failure(InputError::IsNotString).resolve() {
        Ok(_) => println!("Success!"),
        Err(e) => println!("Error surfaced: {:?}", e),
    }
}
