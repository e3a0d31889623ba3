//! Greetings printed by the `hello-world` binary.

pub fn hello() -> String {
    "Hello, World!".to_string()
}

pub fn hello_with_name(name: &str) -> String {
    format!("Hello, {}!", name)
}
