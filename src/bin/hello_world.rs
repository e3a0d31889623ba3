use log::debug;
use number_baseball::greeting::{hello, hello_with_name};

fn main() {
    env_logger::init();
    debug!("printing greetings");

    println!("{}", hello());
    println!("{}", hello_with_name("Rust"));
}
