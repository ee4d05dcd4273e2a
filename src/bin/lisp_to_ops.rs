//! Lower a Lisp expression into its flattened instruction stream.
//!
//! ```ignore
//! <input.lisp lisp_to_ops
//! ```

use std::io::Read;

fn main() {
    tracing_subscriber::fmt::init();

    let mut input = std::io::stdin().lock();
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .expect("error: could not read input");
    let s = String::from_utf8(bytes).expect("error: input is not UTF-8");

    match lisplet::read(&s) {
        Ok(node) => println!("{}", lisplet::lower(&node)),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
