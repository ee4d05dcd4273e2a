//! Render a Lisp expression into:
//! - normalized Lisp on stdout, i.e. a mirror of the input
//! - Debug on stderr - the internal tree representation.
//!
//! ```ignore
//! <input.lisp lisp_to_text
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
        Ok(node) => {
            println!("{}", node);
            eprintln!("{:?}", node);
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
