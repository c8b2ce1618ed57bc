use miniasm::lang::{ExtLevel, Ident};
use miniasm::mach::{Program, Runtime};
use std::convert::TryFrom;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn var(ch: char) -> Ident {
    Ident::try_from(ch).unwrap()
}

pub fn runtime(source: &str, bindings: &[(char, i64)], ext: ExtLevel) -> Runtime {
    init();
    let program = Program::parse(source, ext).unwrap();
    let mut runtime = Runtime::new(program);
    for (ch, value) in bindings {
        runtime.bind(var(*ch), *value);
    }
    runtime
}
