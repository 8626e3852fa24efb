#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            actual => panic!("expected `Ok`; actual={:?}", actual),
        }
    };
}

/// Asserts that a collection of errors is empty, printing every error when it
/// is not.
#[macro_export]
macro_rules! assert_empty {
    ($e:expr) => {{
        let errors = &$e;
        if !errors.is_empty() {
            let listed: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            panic!("expected no errors; actual={:#?}", listed);
        }
    }};
}
