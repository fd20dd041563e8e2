/// Asserts that the provided block panics, catching the unwind so the test can continue.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic but returned normally")
    };
    ($run:block, $msg:literal) => {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(outcome.is_err(), $msg);
        println!("^ expected panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
