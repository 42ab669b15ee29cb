//! Handler trait over argument tuples

/// A callback that accepts the argument tuple `Args`, unpacked
///
/// Implemented for every `Fn(A1, ..., An) + Send + Sync + 'static` with
/// `Args = (A1, ..., An)` and `n` from 1 to 8, so handlers are plain
/// closures taking `n` parameters. Parameter types must be spelled out in
/// the closure (`|name: String, age: u32| ...`), since they are not
/// inferred through this trait.
pub trait Handler<Args>: Send + Sync + 'static {
    /// Invoke the handler with `args` spread over its parameters
    fn call(&self, args: Args);
}

macro_rules! impl_handler {
    ($($arg:ident),+) => {
        impl<Func, $($arg,)+> Handler<($($arg,)+)> for Func
        where
            Func: Fn($($arg),+) + Send + Sync + 'static,
        {
            #[allow(non_snake_case)]
            fn call(&self, ($($arg,)+): ($($arg,)+)) {
                (self)($($arg),+)
            }
        }
    };
}

impl_handler!(A1);
impl_handler!(A1, A2);
impl_handler!(A1, A2, A3);
impl_handler!(A1, A2, A3, A4);
impl_handler!(A1, A2, A3, A4, A5);
impl_handler!(A1, A2, A3, A4, A5, A6);
impl_handler!(A1, A2, A3, A4, A5, A6, A7);
impl_handler!(A1, A2, A3, A4, A5, A6, A7, A8);
