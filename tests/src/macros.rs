/// Instantiates each listed `async fn(&mut DbTest)` once per enabled driver.
///
/// ```ignore
/// async fn preload_latest(test: &mut DbTest) { ... }
///
/// tests!(preload_latest);
/// ```
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        #[cfg(feature = "memory")]
        mod memory {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    $crate::DbTest::run(
                        $crate::db::memory::SetupMemory::new(),
                        |test| Box::pin(super::$f(test)),
                    );
                }
            )*
        }

        #[cfg(feature = "postgresql")]
        mod postgresql {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    $crate::DbTest::run(
                        $crate::db::postgresql::SetupPostgreSQL::new(),
                        |test| Box::pin(super::$f(test)),
                    );
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
