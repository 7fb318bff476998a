/// Builds an [`FvvTree`](crate::FvvTree) from a JSON-like literal.
///
/// Keys are string literals. A value is a nested `{ ... }` group, a `[ ... ]` list of
/// expressions of one type, or any expression convertible into
/// [`FvvValue`](crate::FvvValue).
///
/// # Examples
///
/// ```rust
/// use fvv::fvv;
///
/// let port = 8080;
/// let tree = fvv!({
///     "server": {
///         "host": "localhost",
///         "port": port,
///     },
///     "weights": [0.5, 0.25],
///     "debug": false
/// });
///
/// assert_eq!(tree.get("server.port").unwrap().as_int(), 8080);
/// assert_eq!(tree.get("weights").unwrap().as_doubles(), &[0.5, 0.25]);
/// assert!(!tree.get("debug").unwrap().as_bool());
/// ```
#[macro_export]
macro_rules! fvv {
    ({}) => {
        $crate::FvvTree::new()
    };

    ({ $($body:tt)+ }) => {{
        let mut tree = $crate::FvvTree::new();
        {
            let mut node = tree.root_mut();
            $crate::fvv!(@fill node; $($body)+);
        }
        tree
    }};

    (@fill $node:ident; ) => {};

    (@fill $node:ident; $key:literal : { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        {
            #[allow(unused_mut, unused_variables)]
            let mut child = $node.reborrow().child($key);
            $crate::fvv!(@fill child; $($inner)*);
        }
        $crate::fvv!(@fill $node; $($($rest)*)?);
    };

    (@fill $node:ident; $key:literal : [] $(, $($rest:tt)*)?) => {
        $node.reborrow().child($key).set($crate::FvvValue::Empty);
        $crate::fvv!(@fill $node; $($($rest)*)?);
    };

    (@fill $node:ident; $key:literal : [ $($elem:expr),+ $(,)? ] $(, $($rest:tt)*)?) => {
        $node.reborrow().child($key).set(vec![$($elem),+]);
        $crate::fvv!(@fill $node; $($($rest)*)?);
    };

    (@fill $node:ident; $key:literal : $value:expr $(, $($rest:tt)*)?) => {
        $node.reborrow().child($key).set($value);
        $crate::fvv!(@fill $node; $($($rest)*)?);
    };
}
