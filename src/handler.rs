//! Handler trait and the adapters that feed it.
//!
//! The dispatch queue only ever sees one type, [`BoxedHandler`]. Three shapes
//! convert into it when a route is registered:
//!
//! ```text
//! impl Handler for MyType { … }                        ← implement it directly
//! fn show(w: &mut dyn ResponseWriter, req: &mut Request<'_>)
//!                                                      ← blanket impl over Fn
//! unchained(|w, req: &http::Request<Bytes>| { … })     ← plain http handler,
//!                                                        never calls next
//! ```
//!
//! Anything else fails to compile, so a route can never hold a handler that
//! dispatch does not understand.

use std::sync::Arc;

use bytes::Bytes;

use crate::request::Request;
use crate::response::ResponseWriter;

/// One unit of request processing inside a route's chain.
///
/// A handler either answers the request through `w` or hands control on with
/// [`Request::next`]. Both are allowed; so is doing neither.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, w: &mut dyn ResponseWriter, req: &mut Request<'_>);
}

/// A type-erased handler shared across concurrent requests.
pub type BoxedHandler = Arc<dyn Handler>;

impl<F> Handler for F
where
    F: Fn(&mut dyn ResponseWriter, &mut Request<'_>) + Send + Sync + 'static,
{
    fn call(&self, w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
        (self)(w, req)
    }
}

/// Pins a closure to the handler signature so its argument types are inferred.
///
/// ```rust
/// use baton::{Mux, ResponseWriter, handler_fn};
///
/// let mux = Mux::new().get("/", handler_fn(|w, _req| {
///     let _ = w.text("hello");
/// }));
/// ```
pub fn handler_fn<F>(f: F) -> F
where
    F: Fn(&mut dyn ResponseWriter, &mut Request<'_>) + Send + Sync + 'static,
{
    f
}

// ── Plain http handlers ───────────────────────────────────────────────────────

/// Adapter for a handler written against plain `http` types.
///
/// It sees the request exactly as the transport delivered it and has no way
/// to continue the chain, so it always ends dispatch.
pub struct Unchained<F>(F);

/// Wraps a plain `http` handler. See [`Unchained`].
pub fn unchained<F>(f: F) -> Unchained<F>
where
    F: Fn(&mut dyn ResponseWriter, &http::Request<Bytes>) + Send + Sync + 'static,
{
    Unchained(f)
}

impl<F> Handler for Unchained<F>
where
    F: Fn(&mut dyn ResponseWriter, &http::Request<Bytes>) + Send + Sync + 'static,
{
    fn call(&self, w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
        (self.0)(w, req.inner())
    }
}

// ── Handler lists ─────────────────────────────────────────────────────────────

/// Anything that converts into the ordered handler chain of one route.
///
/// Implemented for tuples of up to eight handlers and for a
/// `Vec<BoxedHandler>` assembled at runtime. `()` and an empty `Vec` convert
/// to an empty chain, which registration rejects.
pub trait IntoHandlers {
    fn into_handlers(self) -> Vec<BoxedHandler>;
}

impl IntoHandlers for Vec<BoxedHandler> {
    fn into_handlers(self) -> Vec<BoxedHandler> {
        self
    }
}

impl IntoHandlers for () {
    fn into_handlers(self) -> Vec<BoxedHandler> {
        Vec::new()
    }
}

macro_rules! impl_into_handlers_for_tuple {
    ($($param:ident)*) => {
        impl<$($param,)*> IntoHandlers for ($($param,)*)
        where
            $($param: Handler,)*
        {
            #[allow(non_snake_case)]
            fn into_handlers(self) -> Vec<BoxedHandler> {
                let ($($param,)*) = self;
                vec![$(Arc::new($param) as BoxedHandler,)*]
            }
        }
    };
}

impl_into_handlers_for_tuple! { A }
impl_into_handlers_for_tuple! { A B }
impl_into_handlers_for_tuple! { A B C }
impl_into_handlers_for_tuple! { A B C D }
impl_into_handlers_for_tuple! { A B C D E }
impl_into_handlers_for_tuple! { A B C D E F }
impl_into_handlers_for_tuple! { A B C D E F G }
impl_into_handlers_for_tuple! { A B C D E F G H }

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::{BoxedHandler, Handler, IntoHandlers, handler_fn, unchained};
    use crate::request::Request;
    use crate::response::ResponseWriter;

    struct Named;

    impl Handler for Named {
        fn call(&self, w: &mut dyn ResponseWriter, _req: &mut Request<'_>) {
            let _ = w.text("named");
        }
    }

    fn plain_fn(w: &mut dyn ResponseWriter, _req: &mut Request<'_>) {
        let _ = w.text("fn");
    }

    fn assert_is_handler<T: Handler>(_handler: &T) {
        // no op
    }

    #[test]
    fn test_shapes_are_handlers() {
        assert_is_handler(&Named);
        assert_is_handler(&plain_fn);
        assert_is_handler(&handler_fn(|_w, _req| {}));
        assert_is_handler(&unchained(|_w, _req: &http::Request<Bytes>| {}));
    }

    #[test]
    fn test_tuples_keep_order_and_count() {
        assert_eq!((Named,).into_handlers().len(), 1);
        assert_eq!((Named, plain_fn, Named).into_handlers().len(), 3);
        assert_eq!((Named, Named, Named, Named, Named, Named, Named, Named).into_handlers().len(), 8);
    }

    #[test]
    fn test_empty_lists() {
        assert!(().into_handlers().is_empty());
        assert!(Vec::<BoxedHandler>::new().into_handlers().is_empty());
    }
}
