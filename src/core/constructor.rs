//! Binding action constructors to their argument tuples.

/// A function that builds an action from a positional argument tuple.
///
/// Implemented for every `Fn(T1, .., Tn) -> A` up to eight arguments, which
/// covers tuple-variant constructors such as `CounterAction::add`. The
/// argument tuple `Args` is inferred from the function's signature, so a
/// bound invoker accepts exactly the declared parameter types.
///
/// ```rust
/// use statehub::Constructor;
///
/// #[derive(Debug, PartialEq)]
/// enum Op {
///     Rename(String, i32),
/// }
///
/// let op = Op::Rename.construct(("Bond, James".to_string(), 1));
/// assert_eq!(op, Op::Rename("Bond, James".to_string(), 1));
/// ```
pub trait Constructor<Args, A> {
    fn construct(&self, args: Args) -> A;
}

macro_rules! impl_constructor {
    ($($ty:ident),*) => {
        impl<F, A, $($ty,)*> Constructor<($($ty,)*), A> for F
        where
            F: Fn($($ty),*) -> A,
        {
            #[allow(non_snake_case, clippy::unused_unit)]
            fn construct(&self, ($($ty,)*): ($($ty,)*)) -> A {
                self($($ty),*)
            }
        }
    };
}

impl_constructor!();
impl_constructor!(T1);
impl_constructor!(T1, T2);
impl_constructor!(T1, T2, T3);
impl_constructor!(T1, T2, T3, T4);
impl_constructor!(T1, T2, T3, T4, T5);
impl_constructor!(T1, T2, T3, T4, T5, T6);
impl_constructor!(T1, T2, T3, T4, T5, T6, T7);
impl_constructor!(T1, T2, T3, T4, T5, T6, T7, T8);
