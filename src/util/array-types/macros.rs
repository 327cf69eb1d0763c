/* ************************************************************************ **
** This file is part of fixla, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Higher-order macro that iterates over a cartesian product.
///
/// Every type in this crate has a fixed arity, and most of their impls differ
/// only in that arity, so nearly everything is generated through this.
///
/// It takes a number of groups of token trees and a suitable definition
/// for a callback macro, and it calls the macro with one token tree from
/// each group in order.
///
/// See the examples module in the source for example usage.
macro_rules! cartesian {
    (
        $([$($groups:tt)*])*
        $mac:ident!($($mac_match:tt)*)
        => {$($mac_body:tt)*}$(;)*
    )
    => {
        macro_rules! $mac {
            ($($mac_match)*) => {$($mac_body)*};
        }
        cartesian__!{ @product::next($([$($groups)*])*) -> ($mac!()) }
    };
}

/// implementation detail, go away
macro_rules! cartesian__ {

    (@product::next([$($token:tt)+] $($rest:tt)*) -> $cb:tt)
    => { cartesian__!{ @product::unpack([$($token)+] $($rest)*) -> $cb } };
    // base case; direct product of no arguments
    (@product::next() -> ($mac:ident!($($args:tt)*)))
    => {$mac!{$($args)*}};

    // Each direct product in the invocation incurs a fixed number of recursions
    //  as we replicate the macro.  First, we must smash anything we want to replicate
    //  into a single tt that can be matched without repetitions.  Do this to `rest`.
    (@product::unpack([$($token:tt)*] $($rest:tt)*) -> $cb:tt)
    => {cartesian__!{ @product::unpack_2([$($token)*] [$($rest)*]) -> $cb }};

    // Replicate macro for each token.
    (@product::unpack_2([$($token:tt)*] $rest:tt) -> $cb:tt)
    => { $( cartesian__!{ @product::unpack_3($token $rest) -> $cb } )* };

    // Expand the unparsed arguments back to normal;
    // add the token into the macro call
    (@product::unpack_3($token:tt [$($rest:tt)*]) -> ($mac:ident!($($args:tt)*)))
    => {cartesian__!{ @product::next($($rest)*) -> ($mac!($($args)*$token)) }};
}

/// `cartesian!` with some predefined groups used in the library's public API.
///
/// See the examples module in the source for example usage.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each__!{[$($arg)*] -> []} };
}

macro_rules! gen_each__ {
    //----------------------------
    // Groups using the standard syntax supported by cartesian

    ([[$($alternatives:tt)*] $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        $($alternatives)*
    ]] }};

    //----------------------------
    // Special groups of the form @{...}

    // Fixed sized vector types
    ([@{Vn} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {Vector2} {Vector3} {Vector4}
    ]] }};

    // ...along with their size
    ([@{Vn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {Vector2 2} {Vector3 3} {Vector4 4}
    ]] }};

    // ...along with their size, and the constructor argument, accessor name,
    //    and index of each component
    ([@{Vn_n_parts} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {Vector2 2 [(x v0 0) (y v1 1)]}
        {Vector3 3 [(x v0 0) (y v1 1) (z v2 2)]}
        {Vector4 4 [(x v0 0) (y v1 1) (z v2 2) (w v3 3)]}
    ]] }};

    // Square matrices, their row vector types, and size
    ([@{Mnn_Vn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {Matrix22 Vector2 2} {Matrix44 Vector4 4}
    ]] }};

    // Taking an operand by value or by reference
    ([@{by_ref} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        [(   ) (   )] [('a,) (&'a)]
    ]] }};

    // ...and for a second operand, with a distinct lifetime
    ([@{by_ref_b} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        [(   ) (   )] [('b,) (&'b)]
    ]] }};

    // Finally: Delegate to `cartesian`
    ([$mac:ident!$($defn_args:tt)*] -> [$($groups:tt)*])
    => {
        cartesian!{
            $($groups)*
            $mac!$($defn_args)*
        }
    };
}

/// Expands to `f32`, whatever it is given.
///
/// Lets a list of component names stand in for a tuple of floats.
macro_rules! f32_for {
    ($($ignored:tt)*) => { f32 };
}

#[cfg(test)]
mod examples {
    mod cartesian {
        trait Trait { }
        // NOTE: Braces around the alternatives are not strictly necessary
        //       (cartesian simply iterates over token trees), but they tend
        //       to help group tokens and resolve any would-be ambiguities in
        //       the callback's match pattern.
        cartesian!{
            [{i32} {u32}]
            [{0} {1} {2} {3}]
            unique_name!({$T:ty} {$n:expr})
            => {
                impl Trait for [$T; $n] { }
            }
        }

        #[test]
        fn example_works() {
            fn assert_trait<T:Trait>() {}
            assert_trait::<[u32; 0]>();
            assert_trait::<[i32; 2]>();
        }
    }

    mod gen_each {
        use crate::types::*;

        trait Trait { fn len() -> usize; }
        gen_each!{
            @{Vn_n}          // equivalent to [{Vector2 2} {Vector3 3} {Vector4 4}]
            [{i32} {u32}]    // explicitly defined groups are still allowed
            unique_name!({$Vn:ident $n:tt} {$B:ty})
            => {
                impl Trait for ($Vn, $B) { fn len() -> usize { $n } }
            }
        }

        #[test]
        fn example_works() {
            fn len_of<T: Trait>() -> usize { T::len() }
            assert_eq!(len_of::<(Vector3, i32)>(), 3);
            assert_eq!(len_of::<(Vector4, u32)>(), 4);
        }
    }
}
