// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple to sequence conversion, the stand-in for variadic scalar arguments

use super::{Index, Jumps, Shape, Strides};

/// $m: macro callback
/// $m is called with $arg and then the indices corresponding to the size argument
macro_rules! index {
    ($m:ident $arg:tt 0) => ($m!($arg));
    ($m:ident $arg:tt 1) => ($m!($arg 0));
    ($m:ident $arg:tt 2) => ($m!($arg 0 1));
    ($m:ident $arg:tt 3) => ($m!($arg 0 1 2));
    ($m:ident $arg:tt 4) => ($m!($arg 0 1 2 3));
    ($m:ident $arg:tt 5) => ($m!($arg 0 1 2 3 4));
    ($m:ident $arg:tt 6) => ($m!($arg 0 1 2 3 4 5));
}

macro_rules! index_item {
    ($m:ident $arg:tt 7) => ($m!($arg 0 1 2 3 4 5 6););
}

macro_rules! sub {
    ($_x:tt $y:tt) => {
        $y
    };
}

macro_rules! tuple_type {
    ([$T:ident] $($index:tt)*) => (
        ( $(sub!($index $T), )* )
    )
}

macro_rules! array_expr {
    ([$self_:expr] $($index:tt)*) => (
        [$($self_ . $index, )*]
    )
}

macro_rules! tuple_to_sequence {
    ([$name:ident $T:ident] $($n:tt)*) => {
        $(
        impl From<index!(tuple_type [$T] $n)> for $name<$n>
        {
            #[inline(always)]
            #[allow(unused_variables, clippy::unused_unit)]
            fn from(tuple: index!(tuple_type [$T] $n)) -> Self
            {
                $name::new(index!(array_expr [tuple] $n))
            }
        }
        )*
    }
}

index_item!(tuple_to_sequence [Shape usize] 7);
index_item!(tuple_to_sequence [Index usize] 7);
index_item!(tuple_to_sequence [Jumps isize] 7);
index_item!(tuple_to_sequence [Strides usize] 7);
