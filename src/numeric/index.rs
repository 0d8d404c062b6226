// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use num_traits::PrimInt;

use std::{fmt::Debug, hash::Hash};

/// Integer type used to store vertex and face ids in connectivity arrays.
///
/// Narrow types keep large meshes compact; conversion to `usize` happens at
/// the point of use.
pub trait MeshIndex: PrimInt + Hash + Debug + Default + Send + Sync + 'static {
    fn to_index(self) -> usize;

    /// Panics if `i` does not fit in `Self`.
    fn from_index(i: usize) -> Self;
}

macro_rules! impl_mesh_index {
    ($($t:ty),*) => {
        $(
            impl MeshIndex for $t {
                #[inline(always)]
                fn to_index(self) -> usize {
                    debug_assert!(num_traits::ToPrimitive::to_usize(&self).is_some(), "negative mesh index");
                    self as usize
                }

                #[inline(always)]
                fn from_index(i: usize) -> Self {
                    <$t as num_traits::NumCast>::from(i)
                        .unwrap_or_else(|| panic!("index {i} does not fit in {}", stringify!($t)))
                }
            }
        )*
    };
}

impl_mesh_index!(u16, u32, u64, usize, i16, i32, i64);
