// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Everything that knows about morse code: the alphabet, element timing and
//! assembling whole messages.

pub mod encoder;
pub mod table;
pub mod timing;

pub use encoder::{encode, EncodeError, Encoder};
pub use table::{MorseCodeTable, Symbol};
pub use timing::{timings_for, LookupError, TimingSegment};
